//! Compare command - orders two field paths or two document keys.

use std::cmp::Ordering;

use docmodel::{DocumentKey, FieldPath, model::ModelError};

use crate::cli::{CompareArgs, PathKind};
use crate::output::{OutputFormat, print_fields, print_json};

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    }
}

fn compare(args: &CompareArgs) -> Result<(Ordering, String, String), ModelError> {
    Ok(match args.kind {
        PathKind::Field => {
            let left = FieldPath::parse(&args.left)?;
            let right = FieldPath::parse(&args.right)?;
            (left.cmp(&right), left.to_string(), right.to_string())
        }
        PathKind::Key => {
            let left = DocumentKey::from_path_string(&args.left)?;
            let right = DocumentKey::from_path_string(&args.right)?;
            (left.cmp(&right), left.to_string(), right.to_string())
        }
    })
}

/// Build the JSON report for a comparison
pub fn report(args: &CompareArgs) -> Result<serde_json::Value, ModelError> {
    let (ordering, left, right) = compare(args)?;
    Ok(serde_json::json!({
        "left": left,
        "right": right,
        "ordering": symbol(ordering),
    }))
}

/// Run the compare command
pub fn run(args: &CompareArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            let (ordering, left, right) = compare(args)?;
            print_fields(&[("Result", format!("{left} {} {right}", symbol(ordering)))]);
        }
        OutputFormat::Json => print_json(&report(args)?)?,
    }

    Ok(())
}
