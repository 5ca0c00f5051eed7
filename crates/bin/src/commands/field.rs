//! Field command - parses a dotted field path.

use docmodel::{FieldPath, model::ModelError};

use crate::cli::FieldArgs;
use crate::output::{OutputFormat, print_fields, print_json, print_segments};

/// Build the JSON report for a field path
pub fn report(args: &FieldArgs) -> Result<serde_json::Value, ModelError> {
    let path = FieldPath::parse(&args.path)?;
    Ok(serde_json::json!({
        "input": args.path,
        "canonical": path.canonical_string(),
        "segments": path.segments().as_slice(),
        "is_key_field_path": path.is_key_field_path(),
    }))
}

/// Run the field command
pub fn run(args: &FieldArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            let path = FieldPath::parse(&args.path)?;
            tracing::debug!(input = %args.path, segments = path.len(), "Parsed field path");
            print_fields(&[
                ("Input", args.path.clone()),
                ("Canonical", path.canonical_string()),
                ("Segments", path.len().to_string()),
                ("Key field", path.is_key_field_path().to_string()),
            ]);
            print_segments(path.segments());
        }
        OutputFormat::Json => print_json(&report(args)?)?,
    }

    Ok(())
}
