//! Key command - parses a slash-delimited document key.

use docmodel::{DocumentKey, model::ModelError};

use crate::cli::KeyArgs;
use crate::output::{OutputFormat, print_fields, print_json, print_segments};

/// Build the JSON report for a document key
pub fn report(args: &KeyArgs) -> Result<serde_json::Value, ModelError> {
    let key = DocumentKey::from_path_string(&args.path)?;
    Ok(serde_json::json!({
        "key": key.to_string(),
        "collection": key.collection_path().canonical_slash_string(),
        "document_id": key.document_id(),
        "segments": key.path().as_slice(),
    }))
}

/// Run the key command
pub fn run(args: &KeyArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            let key = DocumentKey::from_path_string(&args.path)?;
            print_fields(&[
                ("Key", key.to_string()),
                ("Collection", key.collection_path().canonical_slash_string()),
                ("Document", key.document_id().unwrap_or_default().to_string()),
                ("Segments", key.path().len().to_string()),
            ]);
            print_segments(key.path());
        }
        OutputFormat::Json => print_json(&report(args)?)?,
    }

    Ok(())
}
