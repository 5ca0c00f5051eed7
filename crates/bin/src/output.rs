//! Output formatting helpers for human-readable and JSON output.

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print `label: value` lines with the values aligned.
pub fn print_fields(fields: &[(&str, String)]) {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in fields {
        println!("{:<width$}  {}", format!("{label}:"), value, width = width + 1);
    }
}

/// Print a numbered list of segments, one per line.
pub fn print_segments<'a>(segments: impl IntoIterator<Item = &'a str>) {
    for (i, segment) in segments.into_iter().enumerate() {
        println!("  [{i}] {segment:?}");
    }
}

/// Print a JSON value on a single line.
pub fn print_json(value: &serde_json::Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
