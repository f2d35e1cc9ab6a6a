// Output formatting — terminal charts, CSV export, JSON payloads.

pub mod export;
pub mod json;
pub mod terminal;

/// Render an optional statistic for display: four decimals, or a dash for
/// the undefined ("no data") state. Undefined must stay visually distinct
/// from 0.0000.
pub fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "—".to_string(),
    }
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..20]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters in concept labels.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
