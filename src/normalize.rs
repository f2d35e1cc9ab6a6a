// Cell normalization — the two-state present/missing domain.
//
// Every raw cell collapses to either the canonical empty string (missing)
// or a trimmed non-empty string (present). Both engines compare only
// normalized values, so trimming and missing-value policy live in exactly
// one place.
//
// The literal string "nan" is treated as missing. Datasets exported from
// float-typed tools render absent cells that way, and a wordlist has no
// legitimate lowercase "nan" form that survives the case-sensitive match.

use crate::table::RawValue;

/// Canonicalize one raw cell value.
///
/// Total and deterministic: every RawValue maps to exactly one String,
/// and normalizing an already-normalized value returns it unchanged.
pub fn normalize(raw: &RawValue) -> String {
    let text = match raw {
        RawValue::Missing => return String::new(),
        // A NaN cell is an absent numeric value, not an observed form.
        RawValue::Number(n) if n.is_nan() => return String::new(),
        RawValue::Number(n) => format!("{n}"),
        RawValue::Text(s) => s.clone(),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "nan" {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Normalize a full column of cells, preserving row order.
///
/// The similarity engine normalizes each column once up front; row
/// correspondence across columns is positional.
pub fn normalize_column<'a>(cells: impl Iterator<Item = &'a RawValue>) -> Vec<String> {
    cells.map(normalize).collect()
}
