// CSV ingestion — turns a UTF-8 CSV file into a Table.
//
// The first record is the header and supplies column names. Each field is
// typed on the way in: empty -> Missing, parses-as-float -> Number,
// everything else -> Text. No cleaning happens here; normalization is the
// engines' concern.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{RawValue, Table};

/// Load a CSV file into a Table.
///
/// Fails with context if the file can't be opened, has no header record,
/// or contains a record that isn't valid UTF-8.
pub fn load_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;

    // flexible(true): rows shorter or longer than the header are accepted
    // here and squared up by Table::new.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let columns: Vec<String> = reader
        .headers()
        .with_context(|| format!("cannot read header row of {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if columns.is_empty() {
        anyhow::bail!("{} has an empty header row", path.display());
    }

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("bad record at line {} of {}", i + 2, path.display()))?;
        rows.push(record.iter().map(type_field).collect());
    }

    info!(
        rows = rows.len(),
        columns = columns.len(),
        "Loaded {}",
        path.display()
    );

    Ok(Table::new(columns, rows))
}

/// Apply the ingestion typing rule to one CSV field.
fn type_field(field: &str) -> RawValue {
    if field.is_empty() {
        return RawValue::Missing;
    }
    // Numeric inference is deliberately strict: "1e3" and "0.5" count,
    // "1,000" and " 7" (CSV fields keep their whitespace) do not.
    match field.parse::<f64>() {
        Ok(n) => RawValue::Number(n),
        Err(_) => RawValue::Text(field.to_string()),
    }
}
