// CSV export for the two result tables.
//
// variation_results.csv: one record per row, input order, with the
// Concept_or_ID / Distinct_forms / Total_tokens / Variation_index header.
// similarity_matrix.csv: labeled square matrix, source names as both the
// header row and the first column.
//
// Undefined statistics are written as empty fields. An empty field is the
// only faithful CSV rendering of "no data" — writing 0 or 0.0 would turn a
// missing measurement into a real one.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::similarity::SimilarityMatrix;
use crate::variation::VariationRecord;

/// Write the per-row variation records to `path`.
pub fn write_variation_csv(records: &[VariationRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;

    writer.write_record(["Concept_or_ID", "Distinct_forms", "Total_tokens", "Variation_index"])?;
    for record in records {
        writer.write_record(&[
            record.concept_id.clone(),
            record.distinct_forms.to_string(),
            record.total_tokens.to_string(),
            stat_field(record.variation_index),
        ])?;
    }
    writer.flush()?;

    info!(rows = records.len(), "Wrote {}", path.display());
    Ok(())
}

/// Write the labeled similarity matrix to `path`.
pub fn write_similarity_csv(matrix: &SimilarityMatrix, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;

    // Header: empty corner cell, then source names
    let mut header = vec![String::new()];
    header.extend(matrix.labels().iter().cloned());
    writer.write_record(&header)?;

    for i in 0..matrix.len() {
        let mut row = vec![matrix.labels()[i].clone()];
        for j in 0..matrix.len() {
            row.push(stat_field(matrix.get(i, j)));
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;

    info!(sources = matrix.len(), "Wrote {}", path.display());
    Ok(())
}

/// Serialize an optional statistic as a CSV field: the bare float, or an
/// empty field for undefined.
fn stat_field(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => String::new(),
    }
}
