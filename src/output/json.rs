// JSON payload for the --json output mode.
//
// Machine-readable rendition of both result tables in one document.
// Undefined statistics serialize as JSON null, which downstream tooling
// can tell apart from 0.0.

use anyhow::Result;
use serde::Serialize;

use crate::similarity::SimilarityMatrix;
use crate::variation::VariationRecord;

/// The complete analysis result as one serializable document.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub variation: &'a [VariationRecord],
    pub similarity: SimilarityReport,
}

/// The similarity matrix in row-major nested form, labels alongside.
#[derive(Debug, Serialize)]
pub struct SimilarityReport {
    pub sources: Vec<String>,
    pub matrix: Vec<Vec<Option<f64>>>,
}

impl SimilarityReport {
    pub fn from_matrix(matrix: &SimilarityMatrix) -> Self {
        let n = matrix.len();
        Self {
            sources: matrix.labels().to_vec(),
            matrix: (0..n)
                .map(|i| (0..n).map(|j| matrix.get(i, j)).collect())
                .collect(),
        }
    }
}

/// Render the full report as pretty-printed JSON.
pub fn render_report(records: &[VariationRecord], matrix: &SimilarityMatrix) -> Result<String> {
    let report = AnalysisReport {
        variation: records,
        similarity: SimilarityReport::from_matrix(matrix),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
