// Pairwise source-agreement matrix.
//
// For each pair of source columns: the fraction of rows where both have a
// form and those forms are string-equal. Rows where either side is missing
// don't count against the pair. A pair with no overlapping rows at all has
// undefined similarity (None), which is a different statement than 0.0.
//
// Only the upper triangle is computed; the lower triangle mirrors the same
// stored value, so M[i][j] == M[j][i] holds exactly, not approximately.

use serde::Serialize;

use crate::normalize::normalize_column;
use crate::table::{ColumnSelection, Table};

/// A labeled square matrix of pairwise source similarities.
///
/// Indexed by source position in selection order. Diagonal entries are
/// Some(1.0) by definition, even for a column with no data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatrix {
    labels: Vec<String>,
    cells: Vec<Option<f64>>,
}

impl SimilarityMatrix {
    fn with_diagonal(labels: Vec<String>) -> Self {
        let n = labels.len();
        let mut cells = vec![None; n * n];
        for i in 0..n {
            cells[i * n + i] = Some(1.0);
        }
        Self { labels, cells }
    }

    fn set_symmetric(&mut self, i: usize, j: usize, value: Option<f64>) {
        let n = self.labels.len();
        self.cells[i * n + j] = value;
        self.cells[j * n + i] = value;
    }

    /// Source column names, in matrix order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The similarity at (i, j); None means no eligible rows for the pair.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.cells[i * self.labels.len() + j]
    }
}

/// Compute the similarity matrix over the selected source columns.
///
/// Each column is normalized once; row correspondence is positional. Pure
/// function of the table and selection.
pub fn compute_similarity(table: &Table, selection: &ColumnSelection) -> SimilarityMatrix {
    let labels: Vec<String> = selection
        .source_names(table)
        .into_iter()
        .map(String::from)
        .collect();

    let columns: Vec<Vec<String>> = selection
        .source_cols
        .iter()
        .map(|&col| normalize_column((0..table.row_count()).map(|row| table.cell(row, col))))
        .collect();

    let mut matrix = SimilarityMatrix::with_diagonal(labels);
    for i in 0..columns.len() {
        for j in (i + 1)..columns.len() {
            matrix.set_symmetric(i, j, pair_similarity(&columns[i], &columns[j]));
        }
    }
    matrix
}

/// Agreement between two normalized columns over their eligible rows.
///
/// Eligible: both values non-empty. None when no row is eligible.
fn pair_similarity(a: &[String], b: &[String]) -> Option<f64> {
    let mut total_pairs = 0usize;
    let mut same = 0usize;

    for (va, vb) in a.iter().zip(b) {
        if va.is_empty() || vb.is_empty() {
            continue;
        }
        total_pairs += 1;
        if va == vb {
            same += 1;
        }
    }

    if total_pairs == 0 {
        None
    } else {
        Some(same as f64 / total_pairs as f64)
    }
}
