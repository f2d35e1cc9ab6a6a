// Column selection and its preconditions.
//
// Both engines take a validated ColumnSelection and never re-check column
// existence themselves. Every way a selection can be wrong (unknown column,
// fewer than two sources, id doubling as a source, duplicates) is caught
// here, before any computation runs.

use anyhow::Result;

use super::Table;

/// A validated choice of id column and source columns over one table.
///
/// Indices, not names, so the engines can address cells directly. Source
/// order is preserved — it drives the column order of the similarity matrix
/// and the export files.
#[derive(Debug, Clone)]
pub struct ColumnSelection {
    pub id_col: usize,
    pub source_cols: Vec<usize>,
}

impl ColumnSelection {
    /// Validate a selection by column name.
    pub fn new(table: &Table, id_col: &str, source_cols: &[String]) -> Result<Self> {
        let id_idx = table
            .column_index(id_col)
            .ok_or_else(|| anyhow::anyhow!("id column {id_col:?} not found in table"))?;

        if source_cols.len() < 2 {
            anyhow::bail!(
                "need at least 2 source columns to compare, got {}",
                source_cols.len()
            );
        }

        let mut indices = Vec::with_capacity(source_cols.len());
        for name in source_cols {
            let idx = table
                .column_index(name)
                .ok_or_else(|| anyhow::anyhow!("source column {name:?} not found in table"))?;
            if idx == id_idx {
                anyhow::bail!("column {name:?} is the id column and cannot also be a source");
            }
            if indices.contains(&idx) {
                anyhow::bail!("source column {name:?} selected twice");
            }
            indices.push(idx);
        }

        Ok(Self {
            id_col: id_idx,
            source_cols: indices,
        })
    }

    /// The default selection: first column is the id, every other column is
    /// a source. This mirrors the expected RawData layout.
    pub fn default_for(table: &Table) -> Result<Self> {
        let columns = table.columns();
        if columns.len() < 3 {
            anyhow::bail!(
                "table has {} columns; need at least 1 id column + 2 source columns",
                columns.len()
            );
        }
        Ok(Self {
            id_col: 0,
            source_cols: (1..columns.len()).collect(),
        })
    }

    /// Source column names in selection order.
    pub fn source_names<'a>(&self, table: &'a Table) -> Vec<&'a str> {
        self.source_cols
            .iter()
            .map(|&i| table.columns()[i].as_str())
            .collect()
    }
}

/// Parse a comma-separated list of 1-based source indices ("1,3,4") into
/// column names, counting over the non-id columns in table order.
///
/// This matches how the columns are numbered by `lexivar columns`: the id
/// column is excluded from the numbering.
pub fn parse_source_indices(table: &Table, id_col: usize, input: &str) -> Result<Vec<String>> {
    let candidates: Vec<&String> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != id_col)
        .map(|(_, name)| name)
        .collect();

    let mut names = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        let n: usize = part
            .parse()
            .map_err(|_| anyhow::anyhow!("{part:?} is not a column number"))?;
        if n == 0 || n > candidates.len() {
            anyhow::bail!(
                "column number {n} out of range (1..={} source columns available)",
                candidates.len()
            );
        }
        names.push(candidates[n - 1].clone());
    }
    Ok(names)
}
