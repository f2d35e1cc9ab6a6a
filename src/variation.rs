// Per-row variation statistics.
//
// For each row: how many sources actually have a form (total_tokens), how
// many distinct forms those are (distinct_forms), and their ratio
// (variation_index). A row where every source is missing has no index —
// that is a valid "no data" state, kept as None rather than coerced to 0.

use std::collections::HashSet;

use serde::Serialize;

use crate::normalize::normalize;
use crate::table::{ColumnSelection, Table};

/// Variation statistics for one row.
///
/// `variation_index` is None exactly when `total_tokens` is 0. Otherwise it
/// is `distinct_forms / total_tokens`, in (0, 1]: 1/n for a fully uniform
/// row, 1.0 when every source has its own form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariationRecord {
    pub concept_id: String,
    pub distinct_forms: usize,
    pub total_tokens: usize,
    pub variation_index: Option<f64>,
}

/// Compute one VariationRecord per table row, in row order.
///
/// Pure function of the table and selection; re-running it yields identical
/// output. Row order is preserved — ranking and export correlate results
/// with rows by position.
pub fn compute_variation(table: &Table, selection: &ColumnSelection) -> Vec<VariationRecord> {
    table
        .rows()
        .map(|row| {
            let concept_id = row[selection.id_col].display_text();

            let mut total_tokens = 0;
            let mut forms: HashSet<String> = HashSet::with_capacity(selection.source_cols.len());
            for &col in &selection.source_cols {
                let value = normalize(&row[col]);
                if !value.is_empty() {
                    total_tokens += 1;
                    forms.insert(value);
                }
            }

            let distinct_forms = forms.len();
            let variation_index = if total_tokens == 0 {
                None
            } else {
                Some(distinct_forms as f64 / total_tokens as f64)
            };

            VariationRecord {
                concept_id,
                distinct_forms,
                total_tokens,
                variation_index,
            }
        })
        .collect()
}

/// Rank records by variation index descending, excluding undefined rows.
///
/// Ties keep input row order (stable sort). Returns at most `top_n` records.
pub fn rank_by_variation(records: &[VariationRecord], top_n: usize) -> Vec<&VariationRecord> {
    let mut ranked: Vec<&VariationRecord> = records
        .iter()
        .filter(|r| r.variation_index.is_some())
        .collect();
    ranked.sort_by(|a, b| {
        b.variation_index
            .partial_cmp(&a.variation_index)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RawValue;

    fn text(s: &str) -> RawValue {
        RawValue::Text(s.into())
    }

    fn table(rows: Vec<Vec<RawValue>>) -> (Table, ColumnSelection) {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let names: Vec<String> = std::iter::once("id".to_string())
            .chain((1..cols).map(|i| format!("s{i}")))
            .collect();
        let table = Table::new(names, rows);
        let selection = ColumnSelection::default_for(&table).unwrap();
        (table, selection)
    }

    #[test]
    fn mixed_case_and_whitespace_row() {
        // "Apple", " apple ", "apple", "" -> 3 tokens, 2 distinct forms
        let (t, sel) = table(vec![vec![
            text("c1"),
            text("Apple"),
            text(" apple "),
            text("apple"),
            text(""),
        ]]);
        let records = compute_variation(&t, &sel);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total_tokens, 3);
        assert_eq!(records[0].distinct_forms, 2);
        assert_eq!(records[0].variation_index, Some(2.0 / 3.0));
    }

    #[test]
    fn all_missing_row_has_undefined_index() {
        let (t, sel) = table(vec![vec![text("c1"), text(""), text("nan"), text("  ")]]);
        let records = compute_variation(&t, &sel);

        assert_eq!(records[0].total_tokens, 0);
        assert_eq!(records[0].distinct_forms, 0);
        assert_eq!(records[0].variation_index, None);
    }

    #[test]
    fn single_present_value() {
        let (t, sel) = table(vec![vec![text("c1"), text("apple"), text("")]]);
        let records = compute_variation(&t, &sel);

        assert_eq!(records[0].total_tokens, 1);
        assert_eq!(records[0].distinct_forms, 1);
        assert_eq!(records[0].variation_index, Some(1.0));
    }

    #[test]
    fn distinct_never_exceeds_total() {
        let (t, sel) = table(vec![
            vec![text("c1"), text("a"), text("a"), text("a")],
            vec![text("c2"), text("a"), text("b"), text("c")],
            vec![text("c3"), text("a"), text("b"), text("")],
        ]);
        for r in compute_variation(&t, &sel) {
            assert!(r.distinct_forms <= r.total_tokens);
            assert_eq!(r.variation_index.is_some(), r.total_tokens > 0);
        }
    }

    #[test]
    fn row_order_is_preserved() {
        let (t, sel) = table(vec![
            vec![text("first"), text("a"), text("b")],
            vec![text("second"), text("a"), text("a")],
        ]);
        let records = compute_variation(&t, &sel);
        assert_eq!(records[0].concept_id, "first");
        assert_eq!(records[1].concept_id, "second");
    }

    #[test]
    fn id_is_carried_through_unnormalized() {
        let (t, sel) = table(vec![vec![text(" c1 "), text("a"), text("b")]]);
        let records = compute_variation(&t, &sel);
        assert_eq!(records[0].concept_id, " c1 ");
    }

    #[test]
    fn numeric_id_renders_as_text() {
        let (t, sel) = table(vec![vec![RawValue::Number(42.0), text("a"), text("b")]]);
        let records = compute_variation(&t, &sel);
        assert_eq!(records[0].concept_id, "42");
    }

    #[test]
    fn rerun_is_identical() {
        let (t, sel) = table(vec![
            vec![text("c1"), text("a"), text("b"), text("")],
            vec![text("c2"), text(""), text("nan"), text("")],
        ]);
        assert_eq!(compute_variation(&t, &sel), compute_variation(&t, &sel));
    }

    #[test]
    fn ranking_excludes_undefined_and_is_stable() {
        let (t, sel) = table(vec![
            vec![text("uniform"), text("a"), text("a")],
            vec![text("empty"), text(""), text("")],
            vec![text("varied"), text("a"), text("b")],
            vec![text("also_uniform"), text("b"), text("b")],
        ]);
        let records = compute_variation(&t, &sel);
        let ranked = rank_by_variation(&records, 10);

        let ids: Vec<&str> = ranked.iter().map(|r| r.concept_id.as_str()).collect();
        // "empty" is dropped; the two 0.5-index rows keep their input order
        assert_eq!(ids, vec!["varied", "uniform", "also_uniform"]);
    }

    #[test]
    fn ranking_truncates_to_top_n() {
        let (t, sel) = table(vec![
            vec![text("c1"), text("a"), text("b")],
            vec![text("c2"), text("c"), text("d")],
            vec![text("c3"), text("e"), text("f")],
        ]);
        let records = compute_variation(&t, &sel);
        assert_eq!(rank_by_variation(&records, 2).len(), 2);
    }
}
