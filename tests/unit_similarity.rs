// Unit tests for the similarity engine through the public API.
//
// Covers the eligible-row rule (both sides present), the undefined state
// for non-overlapping pairs, the axiomatic diagonal, and exact symmetry.

use lexivar::similarity::compute_similarity;
use lexivar::table::{ColumnSelection, RawValue, Table};

fn text(s: &str) -> RawValue {
    RawValue::Text(s.into())
}

/// Three sources: A and B overlap everywhere, C overlaps nobody.
fn disjoint_table() -> (Table, ColumnSelection) {
    let table = Table::new(
        vec!["id".into(), "A".into(), "B".into(), "C".into()],
        vec![
            vec![text("r1"), text("cat"), text("cat"), text("")],
            vec![text("r2"), text("dog"), text("cat"), text("")],
            vec![text("r3"), text("cat"), text("cat"), text("")],
        ],
    );
    let selection = ColumnSelection::default_for(&table).unwrap();
    (table, selection)
}

#[test]
fn agreement_fraction_over_eligible_rows() {
    let (table, sel) = disjoint_table();
    let m = compute_similarity(&table, &sel);

    // A vs B: 3 eligible rows, agree on r1 and r3
    assert_eq!(m.get(0, 1), Some(2.0 / 3.0));
}

#[test]
fn pair_with_no_overlap_is_undefined() {
    let (table, sel) = disjoint_table();
    let m = compute_similarity(&table, &sel);

    assert_eq!(m.get(0, 2), None);
    assert_eq!(m.get(1, 2), None);
}

#[test]
fn diagonal_is_always_one() {
    let (table, sel) = disjoint_table();
    let m = compute_similarity(&table, &sel);

    for i in 0..m.len() {
        assert_eq!(m.get(i, i), Some(1.0));
    }
    // Holds for C too, which has no data at all
    assert_eq!(m.get(2, 2), Some(1.0));
}

#[test]
fn matrix_is_exactly_symmetric_including_undefined_cells() {
    let (table, sel) = disjoint_table();
    let m = compute_similarity(&table, &sel);

    for i in 0..m.len() {
        for j in 0..m.len() {
            assert_eq!(m.get(i, j), m.get(j, i));
        }
    }
}

#[test]
fn values_stay_in_unit_interval() {
    let (table, sel) = disjoint_table();
    let m = compute_similarity(&table, &sel);

    for i in 0..m.len() {
        for j in 0..m.len() {
            if let Some(v) = m.get(i, j) {
                assert!((0.0..=1.0).contains(&v), "out of range at ({i},{j}): {v}");
            }
        }
    }
}

#[test]
fn missing_on_either_side_excludes_the_row() {
    let table = Table::new(
        vec!["id".into(), "A".into(), "B".into()],
        vec![
            vec![text("r1"), text("wolf"), text("wolf")],
            vec![text("r2"), text("nan"), text("wolf")],
            vec![text("r3"), text("wolf"), text("   ")],
            vec![text("r4"), text("fox"), text("wolf")],
        ],
    );
    let sel = ColumnSelection::default_for(&table).unwrap();
    let m = compute_similarity(&table, &sel);

    // Eligible: r1 and r4 only; they agree on r1
    assert_eq!(m.get(0, 1), Some(0.5));
}

#[test]
fn labels_match_selected_source_order() {
    let table = Table::new(
        vec!["id".into(), "A".into(), "B".into(), "C".into()],
        vec![vec![text("r1"), text("x"), text("y"), text("z")]],
    );
    let sel = ColumnSelection::new(&table, "id", &["C".into(), "A".into()]).unwrap();
    let m = compute_similarity(&table, &sel);

    assert_eq!(m.labels(), &["C".to_string(), "A".to_string()]);
    assert_eq!(m.len(), 2);
}
