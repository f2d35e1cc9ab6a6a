// Colored terminal output for the variation chart and similarity heat map.
//
// This module handles all terminal-specific formatting: colors, bars,
// labeled grids. The main.rs display code delegates here.

use colored::{ColoredString, Colorize};

use crate::similarity::SimilarityMatrix;
use crate::variation::{rank_by_variation, VariationRecord};

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 24;

/// Display the top-N rows by variation index as a horizontal bar chart.
///
/// Rows with an undefined index carry no signal and are excluded from the
/// ranking entirely, not shown as zero-length bars.
pub fn display_variation_chart(records: &[VariationRecord], top_n: usize) {
    let ranked = rank_by_variation(records, top_n);

    if ranked.is_empty() {
        println!("No rows with a defined variation index — nothing to chart.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} rows by variation index ===", ranked.len()).bold()
    );
    println!();

    for record in ranked {
        // rank_by_variation only returns defined rows
        let index = record.variation_index.unwrap_or(0.0);
        let filled = (index * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(filled.min(BAR_WIDTH));

        let label = super::truncate_chars(&record.concept_id, LABEL_WIDTH);
        println!(
            "  {:<width$} {} {:.3}  ({}/{} forms)",
            label,
            colorize_bar(&bar, index),
            index,
            record.distinct_forms,
            record.total_tokens,
            width = LABEL_WIDTH + 3,
        );
    }
    println!();
}

/// Display the similarity matrix as a labeled heat map grid.
///
/// Each cell is a two-character block colored by value. Undefined cells
/// (no overlapping data for the pair) render as a dimmed "··" marker —
/// deliberately not the zero-similarity color.
pub fn display_similarity_heatmap(matrix: &SimilarityMatrix) {
    if matrix.is_empty() {
        return;
    }

    println!("\n{}", "=== Source similarity matrix ===".bold());
    println!();

    // Short column keys: S1, S2, ... with a legend underneath
    print!("  {:<6}", "");
    for j in 0..matrix.len() {
        print!(" {:>4}", format!("S{}", j + 1).dimmed());
    }
    println!();

    for i in 0..matrix.len() {
        print!("  {:<6}", format!("S{}", i + 1));
        for j in 0..matrix.len() {
            match matrix.get(i, j) {
                Some(v) => print!("  {}", colorize_cell(v)),
                None => print!("  {}", "··".dimmed()),
            }
        }
        let label = super::truncate_chars(&matrix.labels()[i], 40);
        println!("   {}", label.dimmed());
    }

    println!();
    println!(
        "  {}  {}  {}  {}   {} no overlapping data",
        "██ ≥0.75".green(),
        "██ ≥0.50".yellow(),
        "██ ≥0.25".truecolor(255, 140, 0),
        "██ <0.25".red(),
        "··".dimmed(),
    );
    println!();

    // Numeric view for the exact values behind the colors
    for i in 0..matrix.len() {
        for j in (i + 1)..matrix.len() {
            println!(
                "  {} ~ {}: {}",
                matrix.labels()[i],
                matrix.labels()[j],
                super::format_stat(matrix.get(i, j)),
            );
        }
    }
    println!();
}

/// Color a variation bar by how close the row is to maximal variation.
fn colorize_bar(bar: &str, index: f64) -> ColoredString {
    if index >= 0.99 {
        bar.red()
    } else if index >= 0.5 {
        bar.yellow()
    } else {
        bar.green()
    }
}

/// Color one heat-map cell by similarity value.
fn colorize_cell(value: f64) -> ColoredString {
    let block = "██";
    if value >= 0.75 {
        block.green()
    } else if value >= 0.5 {
        block.yellow()
    } else if value >= 0.25 {
        block.truecolor(255, 140, 0)
    } else {
        block.red()
    }
}
