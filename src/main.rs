use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use lexivar::config::Config;
use lexivar::output::{export, json, terminal};
use lexivar::table::{self, parse_source_indices, ColumnSelection, Table};
use lexivar::{similarity, variation};

/// Lexivar: lexical variation and cross-source agreement analysis.
///
/// Takes a CSV where each row is a concept (or aligned position) and each
/// selected column is one source's observed form, and reports per-row
/// variation plus a pairwise source-similarity matrix.
#[derive(Parser)]
#[command(name = "lexivar", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the columns detected in a CSV file
    Columns {
        /// Path to the input CSV
        file: PathBuf,
    },

    /// Compute variation and similarity statistics for a CSV file
    Analyze {
        /// Path to the input CSV
        file: PathBuf,

        /// Id column name (default: the first column)
        #[arg(long)]
        id_col: Option<String>,

        /// Source columns: names ("SourceA,SourceB") or 1-based numbers
        /// over the non-id columns ("1,3,4"). Default: all non-id columns.
        #[arg(long)]
        sources: Option<String>,

        /// How many rows the variation chart shows
        #[arg(long)]
        top_n: Option<usize>,

        /// Where to write the result CSVs (default: next to the input file)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Skip writing variation_results.csv and similarity_matrix.csv
        #[arg(long)]
        no_export: bool,

        /// Skip the terminal chart and heat map
        #[arg(long)]
        no_chart: bool,

        /// Print the full result as JSON instead of charts
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lexivar=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Columns { file } => {
            let table = table::reader::load_csv(&file)?;
            let columns = table.columns();

            println!("\n{}", format!("=== Columns in {} ===", file.display()).bold());
            println!("\n  Id column (default): {}", columns[0].bold());
            println!("  Source columns:");
            for (n, name) in columns.iter().skip(1).enumerate() {
                println!("    {}. {}", n + 1, name);
            }
            println!("\n  Rows: {}", table.row_count());
        }

        Commands::Analyze {
            file,
            id_col,
            sources,
            top_n,
            out_dir,
            no_export,
            no_chart,
            json,
        } => {
            let config = Config::load()?;
            let table = table::reader::load_csv(&file)?;
            let selection = resolve_selection(&table, id_col.as_deref(), sources.as_deref())?;

            let names = selection.source_names(&table);
            info!(sources = names.len(), "Comparing sources: {}", names.join(", "));

            let spinner = (!json).then(|| {
                let pb = ProgressBar::new_spinner();
                pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}").unwrap());
                pb.set_message(format!(
                    "Computing statistics over {} rows × {} sources...",
                    table.row_count(),
                    names.len(),
                ));
                pb
            });

            let records = variation::compute_variation(&table, &selection);
            let matrix = similarity::compute_similarity(&table, &selection);

            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            if json {
                println!("{}", json::render_report(&records, &matrix)?);
            } else if !no_chart {
                terminal::display_variation_chart(&records, top_n.unwrap_or(config.top_n));
                terminal::display_similarity_heatmap(&matrix);
            }

            if !no_export {
                let out_dir = resolve_out_dir(&file, out_dir.or(config.out_dir))?;
                let var_path = out_dir.join("variation_results.csv");
                let sim_path = out_dir.join("similarity_matrix.csv");

                export::write_variation_csv(&records, &var_path)?;
                export::write_similarity_csv(&matrix, &sim_path)?;

                if !json {
                    println!("{}", "Results exported:".bold());
                    println!("  {}", var_path.display());
                    println!("  {}", sim_path.display());
                }
            }
        }
    }

    Ok(())
}

/// Turn the CLI's optional id/source flags into a validated selection.
///
/// --sources accepts either column names or a 1-based index list over the
/// non-id columns; a list that parses entirely as numbers is treated as
/// indices, anything else as names.
fn resolve_selection(
    table: &Table,
    id_col: Option<&str>,
    sources: Option<&str>,
) -> Result<ColumnSelection> {
    let id_name = match id_col {
        Some(name) => name.to_string(),
        None => table
            .columns()
            .first()
            .cloned()
            .context("table has no columns")?,
    };

    match sources {
        None => {
            let id_idx = table
                .column_index(&id_name)
                .ok_or_else(|| anyhow::anyhow!("id column {id_name:?} not found in table"))?;
            let names: Vec<String> = table
                .columns()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != id_idx)
                .map(|(_, name)| name.clone())
                .collect();
            ColumnSelection::new(table, &id_name, &names)
        }
        Some(list) => {
            let all_numeric = list
                .split(',')
                .all(|part| part.trim().parse::<usize>().is_ok());
            let names = if all_numeric {
                let id_idx = table
                    .column_index(&id_name)
                    .ok_or_else(|| anyhow::anyhow!("id column {id_name:?} not found in table"))?;
                parse_source_indices(table, id_idx, list)?
            } else {
                list.split(',').map(|s| s.trim().to_string()).collect()
            };
            ColumnSelection::new(table, &id_name, &names)
        }
    }
}

/// Pick the export directory: explicit flag/env wins, otherwise the input
/// file's parent directory.
fn resolve_out_dir(input: &Path, explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        if !dir.is_dir() {
            anyhow::bail!("output directory {} does not exist", dir.display());
        }
        return Ok(dir);
    }
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    if parent.as_os_str().is_empty() {
        Ok(PathBuf::from("."))
    } else {
        Ok(parent.to_path_buf())
    }
}
