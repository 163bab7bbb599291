//! Paths command implementation
//!
//! Samples Brownian motion paths and either plots them in the terminal or
//! prints them.

use serde::Serialize;
use tracing::info;

use pricer_pricing::brownian::{sample_paths, BrownianPath, Increments};
use pricer_pricing::rng::PricerRng;

use super::{print_table, OutputFormat};
use crate::{plot, Result};

#[derive(Debug, Serialize)]
struct PathsReport<'a> {
    seed: u64,
    increments: Increments,
    paths: &'a [BrownianPath],
}

#[derive(Debug, Serialize, PartialEq)]
struct PointRow {
    step_count: usize,
    index: usize,
    time: f64,
    value: f64,
}

fn point_rows(paths: &[BrownianPath]) -> Vec<PointRow> {
    paths
        .iter()
        .flat_map(|path| {
            path.points()
                .into_iter()
                .enumerate()
                .map(move |(index, (time, value))| PointRow {
                    step_count: path.step_count(),
                    index,
                    time,
                    value,
                })
        })
        .collect()
}

/// Run the paths command
pub fn run(
    step_counts: &[usize],
    seed: Option<u64>,
    gaussian: bool,
    no_plot: bool,
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let increments = if gaussian {
        Increments::Gaussian
    } else {
        Increments::Rademacher
    };
    let mut rng = match seed {
        Some(seed) => PricerRng::from_seed(seed),
        None => PricerRng::from_entropy(),
    };

    info!("Sampling Brownian paths...");
    info!("  Point counts: {:?}", step_counts);
    info!("  Increments: {}", increments.name());
    info!("  Seed: {}", rng.seed());

    let paths = sample_paths(step_counts, &mut rng, increments);

    if !no_plot {
        plot::show_paths(&paths)?;
        info!("Plot closed");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let report = PathsReport {
                seed: rng.seed(),
                increments,
                paths: &paths,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for row in point_rows(&paths) {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = paths
                .iter()
                .map(|path| {
                    let (low, high) = path.value_range().unwrap_or((0.0, 0.0));
                    let last = path.values().last().copied().unwrap_or(0.0);
                    vec![
                        path.step_count().to_string(),
                        format!("{:.4}", last),
                        format!("{:.4}", low),
                        format!("{:.4}", high),
                    ]
                })
                .collect();
            print_table(&["Points", "Final", "Min", "Max"], &rows);
        }
    }

    Ok(())
}
