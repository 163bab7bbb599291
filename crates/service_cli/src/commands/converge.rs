//! Converge command implementation
//!
//! Prices one contract across several step counts and reports the gap to
//! the Black-Scholes closed form.

use serde::Serialize;
use tracing::{info, warn};

use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::ExerciseStyle;
use pricer_pricing::lattice::{price_strip, StripPoint};

use super::{print_table, OutputFormat};
use crate::{CliError, ContractArgs, Result};

#[derive(Debug, Serialize, PartialEq)]
struct ConvergenceRow {
    steps: usize,
    lattice: f64,
    black_scholes: f64,
    absolute_error: f64,
    relative_error: Option<f64>,
}

fn convergence_rows(strip: &[StripPoint<f64>], reference: f64) -> Vec<ConvergenceRow> {
    strip
        .iter()
        .map(|point| {
            let absolute_error = (point.price - reference).abs();
            ConvergenceRow {
                steps: point.n_steps,
                lattice: point.price,
                black_scholes: reference,
                absolute_error,
                // undefined against a zero closed-form price
                relative_error: (reference != 0.0).then(|| absolute_error / reference.abs()),
            }
        })
        .collect()
}

/// Run the converge command
pub fn run(contract: &ContractArgs, steps: &[usize], format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    if steps.is_empty() {
        return Err(CliError::InvalidArgument("At least one step count is required".to_string()));
    }

    let market = contract.market();
    let option = contract.option()?;

    info!("Starting convergence study...");
    info!("  Step counts: {:?}", steps);

    if option.exercise_style() == ExerciseStyle::American {
        warn!("Black-Scholes column is the European closed form; American prices include the early-exercise premium");
    }

    let strip = price_strip(&market, &option, steps)?;
    let reference = BlackScholes::new(market.spot, market.rate, market.volatility)?
        .price_option(&option.with_exercise_style(ExerciseStyle::European))?;
    let rows = convergence_rows(&strip, reference);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|row| {
                    vec![
                        row.steps.to_string(),
                        format!("{:.6}", row.lattice),
                        format!("{:.6}", row.black_scholes),
                        format!("{:.6e}", row.absolute_error),
                        row.relative_error
                            .map_or_else(|| "n/a".to_string(), |e| format!("{:.4}%", e * 100.0)),
                    ]
                })
                .collect();
            print_table(
                &["Steps", "Lattice", "Black-Scholes", "Abs. error", "Rel. error"],
                &cells,
            );
        }
    }

    info!("Convergence study complete");
    Ok(())
}
