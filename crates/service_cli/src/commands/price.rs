//! Price command implementation
//!
//! Prices a single vanilla option on a binomial lattice.

use serde::Serialize;
use tracing::info;

use pricer_models::instruments::{ExerciseStyle, PayoffType};
use pricer_pricing::lattice::{BinomialPricer, LatticeParams, LatticeValuation, TriangularLattice};

use super::{print_table, OutputFormat};
use crate::{ContractArgs, Result};

#[derive(Debug, Serialize)]
struct PriceReport {
    payoff: PayoffType,
    exercise: ExerciseStyle,
    stock: f64,
    volatility: f64,
    rate: f64,
    strike: f64,
    expiry: f64,
    steps: usize,
    present_value: f64,
    params: LatticeParams<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_lattice: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_lattice: Option<Vec<Vec<f64>>>,
}

#[derive(Debug, Serialize)]
struct PriceRow {
    payoff: PayoffType,
    exercise: ExerciseStyle,
    stock: f64,
    volatility: f64,
    rate: f64,
    strike: f64,
    expiry: f64,
    steps: usize,
    present_value: f64,
}

#[derive(Debug, Serialize)]
struct NodeRow {
    step: usize,
    node: usize,
    stock_price: f64,
    option_value: f64,
}

fn rows_of(lattice: &TriangularLattice<f64>) -> Vec<Vec<f64>> {
    lattice.rows().map(<[f64]>::to_vec).collect()
}

fn node_rows(valuation: &LatticeValuation<f64>) -> Vec<NodeRow> {
    valuation
        .price_lattice
        .rows()
        .zip(valuation.value_lattice.rows())
        .enumerate()
        .flat_map(|(step, (prices, values))| {
            prices
                .iter()
                .zip(values)
                .enumerate()
                .map(move |(node, (&stock_price, &option_value))| NodeRow {
                    step,
                    node,
                    stock_price,
                    option_value,
                })
        })
        .collect()
}

/// Run the price command
pub fn run(contract: &ContractArgs, steps: usize, format: &str, show_tree: bool) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let market = contract.market();
    let option = contract.option()?;

    info!("Starting pricing...");
    info!(
        "  {} {} on S={} K={} T={}",
        option.exercise_style().name(),
        option.payoff_type().name(),
        market.spot,
        option.strike(),
        option.expiry()
    );
    info!("  Lattice steps: {}", steps);

    let valuation = BinomialPricer::new(steps).price(&market, &option)?;

    info!("Present value: {}", valuation.present_value);

    match format {
        OutputFormat::Json => {
            let report = PriceReport {
                payoff: option.payoff_type(),
                exercise: option.exercise_style(),
                stock: contract.stock,
                volatility: contract.volatility,
                rate: contract.rate,
                strike: contract.strike,
                expiry: contract.expiry,
                steps,
                present_value: valuation.present_value,
                params: valuation.params,
                price_lattice: show_tree.then(|| rows_of(&valuation.price_lattice)),
                value_lattice: show_tree.then(|| rows_of(&valuation.value_lattice)),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            if show_tree {
                for row in node_rows(&valuation) {
                    writer.serialize(row)?;
                }
            } else {
                writer.serialize(PriceRow {
                    payoff: option.payoff_type(),
                    exercise: option.exercise_style(),
                    stock: contract.stock,
                    volatility: contract.volatility,
                    rate: contract.rate,
                    strike: contract.strike,
                    expiry: contract.expiry,
                    steps,
                    present_value: valuation.present_value,
                })?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            let params = &valuation.params;
            let rows = vec![
                vec![
                    "Option".to_string(),
                    format!("{} {}", option.exercise_style().name(), option.payoff_type().name()),
                ],
                vec!["Stock".to_string(), contract.stock.to_string()],
                vec!["Strike".to_string(), contract.strike.to_string()],
                vec!["Volatility".to_string(), contract.volatility.to_string()],
                vec!["Rate".to_string(), contract.rate.to_string()],
                vec!["Expiry".to_string(), contract.expiry.to_string()],
                vec!["Steps".to_string(), steps.to_string()],
                vec![
                    "Up / Down".to_string(),
                    format!("{:.6} / {:.6}", params.up(), params.down()),
                ],
                vec!["Probability".to_string(), format!("{:.6}", params.probability())],
                vec!["Discount".to_string(), format!("{:.6}", params.discount())],
                vec!["PV".to_string(), format!("{:.6}", valuation.present_value)],
            ];
            print_table(&["Field", "Value"], &rows);

            if show_tree {
                let rows: Vec<Vec<String>> = node_rows(&valuation)
                    .into_iter()
                    .map(|row| {
                        vec![
                            row.step.to_string(),
                            row.node.to_string(),
                            format!("{:.4}", row.stock_price),
                            format!("{:.4}", row.option_value),
                        ]
                    })
                    .collect();
                print_table(&["Step", "Node", "Stock", "Value"], &rows);
            }
        }
    }

    info!("Pricing complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn valuation() -> LatticeValuation<f64> {
        let contract = ContractArgs {
            stock: 100.0,
            volatility: 0.2,
            rate: 0.05,
            strike: 100.0,
            expiry: 1.0,
            put: false,
            american: false,
        };
        BinomialPricer::new(2)
            .price(&contract.market(), &contract.option().unwrap())
            .unwrap()
    }

    #[test]
    fn test_node_rows_cover_the_triangle() {
        let rows = node_rows(&valuation());
        assert_eq!(rows.len(), 6);
        assert_eq!((rows[0].step, rows[0].node), (0, 0));
        assert_eq!((rows[5].step, rows[5].node), (2, 2));
        assert_relative_eq!(rows[0].stock_price, 100.0);
    }

    #[test]
    fn test_rows_of_matches_lattice_shape() {
        let rows = rows_of(&valuation().value_lattice);
        let lengths: Vec<usize> = rows.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![1, 2, 3]);
    }
}
