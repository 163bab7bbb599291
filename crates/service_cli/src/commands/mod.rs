//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod converge;
pub mod paths;
pub mod price;

use std::str::FromStr;

use pricer_models::instruments::{ExerciseStyle, InstrumentParams, PayoffType, VanillaOption};
use pricer_pricing::lattice::{LatticeError, MarketInputs};

use crate::{CliError, ContractArgs, Result};

/// Output format shared by the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawn table on stdout
    Table,
    /// Pretty-printed JSON
    Json,
    /// CSV with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

impl ContractArgs {
    /// Market state from the command-line inputs.
    pub fn market(&self) -> MarketInputs<f64> {
        MarketInputs::new(self.stock, self.rate, self.volatility)
    }

    /// Unit-notional contract from the command-line inputs.
    pub fn option(&self) -> Result<VanillaOption<f64>> {
        let params = InstrumentParams::unit(self.strike, self.expiry).map_err(LatticeError::from)?;
        Ok(VanillaOption::new(
            params,
            PayoffType::from_is_call(!self.put),
            ExerciseStyle::from_is_european(!self.american),
        ))
    }
}

/// Prints a box-drawn table with one column per header.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!(" {:<width$} ", cell, width = w))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = String::from("\n");
    out.push_str(&rule("┌", "┬", "┐"));
    out.push_str(&line(headers.to_vec()));
    out.push_str(&rule("├", "┼", "┤"));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}
