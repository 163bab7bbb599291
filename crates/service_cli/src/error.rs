//! CLI error types

use pricer_models::analytical::AnalyticalError;
use pricer_pricing::lattice::LatticeError;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Lattice pricing error
    #[error("Pricing error: {0}")]
    Pricing(#[from] LatticeError),

    /// Closed-form reference error
    #[error("Analytical pricing error: {0}")]
    Analytical(#[from] AnalyticalError),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_error_conversion() {
        let err: CliError = LatticeError::InvalidStepCount(0).into();
        assert!(matches!(err, CliError::Pricing(_)));
        assert!(err.to_string().starts_with("Pricing error: Invalid step count 0"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("Unknown format: xml".to_string());
        assert_eq!(err.to_string(), "Invalid argument: Unknown format: xml");
    }
}
