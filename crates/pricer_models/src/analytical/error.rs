//! Error types for analytical pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidSpot`: Non-positive spot price
/// - `UnsupportedExerciseStyle`: Exercise style has no closed form
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive for Black-Scholes).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Unsupported exercise style.
    #[error("Unsupported exercise style: {style}")]
    UnsupportedExerciseStyle {
        /// Description of the unsupported exercise style
        style: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { .. } | AnalyticalError::InvalidSpot { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            AnalyticalError::UnsupportedExerciseStyle { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_unsupported_exercise_style_display() {
        let err = AnalyticalError::UnsupportedExerciseStyle {
            style: "American".to_string(),
        };
        assert_eq!(format!("{}", err), "Unsupported exercise style: American");
    }

    #[test]
    fn test_invalid_volatility_to_pricing_error() {
        let pricing_err: PricingError =
            AnalyticalError::InvalidVolatility { volatility: -0.1 }.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("volatility")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_unsupported_exercise_to_pricing_error() {
        let pricing_err: PricingError = AnalyticalError::UnsupportedExerciseStyle {
            style: "American".to_string(),
        }
        .into();
        match pricing_err {
            PricingError::UnsupportedInstrument(msg) => assert!(msg.contains("American")),
            _ => panic!("Expected UnsupportedInstrument variant"),
        }
    }
}
