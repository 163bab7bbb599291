//! Error types for the binomial lattice engine.

use pricer_core::types::PricingError;
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

use super::params::MAX_STEPS;

/// Lattice pricing errors.
///
/// The parameter formulas divide by the volatility and by the step count,
/// so both are checked before any lattice is built.
///
/// # Variants
/// - `InvalidVolatility`: σ is zero, negative, or non-finite
/// - `InvalidStepCount`: N is zero or above [`MAX_STEPS`]
/// - `InvalidExpiry`: T is non-positive or non-finite
/// - `InvalidRate`: r is non-finite
/// - `InvalidSpot`: S₀ is non-positive or non-finite
/// - `InvalidGrowth`: the per-step growth 1 + h·r is not positive
/// - `NonFiniteValue`: backward induction produced an infinite or NaN root
/// - `Instrument`: the contract terms failed validation
///
/// # Examples
/// ```
/// use pricer_pricing::lattice::LatticeError;
///
/// let err = LatticeError::InvalidStepCount(0);
/// assert!(err.to_string().contains("step count 0"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Volatility must be strictly positive and finite.
    #[error("Invalid volatility: σ = {volatility} (must be positive and finite)")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Step count outside [1, MAX_STEPS].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// Expiry must be strictly positive and finite.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The rejected expiry
        expiry: f64,
    },

    /// Interest rate must be finite.
    #[error("Invalid interest rate: r = {rate}")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Per-step growth 1 + h·r must be strictly positive.
    #[error("Invalid per-step growth: 1 + h·r must be positive (h = {step_length}, r = {rate})")]
    InvalidGrowth {
        /// Step length h
        step_length: f64,
        /// The rejected rate
        rate: f64,
    },

    /// Root value overflowed or became NaN.
    #[error("Non-finite option value at the root: {value}")]
    NonFiniteValue {
        /// The root value
        value: f64,
    },

    /// Spot must be strictly positive and finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot
        spot: f64,
    },

    /// Contract terms failed validation.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::Instrument(inner) => inner.into(),
            other @ LatticeError::NonFiniteValue { .. } => {
                PricingError::NumericalInstability(other.to_string())
            }
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = LatticeError::InvalidVolatility { volatility: 0.0 };
        assert_eq!(
            err.to_string(),
            "Invalid volatility: σ = 0 (must be positive and finite)"
        );
    }

    #[test]
    fn test_invalid_step_count_display() {
        let err = LatticeError::InvalidStepCount(0);
        assert_eq!(
            err.to_string(),
            format!("Invalid step count 0: must be in range [1, {}]", MAX_STEPS)
        );
    }

    #[test]
    fn test_instrument_error_is_transparent() {
        let err: LatticeError = InstrumentError::InvalidStrike { strike: -1.0 }.into();
        assert_eq!(err.to_string(), "Invalid strike: K = -1");
    }

    #[test]
    fn test_non_finite_value_is_numerical_instability() {
        let pricing_err: PricingError = LatticeError::NonFiniteValue { value: f64::NAN }.into();
        match pricing_err {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("Non-finite")),
            other => panic!("Expected NumericalInstability variant, got {:?}", other),
        }
    }

    #[test]
    fn test_to_pricing_error() {
        let pricing_err: PricingError = LatticeError::InvalidSpot { spot: -5.0 }.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("spot")),
            _ => panic!("Expected InvalidInput variant"),
        }

        let pricing_err: PricingError =
            LatticeError::Instrument(InstrumentError::InvalidExpiry { expiry: 0.0 }).into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("expiry")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
