//! Common instrument parameters.
//!
//! This module provides shared parameter structures for
//! financial instruments with validation.

use num_traits::Float;

use super::error::InstrumentError;

/// Common parameters shared across instrument types.
///
/// Contains strike price, expiry time, and notional amount with
/// validation ensuring all values are positive and finite.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentParams;
///
/// let params = InstrumentParams::new(100.0_f64, 1.0, 1_000_000.0).unwrap();
/// assert_eq!(params.strike(), 100.0);
/// assert_eq!(params.expiry(), 1.0);
/// assert_eq!(params.notional(), 1_000_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentParams<T: Float> {
    strike: T,
    expiry: T,
    notional: T,
}

impl<T: Float> InstrumentParams<T> {
    /// Creates new instrument parameters with validation.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `notional` - Notional amount (must be positive)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::InstrumentParams;
    ///
    /// assert!(InstrumentParams::new(100.0_f64, 1.0, 1.0).is_ok());
    /// assert!(InstrumentParams::new(-100.0_f64, 1.0, 1.0).is_err());
    /// ```
    pub fn new(strike: T, expiry: T, notional: T) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if !(strike > zero) || !strike.is_finite() {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !(expiry > zero) || !expiry.is_finite() {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !(notional > zero) || !notional.is_finite() {
            return Err(InstrumentError::InvalidNotional {
                notional: notional.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            strike,
            expiry,
            notional,
        })
    }

    /// Unit-notional parameters, the convention of the flat entry point.
    pub fn unit(strike: T, expiry: T) -> Result<Self, InstrumentError> {
        Self::new(strike, expiry, T::one())
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the notional amount.
    #[inline]
    pub fn notional(&self) -> T {
        self.notional
    }
}
