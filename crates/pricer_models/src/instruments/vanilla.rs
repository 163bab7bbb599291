//! Vanilla option definitions.

use num_traits::Float;

use super::exercise::ExerciseStyle;
use super::params::InstrumentParams;
use super::payoff::PayoffType;

/// Vanilla option instrument.
///
/// Combines instrument parameters, payoff type, and exercise style
/// to represent a complete vanilla option contract.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{
///     VanillaOption, InstrumentParams, PayoffType, ExerciseStyle,
/// };
///
/// let params = InstrumentParams::new(100.0_f64, 1.0, 1_000.0).unwrap();
/// let option = VanillaOption::new(params, PayoffType::Call, ExerciseStyle::European);
///
/// // notional * (S - K)
/// assert_eq!(option.payoff(110.0), 10_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption<T: Float> {
    params: InstrumentParams<T>,
    payoff_type: PayoffType,
    exercise_style: ExerciseStyle,
}

impl<T: Float> VanillaOption<T> {
    /// Creates a new vanilla option.
    pub fn new(
        params: InstrumentParams<T>,
        payoff_type: PayoffType,
        exercise_style: ExerciseStyle,
    ) -> Self {
        Self {
            params,
            payoff_type,
            exercise_style,
        }
    }

    /// Payoff at expiry for a given spot, scaled by notional.
    #[inline]
    pub fn payoff(&self, spot: T) -> T {
        self.params.notional() * self.payoff_type.evaluate(spot, self.params.strike())
    }

    /// Returns a reference to the instrument parameters.
    #[inline]
    pub fn params(&self) -> &InstrumentParams<T> {
        &self.params
    }

    /// Returns the payoff type.
    #[inline]
    pub fn payoff_type(&self) -> PayoffType {
        self.payoff_type
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        self.exercise_style
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.params.strike()
    }

    /// Returns the time to expiry.
    #[inline]
    pub fn expiry(&self) -> T {
        self.params.expiry()
    }

    /// Returns the notional amount.
    #[inline]
    pub fn notional(&self) -> T {
        self.params.notional()
    }

    /// Same contract with a different exercise style.
    pub fn with_exercise_style(mut self, exercise_style: ExerciseStyle) -> Self {
        self.exercise_style = exercise_style;
        self
    }

    /// Same contract with a different payoff type.
    pub fn with_payoff_type(mut self, payoff_type: PayoffType) -> Self {
        self.payoff_type = payoff_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_call() -> VanillaOption<f64> {
        let params = InstrumentParams::new(100.0, 1.0, 1.0).unwrap();
        VanillaOption::new(params, PayoffType::Call, ExerciseStyle::European)
    }

    #[test]
    fn test_accessors() {
        let option = atm_call();
        assert_eq!(option.strike(), 100.0);
        assert_eq!(option.expiry(), 1.0);
        assert_eq!(option.notional(), 1.0);
        assert_eq!(option.payoff_type(), PayoffType::Call);
        assert_eq!(option.exercise_style(), ExerciseStyle::European);
    }

    #[test]
    fn test_payoff_scaled_by_notional() {
        let params = InstrumentParams::new(100.0, 1.0, 50.0).unwrap();
        let put = VanillaOption::new(params, PayoffType::Put, ExerciseStyle::American);
        assert_eq!(put.payoff(90.0), 500.0);
        assert_eq!(put.payoff(110.0), 0.0);
    }

    #[test]
    fn test_with_builders() {
        let option = atm_call()
            .with_exercise_style(ExerciseStyle::American)
            .with_payoff_type(PayoffType::Put);
        assert_eq!(option.exercise_style(), ExerciseStyle::American);
        assert_eq!(option.payoff_type(), PayoffType::Put);
        assert_eq!(option.strike(), 100.0);
    }
}
