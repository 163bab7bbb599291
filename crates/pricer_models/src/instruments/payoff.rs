//! Payoff type definitions.
//!
//! Call and put payoffs expressed through a sign convention so that the
//! lattice engine can evaluate both the terminal payoff and the
//! immediate-exercise value with a single expression.

use num_traits::Float;

/// Type of option payoff.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// let call = PayoffType::Call;
/// assert_eq!(call.evaluate(110.0_f64, 100.0), 10.0);
/// assert_eq!(PayoffType::Put.evaluate(110.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Maps the boolean flag used by the flat pricing entry point.
    #[inline]
    pub fn from_is_call(is_call: bool) -> Self {
        if is_call {
            PayoffType::Call
        } else {
            PayoffType::Put
        }
    }

    /// Direction of the payoff: +1 for a call, -1 for a put.
    #[inline]
    pub fn sign<T: Float>(&self) -> T {
        match self {
            PayoffType::Call => T::one(),
            PayoffType::Put => -T::one(),
        }
    }

    /// Signed exercise value sign·(S - K).
    ///
    /// May be negative; callers compare it against a continuation value
    /// which is itself non-negative.
    #[inline]
    pub fn exercise_value<T: Float>(&self, spot: T, strike: T) -> T {
        self.sign::<T>() * (spot - strike)
    }

    /// Intrinsic payoff max(sign·(S - K), 0).
    #[inline]
    pub fn evaluate<T: Float>(&self, spot: T, strike: T) -> T {
        self.exercise_value(spot, strike).max(T::zero())
    }

    /// Returns whether this payoff is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffType::Call)
    }

    /// Returns whether this payoff is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, PayoffType::Put)
    }

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            PayoffType::Call => "Call",
            PayoffType::Put => "Put",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff_in_the_money() {
        assert_eq!(PayoffType::Call.evaluate(110.0_f64, 100.0), 10.0);
    }

    #[test]
    fn test_call_payoff_out_of_the_money() {
        assert_eq!(PayoffType::Call.evaluate(90.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_put_payoff_in_the_money() {
        assert_eq!(PayoffType::Put.evaluate(90.0_f64, 100.0), 10.0);
    }

    #[test]
    fn test_put_payoff_out_of_the_money() {
        assert_eq!(PayoffType::Put.evaluate(110.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_exercise_value_can_be_negative() {
        assert_eq!(PayoffType::Call.exercise_value(90.0_f64, 100.0), -10.0);
        assert_eq!(PayoffType::Put.exercise_value(110.0_f64, 100.0), -10.0);
    }

    #[test]
    fn test_sign() {
        assert_eq!(PayoffType::Call.sign::<f64>(), 1.0);
        assert_eq!(PayoffType::Put.sign::<f64>(), -1.0);
    }

    #[test]
    fn test_from_is_call() {
        assert_eq!(PayoffType::from_is_call(true), PayoffType::Call);
        assert_eq!(PayoffType::from_is_call(false), PayoffType::Put);
        assert!(PayoffType::Call.is_call());
        assert!(PayoffType::Put.is_put());
    }

    #[test]
    fn test_f32_compatibility() {
        assert_eq!(PayoffType::Call.evaluate(105.0_f32, 100.0), 5.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn payoff_is_non_negative(spot in 0.01..1000.0_f64, strike in 0.01..1000.0_f64) {
                prop_assert!(PayoffType::Call.evaluate(spot, strike) >= 0.0);
                prop_assert!(PayoffType::Put.evaluate(spot, strike) >= 0.0);
            }

            #[test]
            fn call_minus_put_is_forward(spot in 0.01..1000.0_f64, strike in 0.01..1000.0_f64) {
                let diff = PayoffType::Call.evaluate(spot, strike) - PayoffType::Put.evaluate(spot, strike);
                prop_assert!((diff - (spot - strike)).abs() < 1e-9);
            }
        }
    }
}
