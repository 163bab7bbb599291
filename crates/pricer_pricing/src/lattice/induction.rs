//! Backward induction over the price lattice.

use num_traits::Float;
use pricer_models::instruments::{ExerciseStyle, PayoffType};

use super::tree::TriangularLattice;

/// `max` that returns NaN when either side is NaN.
///
/// `Float::max` returns the non-NaN operand, which would silently turn a
/// NaN lattice into a zero price.
#[inline]
fn propagating_max<T: Float>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else {
        a.max(b)
    }
}

/// Fills the option value lattice from expiry back to the root.
///
/// Terminal nodes hold max(sign·(S − K), 0). Each earlier node holds the
/// discounted expectation of its two successors, node j being the up
/// successor and j + 1 the down successor:
///
/// ```text
/// continuation = df · (p · V(i+1, j) + (1 − p) · V(i+1, j+1))
/// ```
///
/// American exercise replaces the continuation with sign·(S(i, j) − K) when
/// that is larger. European exercise keeps the continuation.
///
/// The root value is `result.root()`.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{ExerciseStyle, PayoffType};
/// use pricer_pricing::lattice::{backward_induction, build_price_lattice};
///
/// let prices = build_price_lattice(1, 100.0_f64, 1.2, 0.8);
/// let values = backward_induction(
///     &prices,
///     100.0,
///     1.0 / 1.05,
///     0.625,
///     PayoffType::Call,
///     ExerciseStyle::European,
/// );
/// assert!((values.root() - 11.904761904761903).abs() < 1e-12);
/// ```
pub fn backward_induction<T: Float>(
    prices: &TriangularLattice<T>,
    strike: T,
    discount: T,
    probability: T,
    payoff: PayoffType,
    exercise: ExerciseStyle,
) -> TriangularLattice<T> {
    let n_steps = prices.n_steps();
    let zero = T::zero();
    let one = T::one();
    let down_probability = one - probability;

    let mut values = TriangularLattice::filled(n_steps, zero);

    for (value, &spot) in values.row_mut(n_steps).iter_mut().zip(prices.row(n_steps)) {
        *value = propagating_max(payoff.exercise_value(spot, strike), zero);
    }

    for i in (0..n_steps).rev() {
        let spots = prices.row(i);
        let (row, next) = values.row_and_successor(i);

        for (j, value) in row.iter_mut().enumerate() {
            let continuation = discount * (probability * next[j] + down_probability * next[j + 1]);
            *value = if exercise.allows_early_exercise() {
                propagating_max(continuation, payoff.exercise_value(spots[j], strike))
            } else {
                continuation
            };
        }
    }

    values
}
