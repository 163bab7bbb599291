//! Parallel valuation of one contract across many step counts.

use num_traits::Float;
use pricer_models::instruments::VanillaOption;
use rayon::prelude::*;

use super::error::LatticeError;
use super::pricer::{BinomialPricer, MarketInputs};

/// Present value at one lattice resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripPoint<T> {
    /// Number of time steps
    pub n_steps: usize,
    /// Present value at that resolution
    pub price: T,
}

/// Prices `option` once per entry of `step_counts` on the rayon pool.
///
/// Every valuation allocates its own lattices. Results come back in the
/// order of `step_counts`; any failure aborts the strip.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{ExerciseStyle, InstrumentParams, PayoffType, VanillaOption};
/// use pricer_pricing::lattice::{price_strip, MarketInputs};
///
/// let market = MarketInputs::new(100.0_f64, 0.05, 0.2);
/// let call = VanillaOption::new(
///     InstrumentParams::unit(100.0, 1.0).unwrap(),
///     PayoffType::Call,
///     ExerciseStyle::European,
/// );
///
/// let strip = price_strip(&market, &call, &[1, 4, 50, 200]).unwrap();
/// assert_eq!(strip.len(), 4);
/// assert_eq!(strip[1].n_steps, 4);
/// assert!((strip[1].price - 10.28605480194417).abs() < 1e-9);
/// ```
pub fn price_strip<T>(
    market: &MarketInputs<T>,
    option: &VanillaOption<T>,
    step_counts: &[usize],
) -> Result<Vec<StripPoint<T>>, LatticeError>
where
    T: Float + Send + Sync,
{
    step_counts
        .par_iter()
        .map(|&n_steps| {
            BinomialPricer::new(n_steps)
                .present_value(market, option)
                .map(|price| StripPoint { n_steps, price })
        })
        .collect()
}
