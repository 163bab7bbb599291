//! Derived lattice parameters.
//!
//! The model uses an arithmetic (first-order) parameterisation of the
//! up/down moves and simple per-step compounding:
//!
//! ```text
//! h  = T / N
//! u  = 1 + σ√h
//! v  = 1 - σ√h
//! p  = 0.5 + r√h / (2σ)
//! df = 1 / (1 + h·r)
//! ```
//!
//! With these choices p·u + (1-p)·v = 1 + h·r, so the discounted expected
//! stock price is a martingale on the lattice and European put-call parity
//! holds exactly.

use num_traits::Float;
use tracing::{debug, warn};

use super::error::LatticeError;

/// Maximum number of time steps allowed per lattice.
///
/// A lattice with N steps holds (N+1)(N+2)/2 nodes, and a pricing call
/// keeps two of them alive.
pub const MAX_STEPS: usize = 5_000;

/// Parameters derived once per pricing call from the market inputs.
///
/// Immutable after construction; use [`LatticeParams::derive`] for the
/// validated path or [`LatticeParams::derive_unchecked`] for the bare
/// formula.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::lattice::LatticeParams;
///
/// let params = LatticeParams::derive(0.2_f64, 0.05, 1.0, 4).unwrap();
/// assert_eq!(params.step_length(), 0.25);
/// assert!((params.up() - 1.1).abs() < 1e-15);
/// assert!((params.down() - 0.9).abs() < 1e-15);
/// assert!((params.probability() - 0.5625).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeParams<T: Float> {
    n_steps: usize,
    step_length: T,
    up: T,
    down: T,
    probability: T,
    discount: T,
}

impl<T: Float> LatticeParams<T> {
    /// Derives the lattice parameters with input validation.
    ///
    /// # Errors
    ///
    /// - `InvalidStepCount` if `n_steps` is 0 or above [`MAX_STEPS`]
    /// - `InvalidVolatility` if σ ≤ 0 or non-finite (the probability
    ///   formula divides by σ)
    /// - `InvalidExpiry` if T ≤ 0 or non-finite
    /// - `InvalidRate` if r is non-finite
    /// - `InvalidGrowth` if 1 + h·r ≤ 0 (the discount factor would be
    ///   infinite or negative)
    ///
    /// Parameters that are valid but not arbitrage-free (p outside [0, 1],
    /// or v ≤ 0) are returned with a warning; see
    /// [`is_arbitrage_free`](Self::is_arbitrage_free).
    pub fn derive(volatility: T, rate: T, expiry: T, n_steps: usize) -> Result<Self, LatticeError> {
        let zero = T::zero();

        if n_steps == 0 || n_steps > MAX_STEPS {
            return Err(LatticeError::InvalidStepCount(n_steps));
        }
        if !(volatility > zero) || !volatility.is_finite() {
            return Err(LatticeError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !(expiry > zero) || !expiry.is_finite() {
            return Err(LatticeError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !rate.is_finite() {
            return Err(LatticeError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }

        let params = Self::derive_unchecked(volatility, rate, expiry, n_steps);

        if !(T::one() + params.step_length * rate > zero) {
            return Err(LatticeError::InvalidGrowth {
                step_length: params.step_length.to_f64().unwrap_or(f64::NAN),
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }

        debug!(
            n_steps,
            step_length = params.step_length.to_f64(),
            up = params.up.to_f64(),
            down = params.down.to_f64(),
            probability = params.probability.to_f64(),
            discount = params.discount.to_f64(),
            "derived lattice parameters"
        );

        if !params.is_arbitrage_free() {
            warn!(
                probability = params.probability.to_f64(),
                down = params.down.to_f64(),
                "lattice parameters are not arbitrage-free; increase the step count"
            );
        }

        Ok(params)
    }

    /// Evaluates the parameter formulas with no validation.
    ///
    /// Zero volatility or a zero step count follow IEEE-754 semantics: the
    /// divisions produce infinities, which turn into NaN further down the
    /// backward induction.
    pub fn derive_unchecked(volatility: T, rate: T, expiry: T, n_steps: usize) -> Self {
        let one = T::one();
        let two = one + one;
        let half = one / two;

        let steps = T::from(n_steps).unwrap_or_else(T::infinity);
        let step_length = expiry / steps;
        let sqrt_h = step_length.sqrt();

        Self {
            n_steps,
            step_length,
            up: one + volatility * sqrt_h,
            down: one - volatility * sqrt_h,
            probability: half + rate * sqrt_h / (two * volatility),
            discount: one / (one + step_length * rate),
        }
    }

    /// Number of time steps N.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Step length h = T / N.
    #[inline]
    pub fn step_length(&self) -> T {
        self.step_length
    }

    /// Up factor u.
    #[inline]
    pub fn up(&self) -> T {
        self.up
    }

    /// Down factor v.
    #[inline]
    pub fn down(&self) -> T {
        self.down
    }

    /// Risk-neutral probability of an up move.
    #[inline]
    pub fn probability(&self) -> T {
        self.probability
    }

    /// Per-step discount factor.
    #[inline]
    pub fn discount(&self) -> T {
        self.discount
    }

    /// Discount factor over the whole lattice, df^N.
    #[inline]
    pub fn total_discount(&self) -> T {
        self.discount.powi(self.n_steps as i32)
    }

    /// True when 0 ≤ p ≤ 1 and v > 0.
    ///
    /// Fails for coarse lattices with σ√h ≥ 1 or |r|√h > σ.
    pub fn is_arbitrage_free(&self) -> bool {
        let zero = T::zero();
        let one = T::one();
        self.down > zero && self.probability >= zero && self.probability <= one
    }
}
