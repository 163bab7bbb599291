//! Binomial lattice pricer and flat entry point.

use num_traits::Float;
use pricer_core::traits::priceable::Priceable;
use pricer_core::types::PricingError;
use pricer_models::instruments::{ExerciseStyle, InstrumentParams, PayoffType, VanillaOption};
use tracing::debug;

use super::error::LatticeError;
use super::induction::backward_induction;
use super::params::LatticeParams;
use super::tree::{build_price_lattice, TriangularLattice};

/// Market state for a single-asset lattice valuation.
///
/// Volatility and rate are checked when the lattice parameters are
/// derived; the spot is checked by [`MarketInputs::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInputs<T: Float> {
    /// Current stock price S₀
    pub spot: T,
    /// Continuously quoted annual interest rate r
    pub rate: T,
    /// Annualised volatility σ
    pub volatility: T,
}

impl<T: Float> MarketInputs<T> {
    /// Creates market inputs without validation.
    pub fn new(spot: T, rate: T, volatility: T) -> Self {
        Self {
            spot,
            rate,
            volatility,
        }
    }

    /// Rejects a non-positive or non-finite spot.
    pub fn validate(&self) -> Result<(), LatticeError> {
        if !(self.spot > T::zero()) || !self.spot.is_finite() {
            return Err(LatticeError::InvalidSpot {
                spot: self.spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}

/// Result of a lattice valuation.
///
/// Carries the two lattices alongside the root value so callers can
/// inspect the tree node by node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeValuation<T: Float> {
    /// Root value scaled by the option notional
    pub present_value: T,
    /// Parameters the lattice was built from
    pub params: LatticeParams<T>,
    /// Stock prices per node
    pub price_lattice: TriangularLattice<T>,
    /// Unit-notional option values per node
    pub value_lattice: TriangularLattice<T>,
}

/// Binomial lattice pricer with a fixed step count.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{ExerciseStyle, InstrumentParams, PayoffType, VanillaOption};
/// use pricer_pricing::lattice::{BinomialPricer, MarketInputs};
///
/// let market = MarketInputs::new(100.0_f64, 0.05, 0.2);
/// let put = VanillaOption::new(
///     InstrumentParams::unit(100.0, 1.0).unwrap(),
///     PayoffType::Put,
///     ExerciseStyle::American,
/// );
///
/// let valuation = BinomialPricer::new(4).price(&market, &put).unwrap();
/// assert!((valuation.present_value - 6.152764370833255).abs() < 1e-9);
/// assert_eq!(valuation.value_lattice.row(4).len(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinomialPricer {
    n_steps: usize,
}

impl BinomialPricer {
    /// Pricer with `n_steps` time steps. The count is validated on pricing.
    pub fn new(n_steps: usize) -> Self {
        Self { n_steps }
    }

    /// Number of time steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Values `option` and returns both lattices.
    ///
    /// # Errors
    ///
    /// `InvalidSpot` for a bad spot, any error from
    /// [`LatticeParams::derive`], and `NonFiniteValue` when the root value
    /// overflows or turns NaN.
    pub fn price<T: Float>(
        &self,
        market: &MarketInputs<T>,
        option: &VanillaOption<T>,
    ) -> Result<LatticeValuation<T>, LatticeError> {
        market.validate()?;
        let params = LatticeParams::derive(market.volatility, market.rate, option.expiry(), self.n_steps)?;

        debug!(
            n_steps = self.n_steps,
            payoff = option.payoff_type().name(),
            exercise = option.exercise_style().name(),
            "building binomial lattice"
        );

        let price_lattice = build_price_lattice(self.n_steps, market.spot, params.up(), params.down());
        let value_lattice = backward_induction(
            &price_lattice,
            option.strike(),
            params.discount(),
            params.probability(),
            option.payoff_type(),
            option.exercise_style(),
        );

        let present_value = option.notional() * value_lattice.root();
        if !present_value.is_finite() {
            return Err(LatticeError::NonFiniteValue {
                value: present_value.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(LatticeValuation {
            present_value,
            params,
            price_lattice,
            value_lattice,
        })
    }

    /// Values `option` and keeps only the present value.
    pub fn present_value<T: Float>(
        &self,
        market: &MarketInputs<T>,
        option: &VanillaOption<T>,
    ) -> Result<T, LatticeError> {
        self.price(market, option).map(|valuation| valuation.present_value)
    }
}

/// Prices a unit-notional vanilla option on a binomial lattice.
///
/// # Arguments
///
/// * `stock` - Current stock price
/// * `volatility` - Annualised volatility (must be positive)
/// * `interest_rate` - Annual interest rate
/// * `strike` - Strike price
/// * `is_call` - Call when true, put otherwise
/// * `expiration` - Time to expiry in years
/// * `is_european` - European when true, American otherwise
/// * `step_count` - Number of lattice steps
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::lattice::binomial_model;
///
/// let call = binomial_model(100.0, 0.2, 0.05, 100.0, true, 1.0, true, 4).unwrap();
/// let put = binomial_model(100.0, 0.2, 0.05, 100.0, false, 1.0, true, 4).unwrap();
/// assert!((call - 10.28605480194417).abs() < 1e-9);
/// assert!((put - 5.438482323659438).abs() < 1e-9);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn binomial_model(
    stock: f64,
    volatility: f64,
    interest_rate: f64,
    strike: f64,
    is_call: bool,
    expiration: f64,
    is_european: bool,
    step_count: usize,
) -> Result<f64, LatticeError> {
    let option = VanillaOption::new(
        InstrumentParams::unit(strike, expiration)?,
        PayoffType::from_is_call(is_call),
        ExerciseStyle::from_is_european(is_european),
    );
    let market = MarketInputs::new(stock, interest_rate, volatility);
    BinomialPricer::new(step_count).present_value(&market, &option)
}

/// A vanilla option bound to its market and lattice resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinomialModel<T: Float> {
    /// Market state
    pub market: MarketInputs<T>,
    /// Contract
    pub option: VanillaOption<T>,
    /// Pricer resolution
    pub pricer: BinomialPricer,
}

impl<T: Float> BinomialModel<T> {
    /// Bundles a contract with its market and step count.
    pub fn new(market: MarketInputs<T>, option: VanillaOption<T>, n_steps: usize) -> Self {
        Self {
            market,
            option,
            pricer: BinomialPricer::new(n_steps),
        }
    }
}

impl<T: Float> Priceable<T> for BinomialModel<T> {
    fn price(&self) -> Result<T, PricingError> {
        Ok(self.pricer.present_value(&self.market, &self.option)?)
    }
}
