//! Traits for priceable instruments.
//!
//! This module defines the `Priceable` abstraction implemented by the
//! pricing layer for a fully specified contract-plus-model bundle.

use num_traits::Float;

use crate::types::PricingError;

/// Trait for entities that can be priced.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Design Philosophy
///
/// Implementors carry everything needed to produce a present value
/// (market inputs, contract terms, numerical settings), so `price` takes
/// no arguments. Prefer static dispatch over `Box<dyn Priceable>`.
///
/// ```
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_core::types::PricingError;
/// use num_traits::Float;
///
/// enum Payout<T: Float> {
///     Fixed(T),
///     Forward { spot: T, strike: T },
/// }
///
/// impl<T: Float> Priceable<T> for Payout<T> {
///     fn price(&self) -> Result<T, PricingError> {
///         match self {
///             Payout::Fixed(v) => Ok(*v),
///             Payout::Forward { spot, strike } => Ok(*spot - *strike),
///         }
///     }
/// }
///
/// assert_eq!(Payout::Fixed(3.0_f64).price().unwrap(), 3.0);
/// ```
pub trait Priceable<T: Float> {
    /// Calculate the price of the instrument.
    ///
    /// # Returns
    /// The present value, or a `PricingError` if the inputs are invalid.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    fn price(&self) -> Result<T, PricingError>;
}
