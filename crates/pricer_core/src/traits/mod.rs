//! Core traits for priceable instruments.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait)
//! - Price calculation (`Priceable` trait)

/// Generic floating-point trait for numeric computations.
///
/// Re-exported so that downstream crates can stay generic over `f64` and
/// `f32` without naming `num_traits` directly.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn simple_discount<T: Float>(rate: T, step: T) -> T {
///     T::one() / (T::one() + step * rate)
/// }
///
/// let df: f64 = simple_discount(0.05, 0.25);
/// assert!((df - 0.987654).abs() < 1e-6);
/// ```
pub use num_traits::Float;

pub mod priceable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_trait_with_f64() {
        fn generic_sqrt<T: Float>(x: T) -> T {
            x.sqrt()
        }

        assert_eq!(generic_sqrt(4.0_f64), 2.0);
    }

    #[test]
    fn test_float_trait_powi() {
        // Lattice nodes are built from integer powers of u and v
        fn node<T: Float>(s0: T, u: T, v: T, ups: i32, downs: i32) -> T {
            s0 * u.powi(ups) * v.powi(downs)
        }

        let result = node(100.0_f64, 1.1, 0.9, 2, 1);
        assert!((result - 108.9).abs() < 1e-10);
    }
}
