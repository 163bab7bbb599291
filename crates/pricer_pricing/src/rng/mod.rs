//! Seeded random number generation for the path samplers.
//!
//! [`PricerRng`] wraps `rand::rngs::StdRng` and remembers its seed so a
//! run can be reported and replayed. Draws are uniform on [0, 1), standard
//! normal via `rand_distr::StandardNormal`, or ±1 coin flips.
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let flip = rng.gen_sign();
//! assert!(flip == 1.0 || flip == -1.0);
//! ```

mod prng;

pub use prng::PricerRng;

#[cfg(test)]
mod tests;
