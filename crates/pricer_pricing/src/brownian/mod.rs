//! Discrete-time Brownian motion sampler.
//!
//! A path with `n` points lives on an evenly spaced grid over [0, 1]. It
//! starts at zero and moves by ε·√(1/n) between consecutive points, where ε
//! is a ±1 coin flip ([`Increments::Rademacher`]) or a standard normal draw
//! ([`Increments::Gaussian`]).
//!
//! ```rust
//! use pricer_pricing::brownian::{sample_paths, Increments};
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(42);
//! let paths = sample_paths(&[10, 25, 1000], &mut rng, Increments::Rademacher);
//!
//! assert_eq!(paths.len(), 3);
//! assert_eq!(paths[2].len(), 1000);
//! assert_eq!(paths[0].values()[0], 0.0);
//! ```

mod path;
mod sampler;

pub use path::BrownianPath;
pub use sampler::{linspace, sample_path, sample_paths, Increments};
