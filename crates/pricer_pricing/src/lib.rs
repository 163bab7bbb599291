//! # Pricer Pricing (Layer 3: Numerical Engines)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing hosts the numerical engines of the workspace:
//! - [`lattice`]: Binomial lattice option pricing (European/American, call/put)
//! - [`brownian`]: Discrete-time Brownian motion path sampler
//! - [`rng`]: Seeded random number generation shared by the samplers
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `PricingError`, `Priceable`
//! - Layer 2 (pricer_models): `VanillaOption`, `PayoffType`, `ExerciseStyle`
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::lattice::binomial_model;
//!
//! // stock, volatility, rate, strike, is_call, expiration, is_european, steps
//! let value = binomial_model(100.0, 0.2, 0.05, 100.0, true, 1.0, true, 4).unwrap();
//! assert!((value - 10.286054801944).abs() < 1e-9);
//! ```
//!
//! ## Concurrency
//!
//! Every pricing call allocates and owns its lattices; nothing is shared
//! between calls, so independent valuations can run on any thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod brownian;
pub mod lattice;
pub mod rng;

pub use brownian::{sample_paths, BrownianPath, Increments};
pub use lattice::{
    binomial_model, price_strip, BinomialModel, BinomialPricer, LatticeError, LatticeParams,
    LatticeValuation, MarketInputs, StripPoint, TriangularLattice,
};
pub use rng::PricerRng;
