//! Binomial lattice option pricing.
//!
//! A valuation runs in three stages:
//!
//! ```text
//! LatticeParams::derive     (h, u, v, p, df from σ, r, T, N)
//!         │
//! build_price_lattice       (S(i, j) = S₀ · u^(i−j) · v^j)
//!         │
//! backward_induction        (V(i, j) from expiry back to the root)
//!         │
//!         ▼
//!     V(0, 0)
//! ```
//!
//! [`binomial_model`] is the flat-argument entry point. [`BinomialPricer`]
//! works on the typed instruments of `pricer_models` and returns the full
//! [`LatticeValuation`]; [`price_strip`] fans a contract out across step
//! counts in parallel.
//!
//! Lattices are stored in [`TriangularLattice`], a packed lower triangle
//! where node (i, j) is time step i after j down moves.
//!
//! # Exercise
//!
//! American nodes take max(continuation, sign·(S − K)). European nodes keep
//! the discounted continuation only.

mod error;
mod induction;
mod params;
mod pricer;
mod strip;
mod tree;

pub use error::LatticeError;
pub use induction::backward_induction;
pub use params::{LatticeParams, MAX_STEPS};
pub use pricer::{binomial_model, BinomialModel, BinomialPricer, LatticeValuation, MarketInputs};
pub use strip::{price_strip, StripPoint};
pub use tree::{build_price_lattice, TriangularLattice};
