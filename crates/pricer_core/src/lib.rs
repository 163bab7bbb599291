//! # pricer_core: Foundation Layer
//!
//! ## Layer 1 Role
//!
//! pricer_core is the bottom layer of the workspace and provides:
//! - Error types shared across the pricing crates (`types::error`)
//! - The `Priceable` trait and the `Float` re-export (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::traits::priceable::Priceable;
//! use pricer_core::types::PricingError;
//!
//! struct Forward {
//!     spot: f64,
//!     strike: f64,
//! }
//!
//! impl Priceable<f64> for Forward {
//!     fn price(&self) -> Result<f64, PricingError> {
//!         Ok(self.spot - self.strike)
//!     }
//! }
//!
//! let fwd = Forward { spot: 105.0, strike: 100.0 };
//! assert_eq!(fwd.price().unwrap(), 5.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
