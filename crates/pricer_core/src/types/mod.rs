//! Core shared types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! - [`PricingError`] from `error`

pub mod error;

pub use error::PricingError;
