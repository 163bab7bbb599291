//! # Pricer Models (L2: Business Logic)
//!
//! Option contract definitions and closed-form reference models.
//!
//! This crate provides:
//! - Instrument definitions (vanilla call/put, European/American exercise)
//! - Intrinsic payoff evaluation
//! - Black-Scholes closed-form prices for validating numerical engines
//!
//! ## Design Principles
//!
//! - **Enum-based payoff and exercise** for static dispatch
//! - **Generic over `T: Float`** so the same contract drives `f64` and `f32` engines
//! - **Validated constructors** returning typed errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
