//! Financial instrument definitions.
//!
//! # Instrument Types
//!
//! - [`VanillaOption`]: Call/Put options with European or American exercise
//! - [`InstrumentParams`]: Validated strike, expiry and notional
//! - [`PayoffType`]: Call/Put intrinsic payoff
//! - [`ExerciseStyle`]: European/American exercise rights
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{
//!     VanillaOption, InstrumentParams, PayoffType, ExerciseStyle,
//! };
//!
//! let params = InstrumentParams::new(100.0_f64, 1.0, 1.0).unwrap();
//! let put = VanillaOption::new(params, PayoffType::Put, ExerciseStyle::American);
//!
//! assert_eq!(put.payoff(90.0), 10.0);
//! assert!(put.exercise_style().allows_early_exercise());
//! ```

mod error;
mod exercise;
mod params;
mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use params::InstrumentParams;
pub use payoff::PayoffType;
pub use vanilla::VanillaOption;
