//! Analytical pricing formulas for European options.
//!
//! Closed-form Black-Scholes prices serve as the convergence target for the
//! binomial lattice: as the step count grows, the lattice European price
//! must approach these values.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
