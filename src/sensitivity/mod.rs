//! Sensitivity sweeps
//!
//! Evaluates the option price over a range of one input while the others stay
//! fixed, producing the curve a front end charts next to the current price.

pub mod sweep;
pub mod types;

pub use sweep::*;
pub use types::*;
