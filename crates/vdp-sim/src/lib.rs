//! Van der Pol oscillator integration.
//!
//! Provides:
//! - the derivative function and its Jacobian action
//! - evenly spaced time grids
//! - `solve`, which drives diffsol's adaptive BDF solver over a grid

pub mod error;
pub mod grid;
pub mod model;
pub mod solve;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use grid::linspace;
pub use model::{jacobian_product, vanderpol};
pub use solve::{SolveOptions, solve, solve_with};
