//! Calculus routines (differentiation and integration).

pub mod definite;
pub mod differentiate;
pub mod fallback;

pub use definite::definite_integral;
pub use differentiate::differentiate;
pub use fallback::{symbolic_derivative, symbolic_integral};
