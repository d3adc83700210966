//! Calculus calculator engine: notation normalization, table-driven symbolic
//! differentiation and integration with rule fallbacks, and numeric definite
//! integration by composite Simpson's rule.

pub mod calculus;
pub mod engine;
pub mod error;
pub mod eval;
pub mod expr;
pub mod format;
pub mod history;
pub mod normalize;
pub mod parser;
pub mod rules;
pub mod simplify;
pub mod steps;

pub use calculus::{
    definite_integral, differentiate, symbolic_derivative, symbolic_integral,
};
pub use engine::{
    CalculationResult, DerivationPath, Engine, EngineOptions, IntegrationBounds, Operation,
};
pub use error::{CalcError, Result};
pub use eval::evaluate;
pub use expr::{add, div, mul, neg, one, pow, sub, zero, Expr, Rational};
pub use format::pretty;
pub use history::{History, HistoryEntry};
pub use normalize::normalize;
pub use parser::parse_expr;
pub use simplify::{simplify, simplify_fully};
pub use steps::{explanation_steps, operation_info};
