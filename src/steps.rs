//! Fixed-shape, human-readable walkthroughs of an operation.
//!
//! The narrative is always derived from the raw input and the string-rule
//! fallback, even when the parser path or the numeric path produced the
//! headline answer, so the steps can disagree with the displayed result for
//! inputs only the parser path resolves.

use crate::calculus::{symbolic_derivative, symbolic_integral};
use crate::engine::Operation;

/// Exactly four ordered lines describing `operation` applied to `expr`.
pub fn explanation_steps(operation: Operation, expr: &str, var: &str) -> Vec<String> {
    match operation {
        Operation::Derivative => vec![
            format!("Given function: f({var}) = {expr}"),
            format!("Find: f'({var}) = d/d{var}[{expr}]"),
            "Apply differentiation rules...".to_string(),
            format!("Result: f'({var}) = {}", symbolic_derivative(expr, var)),
        ],
        Operation::Integral => vec![
            format!("Given function: f({var}) = {expr}"),
            format!("Find: ∫f({var})d{var} = ∫{expr}d{var}"),
            "Apply integration rules...".to_string(),
            format!(
                "Result: ∫{expr}d{var} = {} + C",
                symbolic_integral(expr, var)
            ),
        ],
    }
}

/// A one-paragraph description of what the operation means.
pub fn operation_info(operation: Operation) -> &'static str {
    match operation {
        Operation::Derivative => {
            "The derivative represents the rate of change of the function with \
             respect to the variable. Geometrically, it gives the slope of the \
             tangent line to the curve at any point."
        }
        Operation::Integral => {
            "The integral represents the area under the curve. For indefinite \
             integrals, we add a constant of integration (+C). For definite \
             integrals, we get a specific numerical value."
        }
    }
}
