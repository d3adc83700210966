//! Orchestration: dual-path derivative/integral entry points and the
//! per-invocation result model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculus::{definite_integral, differentiate, symbolic_derivative, symbolic_integral};
use crate::error::{CalcError, Result};
use crate::format::pretty;
use crate::normalize::normalize;
use crate::parser::parse_expr;
use crate::simplify::simplify_fully;
use crate::steps::explanation_steps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Derivative,
    Integral,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Derivative => write!(f, "derivative"),
            Operation::Integral => write!(f, "integral"),
        }
    }
}

/// Which of the two strategies produced the headline result: the structural
/// parser engine, or the string rule-table fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationPath {
    Parser,
    RuleTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationBounds {
    pub lower: String,
    pub upper: String,
}

impl IntegrationBounds {
    pub fn new(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        IntegrationBounds {
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    /// Bounds are all-or-nothing: a single (or blank) bound counts as absent
    /// and the integral stays symbolic.
    pub fn from_parts(lower: Option<&str>, upper: Option<&str>) -> Option<Self> {
        match (lower, upper) {
            (Some(l), Some(u)) if !l.trim().is_empty() && !u.trim().is_empty() => {
                Some(IntegrationBounds::new(l.trim(), u.trim()))
            }
            _ => None,
        }
    }
}

/// Immutable record of one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub operation: Operation,
    pub input: String,
    pub variable: String,
    pub result: String,
    pub numeric: bool,
    pub bounds: Option<IntegrationBounds>,
    pub path: DerivationPath,
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bounds {
            Some(b) => write!(f, "{} (from {} to {})", self.result, b.lower, b.upper),
            None => write!(f, "{}", self.result),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Simpson panel count; must be even.
    pub subdivisions: usize,
    /// Fixed-point digits for numeric results.
    pub precision: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            subdivisions: 1000,
            precision: 6,
        }
    }
}

#[derive(Debug, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new() -> Self {
        Engine::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Engine { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Check that the normalized input parses; the error carries the parser
    /// diagnostics verbatim.
    pub fn validate(&self, expr: &str) -> Result<()> {
        parse_expr(&normalize(expr)).map(|_| ())
    }

    /// Symbolic derivative of `expr` with respect to `var`.
    ///
    /// Tries the parser path first (normalize, parse, structural
    /// differentiation); on parse failure the rule-table fallback answers
    /// from the raw input, possibly with an unresolved `d/dv(...)` sentinel.
    pub fn derivative(&self, expr: &str, var: &str) -> Result<CalculationResult> {
        check_input(expr, var)?;
        let normalized = normalize(expr);
        let (result, path) = match parse_expr(&normalized) {
            Ok(parsed) => (
                pretty(&simplify_fully(differentiate(var, &parsed))),
                DerivationPath::Parser,
            ),
            Err(e) => {
                tracing::debug!(expr, var, error = %e, "parser path failed; using rule-table fallback");
                (symbolic_derivative(expr, var), DerivationPath::RuleTable)
            }
        };
        Ok(CalculationResult {
            operation: Operation::Derivative,
            input: expr.to_string(),
            variable: var.to_string(),
            result,
            numeric: false,
            bounds: None,
            path,
        })
    }

    /// Integral of `expr` with respect to `var`.
    ///
    /// With bounds: numeric definite integration by Simpson's rule. Without:
    /// the symbolic rule table with `+ C` appended here.
    pub fn integral(
        &self,
        expr: &str,
        var: &str,
        bounds: Option<IntegrationBounds>,
    ) -> Result<CalculationResult> {
        check_input(expr, var)?;
        match bounds {
            Some(b) => {
                let value = definite_integral(
                    expr,
                    var,
                    &b.lower,
                    &b.upper,
                    self.options.subdivisions,
                    self.options.precision,
                )?;
                Ok(CalculationResult {
                    operation: Operation::Integral,
                    input: expr.to_string(),
                    variable: var.to_string(),
                    result: value,
                    numeric: true,
                    bounds: Some(b),
                    path: DerivationPath::Parser,
                })
            }
            None => Ok(CalculationResult {
                operation: Operation::Integral,
                input: expr.to_string(),
                variable: var.to_string(),
                result: format!("{} + C", symbolic_integral(expr, var)),
                numeric: false,
                bounds: None,
                path: DerivationPath::RuleTable,
            }),
        }
    }

    /// Four-line walkthrough for a previously computed result. Always
    /// narrates the symbolic fallback, so it can diverge from the headline
    /// answer when the parser or numeric path produced it.
    pub fn explain(&self, result: &CalculationResult) -> Vec<String> {
        explanation_steps(result.operation, &result.input, &result.variable)
    }
}

fn check_input(expr: &str, var: &str) -> Result<()> {
    if expr.trim().is_empty() {
        return Err(CalcError::Parse("empty expression".to_string()));
    }
    if var.trim().is_empty() {
        return Err(CalcError::Parse("empty variable".to_string()));
    }
    Ok(())
}
