//! Numeric evaluation of an expression at a single variable binding.

use crate::error::{CalcError, Result};
use crate::expr::Expr;
use num_traits::ToPrimitive;

/// Evaluate `expr` with `var` bound to `value`.
///
/// `pi`, `e` and `Infinity` are builtin identifiers; any other free
/// identifier is an error. Non-finite results are returned as-is and left to
/// the caller to judge.
pub fn evaluate(expr: &Expr, var: &str, value: f64) -> Result<f64> {
    match expr {
        Expr::Variable(name) if name == var => Ok(value),
        Expr::Variable(name) => match name.as_str() {
            "pi" => Ok(std::f64::consts::PI),
            "e" => Ok(std::f64::consts::E),
            "Infinity" => Ok(f64::INFINITY),
            other => Err(CalcError::Eval(format!("unknown identifier: {other}"))),
        },
        Expr::Constant(r) => r
            .to_f64()
            .ok_or_else(|| CalcError::Eval(format!("constant out of range: {r}"))),
        Expr::Add(a, b) => Ok(evaluate(a, var, value)? + evaluate(b, var, value)?),
        Expr::Sub(a, b) => Ok(evaluate(a, var, value)? - evaluate(b, var, value)?),
        Expr::Mul(a, b) => Ok(evaluate(a, var, value)? * evaluate(b, var, value)?),
        Expr::Div(a, b) => Ok(evaluate(a, var, value)? / evaluate(b, var, value)?),
        Expr::Pow(a, b) => Ok(evaluate(a, var, value)?.powf(evaluate(b, var, value)?)),
        Expr::Neg(a) => Ok(-evaluate(a, var, value)?),
        Expr::Sin(a) => Ok(evaluate(a, var, value)?.sin()),
        Expr::Cos(a) => Ok(evaluate(a, var, value)?.cos()),
        Expr::Tan(a) => Ok(evaluate(a, var, value)?.tan()),
        Expr::Exp(a) => Ok(evaluate(a, var, value)?.exp()),
        Expr::Log(a) => Ok(evaluate(a, var, value)?.ln()),
        Expr::Log10(a) => Ok(evaluate(a, var, value)?.log10()),
        Expr::Sqrt(a) => Ok(evaluate(a, var, value)?.sqrt()),
        Expr::Abs(a) => Ok(evaluate(a, var, value)?.abs()),
    }
}
