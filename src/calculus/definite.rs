//! Definite integration by composite Simpson's rule.

use crate::error::{CalcError, Result};
use crate::eval::evaluate;
use crate::normalize::normalize;
use crate::parser::parse_expr;

/// Evaluate the definite integral of `expr` over `[lower, upper]` with a
/// composite Simpson sum of `subdivisions` panels, formatted fixed-point to
/// `precision` digits.
///
/// Approximation error is O(h^4) for integrands that are four times
/// continuously differentiable on the interval. There is no adaptive
/// refinement and no singularity detection: an integrand singular inside the
/// interval produces a meaningless value (a warning is logged when a sample
/// is non-finite). Any evaluation failure or NaN sample aborts with
/// `CalcError::Integration`; there is no partial result.
pub fn definite_integral(
    expr: &str,
    var: &str,
    lower: &str,
    upper: &str,
    subdivisions: usize,
    precision: usize,
) -> Result<String> {
    // Simpson's rule is only defined for an even panel count.
    if subdivisions == 0 || subdivisions % 2 != 0 {
        return Err(CalcError::Integration(format!(
            "subdivision count must be even and non-zero, got {subdivisions}"
        )));
    }

    let parsed = parse_expr(&normalize(expr))
        .map_err(|e| CalcError::Integration(format!("cannot evaluate integrand: {e}")))?;
    let a = parse_bound(lower)?;
    let b = parse_bound(upper)?;

    let n = subdivisions;
    let h = (b - a) / n as f64;
    let mut sum = 0.0;
    let mut warned = false;

    for i in 0..=n {
        let x = a + i as f64 * h;
        let fx = evaluate(&parsed, var, x)
            .map_err(|e| CalcError::Integration(e.to_string()))?;
        if fx.is_nan() {
            return Err(CalcError::Integration(format!(
                "integrand is not a number at {var} = {x}"
            )));
        }
        if fx.is_infinite() && !warned {
            tracing::warn!(%var, x, "non-finite sample in Simpson sum; result will not be meaningful");
            warned = true;
        }
        sum += if i == 0 || i == n {
            fx
        } else if i % 2 == 1 {
            4.0 * fx
        } else {
            2.0 * fx
        };
    }

    Ok(format!("{:.*}", precision, h / 3.0 * sum))
}

fn parse_bound(bound: &str) -> Result<f64> {
    bound
        .trim()
        .parse()
        .map_err(|_| CalcError::Integration(format!("invalid integration bound: {bound}")))
}
