//! String-level table-driven symbolic rules.
//!
//! This is the fallback path used when the expression parser cannot handle
//! the input. It works on the raw, un-normalized text: the tables are keyed
//! in user notation (`e^x`, `ln(x)`), which the normalizer would rewrite
//! away. Both entry points are total; when no rule applies they return an
//! unresolved sentinel (`d/dx(...)`, `∫(...)dx`) rather than an error, and
//! callers must treat that sentinel as "no closed form found".

use crate::rules::{substitute, DERIVATIVE_RULES, INTEGRAL_RULES};

/// Best-effort symbolic derivative of `expr` with respect to `var`.
pub fn symbolic_derivative(expr: &str, var: &str) -> String {
    for rule in DERIVATIVE_RULES {
        if expr == substitute(rule.pattern, var) {
            return substitute(rule.result, var);
        }
    }

    if let Some(power) = power_exponent(expr, var) {
        if power == 1 {
            return "1".to_string();
        }
        return format!("{}*{}^{}", power, var, power - 1);
    }

    if !expr.contains(var) {
        return "0".to_string();
    }

    format!("d/d{var}({expr})")
}

/// Best-effort symbolic antiderivative of `expr` with respect to `var`.
/// The constant of integration is the caller's concern.
pub fn symbolic_integral(expr: &str, var: &str) -> String {
    for rule in INTEGRAL_RULES {
        if expr == substitute(rule.pattern, var) {
            return substitute(rule.result, var);
        }
    }

    if let Some(power) = power_exponent(expr, var) {
        let raised = power + 1;
        return format!("{}^{}/{}", var, raised, raised);
    }

    if !expr.contains(var) {
        return format!("{expr}*{var}");
    }

    format!("∫({expr})d{var}")
}

/// Find the first `<var>^<digits>` occurrence anywhere in `expr` and return
/// its exponent. Only non-negative integer literals count, so `x^-1` never
/// reaches the power rule.
fn power_exponent(expr: &str, var: &str) -> Option<i64> {
    let needle = format!("{var}^");
    let mut offset = 0;
    while let Some(pos) = expr[offset..].find(&needle) {
        let digits_start = offset + pos + needle.len();
        let digits: String = expr[digits_start..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if !digits.is_empty() {
            if let Ok(power) = digits.parse() {
                return Some(power);
            }
        }
        offset = digits_start;
    }
    None
}
