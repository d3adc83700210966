//! Rewrites user-facing calculator notation into the canonical tokens the
//! expression parser understands.

/// Normalize user notation. Pure and total; unknown text passes through.
///
/// The base-10 rewrite runs before the natural-log one so that `log(` typed
/// by the user lands on `log10(` while `ln(` lands on `log(` without being
/// caught by the base-10 rule. Idempotent except for that pair: a `log(`
/// produced from `ln(` is promoted to `log10(` on a second pass.
///
/// `e^` becomes `exp(` literally, without balancing the parenthesis
/// (`e^x` -> `exp(x`). Such input fails the primary parse and is answered by
/// the rule-table fallback, which matches on the raw notation.
pub fn normalize(expr: &str) -> String {
    expr.replace("log(", "log10(")
        .replace("ln(", "log(")
        .replace("e^", "exp(")
        .replace('√', "sqrt")
        .replace('π', "pi")
        .replace('∞', "Infinity")
}
