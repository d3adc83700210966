//! Static pattern/result tables for the string-level symbolic fallbacks.
//!
//! Every template uses `x` as the placeholder variable; [`substitute`] swaps
//! it for the caller's variable before the exact-match comparison. The tables
//! are ordered: lookup walks them front to back and takes the first match.

pub struct Rule {
    pub pattern: &'static str,
    pub result: &'static str,
}

pub const DERIVATIVE_RULES: &[Rule] = &[
    Rule { pattern: "x", result: "1" },
    Rule { pattern: "x^2", result: "2*x" },
    Rule { pattern: "x^3", result: "3*x^2" },
    Rule { pattern: "x^n", result: "n*x^(n-1)" },
    Rule { pattern: "sin(x)", result: "cos(x)" },
    Rule { pattern: "cos(x)", result: "-sin(x)" },
    Rule { pattern: "tan(x)", result: "sec(x)^2" },
    Rule { pattern: "e^x", result: "e^x" },
    Rule { pattern: "ln(x)", result: "1/x" },
    Rule { pattern: "log(x)", result: "1/(x*ln(10))" },
];

pub const INTEGRAL_RULES: &[Rule] = &[
    Rule { pattern: "1", result: "x" },
    Rule { pattern: "x", result: "x^2/2" },
    Rule { pattern: "x^2", result: "x^3/3" },
    Rule { pattern: "x^3", result: "x^4/4" },
    Rule { pattern: "1/x", result: "ln(|x|)" },
    Rule { pattern: "sin(x)", result: "-cos(x)" },
    Rule { pattern: "cos(x)", result: "sin(x)" },
    Rule { pattern: "e^x", result: "e^x" },
    Rule { pattern: "tan(x)", result: "-ln(|cos(x)|)" },
];

/// Replace every `x` in a template with the variable identifier.
pub fn substitute(template: &str, var: &str) -> String {
    template.replace('x', var)
}
