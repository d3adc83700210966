//! Constant folding and identity elimination.
//!
//! A reduced simplifier: just enough algebra to keep derivative output clean
//! (no `*1` factors, folded constant arithmetic). Not a general canonicalizer.

use crate::expr::{one, zero, Expr};
use num_traits::{Signed, ToPrimitive, Zero};

const SIMPLIFY_ITERATION_LIMIT: usize = 64;

pub fn simplify_add(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Constant(x), Expr::Constant(y)) => Expr::Constant(x + y),
        (a, b) if a.is_zero() => b,
        (a, b) if b.is_zero() => a,
        (a, b) => Expr::Add(a.boxed(), b.boxed()),
    }
}

pub fn simplify_sub(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Constant(x), Expr::Constant(y)) => Expr::Constant(x - y),
        (a, b) if b.is_zero() => a,
        (a, b) if a.is_zero() => simplify_neg(b),
        (a, b) => Expr::Sub(a.boxed(), b.boxed()),
    }
}

pub fn simplify_mul(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Constant(x), Expr::Constant(y)) => Expr::Constant(x * y),
        (a, _) if a.is_zero() => zero(),
        (_, b) if b.is_zero() => zero(),
        (a, b) if a.is_one() => b,
        (a, b) if b.is_one() => a,
        // fold a constant through a nested constant factor
        (Expr::Constant(x), Expr::Mul(p, q)) => match *p {
            Expr::Constant(y) => simplify_mul(Expr::Constant(x * y), *q),
            p => Expr::Mul(
                Expr::Constant(x).boxed(),
                Expr::Mul(p.boxed(), q).boxed(),
            ),
        },
        (Expr::Mul(p, q), Expr::Constant(x)) => match *p {
            Expr::Constant(y) => simplify_mul(Expr::Constant(x * y), *q),
            p => Expr::Mul(
                Expr::Mul(p.boxed(), q).boxed(),
                Expr::Constant(x).boxed(),
            ),
        },
        (a, b) => Expr::Mul(a.boxed(), b.boxed()),
    }
}

pub fn simplify_div(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Constant(x), Expr::Constant(y)) if !y.is_zero() => Expr::Constant(x / y),
        (a, b) if a.is_zero() && !b.is_zero() => zero(),
        (a, b) if b.is_one() => a,
        (a, b) => Expr::Div(a.boxed(), b.boxed()),
    }
}

pub fn simplify_neg(a: Expr) -> Expr {
    match a {
        Expr::Constant(x) => Expr::Constant(-x),
        Expr::Neg(inner) => *inner,
        other => Expr::Neg(other.boxed()),
    }
}

pub fn simplify_pow(base: Expr, exp: Expr) -> Expr {
    if exp.is_zero() {
        return one();
    }
    if exp.is_one() {
        return base;
    }
    if let (Expr::Constant(b), Expr::Constant(e)) = (&base, &exp) {
        if e.is_integer() && !(b.is_zero() && e.is_negative()) {
            if let Some(k) = e.to_integer().to_i32() {
                return Expr::Constant(b.pow(k));
            }
        }
    }
    Expr::Pow(base.boxed(), exp.boxed())
}

/// One bottom-up simplification pass.
pub fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::Add(a, b) => simplify_add(simplify(*a), simplify(*b)),
        Expr::Sub(a, b) => simplify_sub(simplify(*a), simplify(*b)),
        Expr::Mul(a, b) => simplify_mul(simplify(*a), simplify(*b)),
        Expr::Div(a, b) => simplify_div(simplify(*a), simplify(*b)),
        Expr::Pow(a, b) => simplify_pow(simplify(*a), simplify(*b)),
        Expr::Neg(a) => simplify_neg(simplify(*a)),
        Expr::Sin(a) => Expr::Sin(simplify(*a).boxed()),
        Expr::Cos(a) => Expr::Cos(simplify(*a).boxed()),
        Expr::Tan(a) => Expr::Tan(simplify(*a).boxed()),
        Expr::Exp(a) => Expr::Exp(simplify(*a).boxed()),
        Expr::Log(a) => Expr::Log(simplify(*a).boxed()),
        Expr::Log10(a) => Expr::Log10(simplify(*a).boxed()),
        Expr::Sqrt(a) => Expr::Sqrt(simplify(*a).boxed()),
        Expr::Abs(a) => Expr::Abs(simplify(*a).boxed()),
        other => other,
    }
}

/// Simplify to a fixed point, bounded by an iteration cap.
pub fn simplify_fully(expr: Expr) -> Expr {
    let mut current = expr;
    for _ in 0..SIMPLIFY_ITERATION_LIMIT {
        let next = simplify(current.clone());
        if next == current {
            return current;
        }
        current = next;
    }
    current
}
