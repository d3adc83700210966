use rcalc::{definite_integral, CalcError};

fn value_of(result: &str) -> f64 {
    result.parse().expect("numeric result")
}

#[test]
fn integrates_polynomial() {
    let result = definite_integral("x^2", "x", "0", "1", 1000, 6).expect("integrate x^2");
    assert!((value_of(&result) - 1.0 / 3.0).abs() < 1e-5, "got {result}");
}

#[test]
fn integrates_sine_over_half_period() {
    let result =
        definite_integral("sin(x)", "x", "0", "3.14159265", 1000, 6).expect("integrate sin");
    assert!((value_of(&result) - 2.0).abs() < 1e-3, "got {result}");
}

#[test]
fn result_is_fixed_point_with_six_digits() {
    let result = definite_integral("x^2", "x", "0", "1", 1000, 6).expect("integrate x^2");
    assert_eq!(result, "0.333333");
}

#[test]
fn normalizes_before_evaluating() {
    // π and √ notation pass through the normalizer
    let result = definite_integral("√(x)", "x", "0", "1", 1000, 6).expect("integrate sqrt");
    assert!((value_of(&result) - 2.0 / 3.0).abs() < 1e-4, "got {result}");
}

#[test]
fn rejects_odd_subdivision_counts() {
    for n in [0, 999] {
        match definite_integral("x", "x", "0", "1", n, 6) {
            Err(CalcError::Integration(_)) => {}
            other => panic!("expected integration error for n = {n}, got {other:?}"),
        }
    }
}

#[test]
fn fails_on_unevaluable_integrand() {
    // unbound identifier
    match definite_integral("x+q", "x", "0", "1", 1000, 6) {
        Err(CalcError::Integration(_)) => {}
        other => panic!("expected integration error, got {other:?}"),
    }
    // unparsable input
    match definite_integral("x+*2", "x", "0", "1", 1000, 6) {
        Err(CalcError::Integration(_)) => {}
        other => panic!("expected integration error, got {other:?}"),
    }
}

#[test]
fn fails_on_invalid_bounds() {
    match definite_integral("x", "x", "zero", "1", 1000, 6) {
        Err(CalcError::Integration(_)) => {}
        other => panic!("expected integration error, got {other:?}"),
    }
}
