use rcalc::{
    operation_info, CalcError, DerivationPath, Engine, History, IntegrationBounds, Operation,
};

#[test]
fn derivative_of_cubic_with_four_step_walkthrough() {
    let engine = Engine::new();
    let result = engine.derivative("x^3", "x").expect("derivative of x^3");
    assert_eq!(result.result, "3*x^2");
    assert_eq!(result.operation, Operation::Derivative);
    assert!(!result.numeric);

    let steps = engine.explain(&result);
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0], "Given function: f(x) = x^3");
    assert_eq!(steps[3], "Result: f'(x) = 3*x^2");
}

#[test]
fn parser_path_succeeds_where_the_rule_table_would_not() {
    let engine = Engine::new();
    let result = engine
        .derivative("sin(x)*cos(x)", "x")
        .expect("derivative of product");
    assert_eq!(result.path, DerivationPath::Parser);
    // product rule, not the unresolved sentinel
    assert!(!result.result.contains("d/dx"), "got {}", result.result);

    // but the walkthrough still narrates the fallback, which does not reach
    // a closed form here
    let steps = engine.explain(&result);
    assert_eq!(steps.len(), 4);
    assert!(steps[3].contains("d/dx(sin(x)*cos(x))"), "got {}", steps[3]);
}

#[test]
fn unparsable_input_falls_back_to_the_rule_table() {
    let engine = Engine::new();
    let result = engine.derivative("e^x", "x").expect("derivative of e^x");
    assert_eq!(result.path, DerivationPath::RuleTable);
    assert_eq!(result.result, "e^x");
}

#[test]
fn indefinite_integral_gets_constant_of_integration() {
    let engine = Engine::new();
    let result = engine.integral("x^2", "x", None).expect("integral of x^2");
    assert_eq!(result.result, "x^3/3 + C");
    assert!(!result.numeric);
    assert!(result.bounds.is_none());

    let steps = engine.explain(&result);
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[3], "Result: ∫x^2dx = x^3/3 + C");
}

#[test]
fn definite_integral_is_numeric_with_bounds_metadata() {
    let engine = Engine::new();
    let bounds = IntegrationBounds::new("0", "1");
    let result = engine
        .integral("x^2", "x", Some(bounds))
        .expect("definite integral");
    assert!(result.numeric);
    assert_eq!(result.result, "0.333333");
    assert_eq!(result.to_string(), "0.333333 (from 0 to 1)");
}

#[test]
fn single_bound_counts_as_absent() {
    assert!(IntegrationBounds::from_parts(Some("0"), None).is_none());
    assert!(IntegrationBounds::from_parts(None, Some("1")).is_none());
    assert!(IntegrationBounds::from_parts(Some("0"), Some("")).is_none());
    let bounds = IntegrationBounds::from_parts(Some(" 0 "), Some("1")).expect("both bounds");
    assert_eq!(bounds.lower, "0");

    // engine side: a missing bound means the symbolic path
    let engine = Engine::new();
    let result = engine
        .integral("x", "x", IntegrationBounds::from_parts(Some("0"), None))
        .expect("integral of x");
    assert_eq!(result.result, "x^2/2 + C");
}

#[test]
fn empty_input_is_a_parse_error() {
    let engine = Engine::new();
    match engine.derivative("  ", "x") {
        Err(CalcError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
    match engine.integral("x", "", None) {
        Err(CalcError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn validate_surfaces_parse_errors() {
    let engine = Engine::new();
    assert!(engine.validate("x^2 + sin(x)").is_ok());
    assert!(matches!(engine.validate("x+*2"), Err(CalcError::Parse(_))));
}

#[test]
fn operation_info_describes_each_operation() {
    assert!(operation_info(Operation::Derivative).contains("rate of change"));
    assert!(operation_info(Operation::Integral).contains("area under the curve"));
}

#[test]
fn history_records_most_recent_first_and_replays() {
    let engine = Engine::new();
    let mut history = History::new();

    let first = engine.derivative("x^2", "x").expect("derivative");
    let second = engine.integral("sin(x)", "x", None).expect("integral");
    history.record(&first);
    let id = history.record(&second).id;

    assert_eq!(history.len(), 2);
    assert_eq!(history.entries()[0].expression, "sin(x)");
    assert_eq!(history.entries()[1].expression, "x^2");

    let (expr, op, var) = history.replay(id).expect("replay entry");
    assert_eq!((expr, op, var), ("sin(x)", Operation::Integral, "x"));
    let replayed = engine.integral(expr, var, None).expect("replayed integral");
    assert_eq!(replayed.result, second.result);
}

#[test]
fn history_round_trips_through_json() {
    let engine = Engine::new();
    let mut history = History::new();
    history.record(&engine.derivative("x^3", "x").expect("derivative"));

    let mut buffer = Vec::new();
    history.save_to(&mut buffer).expect("save");
    let restored = History::load_from(buffer.as_slice()).expect("load");

    assert_eq!(restored.len(), 1);
    assert_eq!(restored.entries()[0].expression, "x^3");
    assert_eq!(restored.entries()[0].operation, Operation::Derivative);
    assert_eq!(restored.entries()[0].result, "3*x^2");
}
