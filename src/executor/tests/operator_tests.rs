//! Tests for arithmetic, relational and logical keywords

use super::helpers::run_script;
use crate::executor::{EvalError, Val};

fn eval_one(source: &str) -> Val {
    let outcome = run_script(&format!("[{}]", source));
    outcome.values()[0].clone()
}

/* ===================== Arithmetic ===================== */

#[test]
fn test_arithmetic_basic() {
    assert_eq!(eval_one(r#"{"ADD": [1, 2]}"#), Val::Num(3.0));
    assert_eq!(eval_one(r#"{"SUB": [5, 3]}"#), Val::Num(2.0));
    assert_eq!(eval_one(r#"{"MUL": [3, 4]}"#), Val::Num(12.0));
    assert_eq!(eval_one(r#"{"DIV": [10, 4]}"#), Val::Num(2.5));
    assert_eq!(eval_one(r#"{"MOD": [10, 3]}"#), Val::Num(1.0));
}

#[test]
fn test_arithmetic_nested() {
    assert_eq!(
        eval_one(r#"{"ADD": [{"MUL": [2, 3]}, {"SUB": [10, 4]}]}"#),
        Val::Num(12.0)
    );
}

#[test]
fn test_division_by_zero_follows_ieee() {
    assert_eq!(eval_one(r#"{"DIV": [1, 0]}"#), Val::Num(f64::INFINITY));
    assert_eq!(eval_one(r#"{"DIV": [-1, 0]}"#), Val::Num(f64::NEG_INFINITY));
    assert!(matches!(eval_one(r#"{"MOD": [1, 0]}"#), Val::Num(n) if n.is_nan()));
}

#[test]
fn test_add_concatenates_strings() {
    assert_eq!(eval_one(r#"{"ADD": ["a", 1]}"#), Val::Str("a1".into()));
    assert_eq!(eval_one(r#"{"ADD": [1, "b"]}"#), Val::Str("1b".into()));
    assert_eq!(eval_one(r#"{"ADD": ["x", "y"]}"#), Val::Str("xy".into()));
}

#[test]
fn test_arithmetic_type_mismatch() {
    let outcome = run_script(r#"[{"SUB": ["a", 1]}]"#);
    assert_eq!(
        outcome.result,
        Err(EvalError::TypeMismatch {
            keyword: "SUB".to_string(),
            left: "string",
            right: "number",
        })
    );

    let outcome = run_script(r#"[{"ADD": [true, 1]}]"#);
    assert!(matches!(outcome.result, Err(EvalError::TypeMismatch { .. })));
}

#[test]
fn test_wrong_operand_count() {
    let outcome = run_script(r#"[{"ADD": 1}]"#);
    assert_eq!(
        outcome.result,
        Err(EvalError::WrongArgCount {
            keyword: "ADD".to_string(),
            expected: "2",
            got: 1,
        })
    );

    let outcome = run_script(r#"[{"MUL": [1, 2, 3]}]"#);
    assert!(matches!(outcome.result, Err(EvalError::WrongArgCount { got: 3, .. })));
}

/* ===================== Relational ===================== */

#[test]
fn test_equality_is_strict() {
    assert_eq!(eval_one(r#"{"==": [1, 1]}"#), Val::Bool(true));
    assert_eq!(eval_one(r#"{"==": ["1", 1]}"#), Val::Bool(false));
    assert_eq!(eval_one(r#"{"<>": ["1", 1]}"#), Val::Bool(true));
    assert_eq!(eval_one(r#"{"==": [null, null]}"#), Val::Bool(true));
    assert_eq!(eval_one(r#"{"==": ["a", "a"]}"#), Val::Bool(true));
}

#[test]
fn test_ordering() {
    assert_eq!(eval_one(r#"{">": [3, 2]}"#), Val::Bool(true));
    assert_eq!(eval_one(r#"{"<": [3, 2]}"#), Val::Bool(false));
    assert_eq!(eval_one(r#"{">=": [2, 2]}"#), Val::Bool(true));
    assert_eq!(eval_one(r#"{"<=": [3, 2]}"#), Val::Bool(false));
    assert_eq!(eval_one(r#"{"<": ["a", "b"]}"#), Val::Bool(true));
}

#[test]
fn test_ordering_mixed_types_is_error() {
    let outcome = run_script(r#"[{">": ["a", 1]}]"#);
    assert!(matches!(outcome.result, Err(EvalError::TypeMismatch { .. })));
}

/* ===================== Logical ===================== */

#[test]
fn test_and_or_select_operands() {
    assert_eq!(eval_one(r#"{"AND": [true, false]}"#), Val::Bool(false));
    assert_eq!(eval_one(r#"{"AND": [0, 5]}"#), Val::Num(0.0));
    assert_eq!(eval_one(r#"{"AND": [1, 5]}"#), Val::Num(5.0));
    assert_eq!(eval_one(r#"{"OR": [0, "x"]}"#), Val::Str("x".into()));
    assert_eq!(eval_one(r#"{"OR": [3, 0]}"#), Val::Num(3.0));
}

#[test]
fn test_logical_operands_always_evaluated() {
    let outcome = run_script(r#"[{"OR": [true, {"PRINT": "side effect"}]}]"#);
    assert_eq!(outcome.values()[0], Val::Bool(true));
    assert_eq!(outcome.lines, vec!["side effect"]);
}

#[test]
fn test_operators_leave_stack_untouched() {
    let outcome = run_script(
        r#"[{"LET": ["x", 2]}, {"ADD": [{"x": null}, 1]}, {"==": [{"x": null}, 2]}, {"x": null}]"#,
    );
    assert_eq!(outcome.values()[1], Val::Num(3.0));
    assert_eq!(outcome.values()[2], Val::Bool(true));
    assert_eq!(outcome.values()[3], Val::Num(2.0));
}
