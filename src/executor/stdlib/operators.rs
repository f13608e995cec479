//! Arithmetic, relational and logical keywords
//!
//! All of these are pure functions of their two evaluated operands. Both operands are
//! always evaluated before dispatch, so AND/OR cannot short-circuit evaluation; they only
//! select which operand becomes the result.

use super::wrong_count;
use crate::executor::errors::EvalError;
use crate::executor::types::{Control, Val};
use crate::executor::Interpreter;
use std::cmp::Ordering;

fn operands(keyword: &str, args: Vec<Val>) -> Result<(Val, Val), EvalError> {
    let got = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next(), args.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(wrong_count(keyword, "2", got)),
    }
}

fn mismatch(keyword: &str, a: &Val, b: &Val) -> EvalError {
    EvalError::TypeMismatch {
        keyword: keyword.to_string(),
        left: a.type_name(),
        right: b.type_name(),
    }
}

/* ===================== Arithmetic ===================== */

/// Division and modulo by zero follow IEEE-754: `inf`, `-inf` or `NaN`.
fn numeric(
    keyword: &str,
    args: Vec<Val>,
    op: fn(f64, f64) -> f64,
) -> Result<Control, EvalError> {
    match operands(keyword, args)? {
        (Val::Num(a), Val::Num(b)) => Ok(Val::Num(op(a, b)).into()),
        (a, b) => Err(mismatch(keyword, &a, &b)),
    }
}

/// ADD(a, b) - numeric sum, or concatenation when either side is a string
pub fn add(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    match operands("ADD", args)? {
        (Val::Num(a), Val::Num(b)) => Ok(Val::Num(a + b).into()),
        (a @ Val::Str(_), b) | (a, b @ Val::Str(_)) => Ok(Val::Str(format!("{}{}", a, b)).into()),
        (a, b) => Err(mismatch("ADD", &a, &b)),
    }
}

pub fn sub(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    numeric("SUB", args, |a, b| a - b)
}

pub fn mul(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    numeric("MUL", args, |a, b| a * b)
}

pub fn div(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    numeric("DIV", args, |a, b| a / b)
}

pub fn rem(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    numeric("MOD", args, |a, b| a % b)
}

/* ===================== Relational ===================== */

/// Numbers compare numerically, strings lexicographically. NaN is unordered.
fn compare(
    keyword: &str,
    args: Vec<Val>,
    accept: fn(Ordering) -> bool,
) -> Result<Control, EvalError> {
    let ordering = match operands(keyword, args)? {
        (Val::Num(a), Val::Num(b)) => a.partial_cmp(&b),
        (Val::Str(a), Val::Str(b)) => Some(a.cmp(&b)),
        (a, b) => return Err(mismatch(keyword, &a, &b)),
    };
    Ok(Val::Bool(ordering.map_or(false, accept)).into())
}

/// ==(a, b) - strict equality: values of different types are never equal
pub fn eq(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let (a, b) = operands("==", args)?;
    Ok(Val::Bool(a == b).into())
}

pub fn ne(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let (a, b) = operands("<>", args)?;
    Ok(Val::Bool(a != b).into())
}

pub fn gt(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    compare(">", args, Ordering::is_gt)
}

pub fn lt(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    compare("<", args, Ordering::is_lt)
}

pub fn ge(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    compare(">=", args, Ordering::is_ge)
}

pub fn le(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    compare("<=", args, Ordering::is_le)
}

/* ===================== Logical ===================== */

/// AND(a, b) - `a` when it is falsy, otherwise `b`
pub fn and(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let (a, b) = operands("AND", args)?;
    let result = if a.is_truthy() { b } else { a };
    Ok(result.into())
}

/// OR(a, b) - `a` when it is truthy, otherwise `b`
pub fn or(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let (a, b) = operands("OR", args)?;
    let result = if a.is_truthy() { a } else { b };
    Ok(result.into())
}
