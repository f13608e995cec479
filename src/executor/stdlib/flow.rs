//! IF, FOR and WHILE
//!
//! Bodies arrive un-evaluated through the node's `script` field. A `Control::Return`
//! produced inside a body is handed straight back to the caller; loops never catch it.

use super::{name_arg, num_arg, split_script, wrong_count, wrong_type};
use crate::executor::errors::EvalError;
use crate::executor::types::{Control, Val};
use crate::executor::Interpreter;

/// IF(condition, [then, else?])
pub fn if_then(interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let (branches, rest) = split_script("IF", &args)?;
    let Some(condition) = rest.first() else {
        return Err(wrong_count("IF", "a condition and a script", args.len()));
    };

    let branch = if condition.is_truthy() {
        branches.as_items().first()
    } else {
        branches.as_items().get(1)
    };

    match branch {
        Some(body) => match interp.evaluate(body, None)? {
            ret @ Control::Return(_) => Ok(ret),
            Control::Value(_) => Ok(Control::null()),
        },
        None => Ok(Control::null()),
    }
}

/// FOR(name, start, end, step?, body)
///
/// The loop variable is a single frame pushed once before the first pass. It is not
/// removed when the loop ends; the enclosing scope drops it. Each pass re-reads the
/// frame, so SET/INC on the variable inside the body carry over.
pub fn for_range(interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let (body, rest) = split_script("FOR", &args)?;
    if rest.len() < 3 {
        return Err(wrong_count(
            "FOR",
            "a name, start, end, optional step and a script",
            args.len(),
        ));
    }

    let name = name_arg("FOR", rest, 0)?.to_string();
    let start = num_arg("FOR", rest, 1)?;
    let end = num_arg("FOR", rest, 2)?;
    let step = match rest.get(3) {
        None | Some(Val::Null) => 1.0,
        Some(Val::Num(n)) if *n == 0.0 || n.is_nan() => 1.0,
        Some(Val::Num(n)) => *n,
        Some(other) => return Err(wrong_type("FOR", 3, "a number", other)),
    };

    interp.bind(name.clone(), Val::Num(start));
    let slot = interp.stack().len() - 1;

    loop {
        let current = match interp.stack().get(slot).map(|frame| &frame.value) {
            Some(Val::Num(n)) => *n,
            Some(other) => return Err(wrong_type("FOR", 0, "a numeric loop variable", other)),
            None => return Err(EvalError::Unbound { name }),
        };
        if !(current <= end) {
            break;
        }

        if let ret @ Control::Return(_) = interp.evaluate(&body, None)? {
            return Ok(ret);
        }

        match interp.stack_mut().get_mut(slot).map(|frame| &mut frame.value) {
            Some(Val::Num(n)) => *n += step,
            Some(other) => return Err(wrong_type("FOR", 0, "a numeric loop variable", other)),
            None => return Err(EvalError::Unbound { name }),
        }
    }

    Ok(Control::null())
}

/// WHILE([[condition], body])
///
/// Unlike IF, the condition is part of the script and is evaluated again before every
/// pass.
pub fn while_loop(interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let (code, _) = split_script("WHILE", &args)?;

    let (condition, body) = match code.as_items() {
        [condition, body, ..] => match condition.as_items().first() {
            Some(condition) => (condition, body),
            None => return Err(wrong_count("WHILE", "a condition expression", 0)),
        },
        _ => {
            return Err(wrong_count(
                "WHILE",
                "a [[condition], body] script",
                code.as_items().len(),
            ))
        }
    };

    loop {
        match interp.evaluate(condition, None)? {
            ret @ Control::Return(_) => return Ok(ret),
            Control::Value(v) if !v.is_truthy() => break,
            Control::Value(_) => {}
        }

        if let ret @ Control::Return(_) = interp.evaluate(body, None)? {
            return Ok(ret);
        }
    }

    Ok(Control::null())
}
