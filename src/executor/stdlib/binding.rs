//! LET, SET and INC

use super::{name_arg, wrong_type};
use crate::executor::errors::EvalError;
use crate::executor::types::{Control, Val};
use crate::executor::Interpreter;

/// LET(name, value) - bind `name` in the innermost open scope
pub fn define(interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let name = name_arg("LET", &args, 0)?.to_string();
    let value = args.into_iter().nth(1).unwrap_or(Val::Null);
    interp.bind(name, value);
    Ok(Control::null())
}

/// SET(name, value) - assign into the frame that currently owns `name`
///
/// Creates the binding in the current scope when nothing on the stack owns it. Core
/// keywords are never overwritten; setting one of their names shadows it instead.
pub fn set(interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let name = name_arg("SET", &args, 0)?.to_string();
    let value = args.into_iter().nth(1).unwrap_or(Val::Null);

    match interp.stack_mut().find_mut(&name) {
        Some(frame) => frame.value = value,
        None => interp.bind(name, value),
    }
    Ok(Control::null())
}

/// INC(name) - add 1 to a bound number in place
pub fn inc(interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let name = name_arg("INC", &args, 0)?;

    let Some(frame) = interp.stack_mut().find_mut(name) else {
        return Err(EvalError::Unbound {
            name: name.to_string(),
        });
    };
    match &mut frame.value {
        Val::Num(n) => *n += 1.0,
        other => return Err(wrong_type("INC", 0, "a name bound to a number", other)),
    }
    Ok(Control::null())
}
