//! FUNCTION and RETURN

use super::{name_arg, split_script, wrong_count, wrong_type};
use crate::executor::errors::EvalError;
use crate::executor::types::{Control, Function, Val};
use crate::executor::Interpreter;
use std::rc::Rc;

/// FUNCTION(name, param..., script) - bind `name` to a function
pub fn define(interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let (body, rest) = split_script("FUNCTION", &args)?;
    if rest.is_empty() {
        return Err(wrong_count("FUNCTION", "a name and a script", args.len()));
    }
    let name = name_arg("FUNCTION", rest, 0)?.to_string();

    let params = rest[1..]
        .iter()
        .enumerate()
        .map(|(i, param)| match param {
            Val::Str(p) => Ok(p.clone()),
            other => Err(wrong_type("FUNCTION", i + 1, "a parameter name", other)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let func = Function {
        name: name.clone(),
        params,
        body,
    };
    interp.bind(name, Val::Func(Rc::new(func)));
    Ok(Control::null())
}

/// RETURN(value) - unwind to the nearest function call
pub fn ret(_interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    Ok(Control::Return(args.into_iter().next().unwrap_or(Val::Null)))
}
