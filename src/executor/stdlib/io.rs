//! PRINT

use crate::executor::errors::EvalError;
use crate::executor::types::{Control, Val};
use crate::executor::Interpreter;

/// PRINT(v...) - write the concatenated text of every non-null argument as one line
pub fn print(interp: &mut Interpreter, args: Vec<Val>) -> Result<Control, EvalError> {
    let line: String = args
        .iter()
        .filter(|v| !matches!(v, Val::Null))
        .map(Val::to_string)
        .collect();
    interp.print(&line);
    Ok(Control::null())
}
