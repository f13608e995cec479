//! Control flow types

use super::values::Val;

/* ===================== Control Flow ===================== */

/// Outcome of evaluating an expression
///
/// `Return` bubbles through every enclosing scope (loops, conditionals, nested scripts)
/// and is only turned back into a value at a function call boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Normal value result
    Value(Val),
    /// RETURN was executed
    Return(Val),
}

impl Control {
    pub fn null() -> Self {
        Control::Value(Val::Null)
    }
}

impl From<Val> for Control {
    fn from(v: Val) -> Self {
        Control::Value(v)
    }
}
