//! Runtime value types

use super::ast::Expr;
use super::control::Control;
use crate::executor::errors::EvalError;
use crate::executor::Interpreter;
use std::fmt;
use std::rc::Rc;

/// Signature shared by core keywords
pub type BuiltinFn = fn(&mut Interpreter, Vec<Val>) -> Result<Control, EvalError>;

/// Runtime value type
#[derive(Clone)]
pub enum Val {
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    /// Values produced by evaluating a script
    List(Vec<Val>),
    /// An un-evaluated script handed to a keyword through the `script` field
    Code(Rc<Expr>),
    Builtin(Builtin),
    Native(Native),
    Func(Rc<Function>),
}

/// A core keyword implementation
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// A host-provided callable installed by a plugin
#[derive(Clone)]
pub struct Native {
    pub name: Rc<str>,
    pub func: Rc<dyn Fn(&mut Interpreter, Vec<Val>) -> Result<Control, EvalError>>,
}

impl Native {
    pub fn new<F>(name: &str, func: F) -> Self
    where
        F: Fn(&mut Interpreter, Vec<Val>) -> Result<Control, EvalError> + 'static,
    {
        Self {
            name: Rc::from(name),
            func: Rc::new(func),
        }
    }
}

/// A function defined by the FUNCTION keyword
///
/// Holds no reference to the interpreter; the caller supplies it at invocation.
#[derive(Debug)]
pub struct Function {
    pub name: String,
    pub params: Vec<String>,
    pub body: Rc<Expr>,
}

impl Val {
    /// Check if value is truthy (for conditionals)
    ///
    /// `null`, `false`, `0`, `NaN` and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Null => false,
            Val::Bool(b) => *b,
            Val::Num(n) => *n != 0.0 && !n.is_nan(),
            Val::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Name of the value's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Null => "null",
            Val::Bool(_) => "bool",
            Val::Num(_) => "number",
            Val::Str(_) => "string",
            Val::List(_) => "list",
            Val::Code(_) => "script",
            Val::Builtin(_) | Val::Native(_) | Val::Func(_) => "function",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Val::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for Val {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Val::Null, Val::Null) => true,
            (Val::Bool(a), Val::Bool(b)) => a == b,
            (Val::Num(a), Val::Num(b)) => a == b,
            (Val::Str(a), Val::Str(b)) => a == b,
            (Val::List(a), Val::List(b)) => a == b,
            (Val::Code(a), Val::Code(b)) => Rc::ptr_eq(a, b),
            (Val::Builtin(a), Val::Builtin(b)) => a.name == b.name,
            (Val::Native(a), Val::Native(b)) => Rc::ptr_eq(&a.func, &b.func),
            (Val::Func(a), Val::Func(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Val::Null => write!(f, "null"),
            Val::Bool(b) => write!(f, "{}", b),
            Val::Num(n) if n.is_infinite() => {
                write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
            }
            Val::Num(n) => write!(f, "{}", n),
            Val::Str(s) => write!(f, "{}", s),
            Val::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i != 0 {
                        write!(f, ",")?;
                    }
                    if *item != Val::Null {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Val::Code(_) => write!(f, "[script]"),
            Val::Builtin(b) => write!(f, "[keyword {}]", b.name),
            Val::Native(n) => write!(f, "[native {}]", n.name),
            Val::Func(func) => write!(f, "[function {}]", func.name),
        }
    }
}

impl fmt::Debug for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Val::Null => write!(f, "Null"),
            Val::Bool(b) => write!(f, "Bool({})", b),
            Val::Num(n) => write!(f, "Num({:?})", n),
            Val::Str(s) => write!(f, "Str({:?})", s),
            Val::List(items) => f.debug_tuple("List").field(items).finish(),
            Val::Code(expr) => f.debug_tuple("Code").field(expr).finish(),
            Val::Builtin(b) => write!(f, "Builtin({})", b.name),
            Val::Native(n) => write!(f, "Native({})", n.name),
            Val::Func(func) => write!(f, "Func({}/{})", func.name, func.params.len()),
        }
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Self {
        Val::Num(n)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Self {
        Val::Bool(b)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::Str(s.to_string())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Self {
        Val::Str(s)
    }
}
