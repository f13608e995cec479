//! Core keyword library
//!
//! Built-ins live in an immutable table consulted below the binding stack, so any frame
//! pushed at runtime (LET, FUNCTION, plugins) can shadow them.

pub mod binding;
pub mod flow;
pub mod function;
pub mod io;
pub mod math;
pub mod operators;

use super::errors::EvalError;
use super::plugin::Plugin;
use super::stack::Lookup;
use super::types::{Builtin, BuiltinFn, Expr, Val};
use std::collections::HashMap;
use std::rc::Rc;

/* ===================== Keyword Table ===================== */

const CORE: &[(&str, BuiltinFn)] = &[
    ("LET", binding::define),
    ("SET", binding::set),
    ("INC", binding::inc),
    ("FUNCTION", function::define),
    ("RETURN", function::ret),
    ("ADD", operators::add),
    ("SUB", operators::sub),
    ("MUL", operators::mul),
    ("DIV", operators::div),
    ("MOD", operators::rem),
    ("==", operators::eq),
    ("<>", operators::ne),
    (">", operators::gt),
    ("<", operators::lt),
    (">=", operators::ge),
    ("<=", operators::le),
    ("AND", operators::and),
    ("OR", operators::or),
    ("PRINT", io::print),
    ("FOR", flow::for_range),
    ("IF", flow::if_then),
    ("WHILE", flow::while_loop),
];

/// The core keyword table
#[derive(Clone)]
pub struct Keywords {
    table: HashMap<&'static str, Val>,
}

impl Keywords {
    pub fn core() -> Self {
        let table = CORE
            .iter()
            .map(|&(name, func)| (name, Val::Builtin(Builtin { name, func })))
            .collect();
        Self { table }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }
}

impl Lookup for Keywords {
    fn lookup(&self, name: &str) -> Option<&Val> {
        self.table.get(name)
    }
}

/* ===================== Bundled Plugins ===================== */

/// Plugins shipped with the crate, by name
pub fn bundled_plugin(name: &str) -> Option<Plugin> {
    match name {
        "math" => Some(math::plugin()),
        _ => None,
    }
}

/* ===================== Argument Helpers ===================== */

pub(crate) fn wrong_type(
    keyword: &str,
    index: usize,
    expected: &'static str,
    got: &Val,
) -> EvalError {
    EvalError::WrongArgType {
        keyword: keyword.to_string(),
        index,
        expected,
        got: got.type_name(),
    }
}

pub(crate) fn wrong_count(keyword: &str, expected: &'static str, got: usize) -> EvalError {
    EvalError::WrongArgCount {
        keyword: keyword.to_string(),
        expected,
        got,
    }
}

/// Argument `index` as a binding name
pub(crate) fn name_arg<'a>(
    keyword: &str,
    args: &'a [Val],
    index: usize,
) -> Result<&'a str, EvalError> {
    match args.get(index) {
        Some(Val::Str(name)) => Ok(name),
        Some(other) => Err(wrong_type(keyword, index, "a name", other)),
        None => Err(wrong_count(keyword, "a name", args.len())),
    }
}

pub(crate) fn num_arg(keyword: &str, args: &[Val], index: usize) -> Result<f64, EvalError> {
    match args.get(index) {
        Some(Val::Num(n)) => Ok(*n),
        Some(other) => Err(wrong_type(keyword, index, "a number", other)),
        None => Err(wrong_count(keyword, "a number", args.len())),
    }
}

/// Split off the trailing `script` argument
pub(crate) fn split_script<'a>(
    keyword: &str,
    args: &'a [Val],
) -> Result<(Rc<Expr>, &'a [Val]), EvalError> {
    match args.split_last() {
        Some((Val::Code(code), rest)) => Ok((Rc::clone(code), rest)),
        Some((other, _)) => Err(wrong_type(keyword, args.len() - 1, "a script", other)),
        None => Err(wrong_count(keyword, "a trailing script", 0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_table_contains_every_keyword() {
        let keywords = Keywords::core();
        for (name, _) in CORE {
            assert!(
                matches!(keywords.lookup(name), Some(Val::Builtin(b)) if b.name == *name),
                "missing core keyword {}",
                name
            );
        }
        assert_eq!(keywords.names().count(), CORE.len());
    }

    #[test]
    fn test_bundled_plugins() {
        assert!(bundled_plugin("math").is_some());
        assert!(bundled_plugin("nope").is_none());
    }
}
