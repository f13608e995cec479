//! Expression tree node types
//!
//! Scripts arrive as JSON documents:
//! - `null`, booleans, numbers and strings are literals
//! - arrays are scripts
//! - objects are keyword nodes: one keyword key plus the optional `line` and `script` fields

use super::values::Val;
use crate::executor::errors::LoadError;
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use std::rc::Rc;

/// Reserved node field carrying a source line number
pub const LINE_FIELD: &str = "line";

/// Reserved node field carrying an un-evaluated script argument
pub const SCRIPT_FIELD: &str = "script";

/// Expression AST node
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "JsonValue")]
pub enum Expr {
    /// Literal, returned unchanged
    Lit(Val),
    /// Ordered sequence of expressions evaluated in its own scope
    Script(Vec<Expr>),
    /// Single-keyword node
    Node(Box<Node>),
}

/// Keyword node
#[derive(Debug, Clone)]
pub struct Node {
    pub keyword: String,
    /// Argument expression, evaluated before dispatch
    pub arg: Expr,
    /// Passed to the keyword as a trailing argument without being evaluated
    pub script: Option<Rc<Expr>>,
    pub line: Option<u32>,
}

impl Expr {
    pub fn node(keyword: impl Into<String>, arg: Expr) -> Self {
        Expr::Node(Box::new(Node {
            keyword: keyword.into(),
            arg,
            script: None,
            line: None,
        }))
    }

    /// Items of a script, or the expression itself as a one-item slice
    pub fn as_items(&self) -> &[Expr] {
        match self {
            Expr::Script(items) => items,
            other => std::slice::from_ref(other),
        }
    }
}

impl TryFrom<JsonValue> for Expr {
    type Error = LoadError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Null => Ok(Expr::Lit(Val::Null)),
            JsonValue::Bool(b) => Ok(Expr::Lit(Val::Bool(b))),
            JsonValue::Number(n) => n
                .as_f64()
                .map(|v| Expr::Lit(Val::Num(v)))
                .ok_or_else(|| LoadError::InvalidNumber(n.to_string())),
            JsonValue::String(s) => Ok(Expr::Lit(Val::Str(s))),
            JsonValue::Array(items) => items
                .into_iter()
                .map(Expr::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Expr::Script),
            JsonValue::Object(map) => load_node(map).map(|node| Expr::Node(Box::new(node))),
        }
    }
}

fn load_node(mut map: Map<String, JsonValue>) -> Result<Node, LoadError> {
    let line = match map.remove(LINE_FIELD) {
        None | Some(JsonValue::Null) => None,
        Some(v) => Some(
            v.as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| LoadError::InvalidLine {
                    found: v.to_string(),
                })?,
        ),
    };

    let script = map
        .remove(SCRIPT_FIELD)
        .map(Expr::try_from)
        .transpose()?
        .map(Rc::new);

    if map.len() > 1 {
        return Err(LoadError::AmbiguousKeyword {
            keywords: map.keys().cloned().collect(),
        });
    }

    let Some((keyword, arg)) = map.into_iter().next() else {
        let mut keys = Vec::new();
        if line.is_some() {
            keys.push(LINE_FIELD.to_string());
        }
        if script.is_some() {
            keys.push(SCRIPT_FIELD.to_string());
        }
        return Err(LoadError::MissingKeyword { keys });
    };

    Ok(Node {
        keyword,
        arg: Expr::try_from(arg)?,
        script,
        line,
    })
}

/// Load a top-level script from a JSON document
///
/// A single non-array expression is treated as a one-expression script.
pub fn load_script(value: JsonValue) -> Result<Vec<Expr>, LoadError> {
    match Expr::try_from(value)? {
        Expr::Script(items) => Ok(items),
        other => Ok(vec![other]),
    }
}
