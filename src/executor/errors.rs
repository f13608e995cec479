//! Error types for loading and evaluating scripts

use super::types::Val;
use thiserror::Error;

/// Errors raised while turning a JSON document into an expression tree
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("keyword node has no keyword (keys: {keys:?})")]
    MissingKeyword { keys: Vec<String> },

    #[error("keyword node has more than one keyword: {keywords:?}")]
    AmbiguousKeyword { keywords: Vec<String> },

    #[error("'line' must be a non-negative integer, got {found}")]
    InvalidLine { found: String },

    #[error("number {0} cannot be represented as a script value")]
    InvalidNumber(String),
}

/// Runtime faults
///
/// Non-local return is not one of these: it travels as `Control::Return`.
/// `ReturnOutsideFunction` is produced only when that signal reaches the top-level run.
#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("{keyword}: expected {expected} argument(s), got {got}")]
    WrongArgCount {
        keyword: String,
        expected: &'static str,
        got: usize,
    },

    #[error("{keyword}: argument {index} must be {expected}, got {got}")]
    WrongArgType {
        keyword: String,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    #[error("{keyword}: cannot apply to {left} and {right}")]
    TypeMismatch {
        keyword: String,
        left: &'static str,
        right: &'static str,
    },

    #[error("'{name}' is not bound")]
    Unbound { name: String },

    #[error("RETURN outside of a function (value: {value})")]
    ReturnOutsideFunction { value: Val },

    #[error("call depth limit of {limit} exceeded")]
    CallDepthExceeded { limit: usize },
}
