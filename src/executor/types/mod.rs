//! Type definitions for the executor
//!
//! - Expression tree nodes (Expr, Node)
//! - Runtime values (Val, Function, Native, Builtin)
//! - Control flow (Control)

pub mod ast;
pub mod control;
pub mod values;

// Re-export all types for convenient access
pub use ast::{load_script, Expr, Node};
pub use control::Control;
pub use values::{Builtin, BuiltinFn, Function, Native, Val};
