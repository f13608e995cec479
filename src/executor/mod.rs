//! # Executor - keyword-dispatching tree walker
//!
//! ## Core Principles
//!
//! 1. **One binding per frame**: all names live on a single `BindingStack`; lookup scans
//!    from the top, so newer bindings shadow older ones
//! 2. **Scopes are stack lengths**: every script run saves the stack length and truncates
//!    back to it on exit
//! 3. **Keywords are values**: core keywords, plugin natives and user functions are all
//!    looked up the same way and invoked with an evaluated argument list
//! 4. **Return is control flow, not an error**: `Control::Return` travels up to the
//!    nearest function call

pub mod console;
pub mod errors;
pub mod interpreter;
pub mod plugin;
pub mod stack;
pub mod stdlib;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use console::{CaptureConsole, Console, Diagnostic, StdConsole};
pub use errors::{EvalError, LoadError};
pub use interpreter::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
pub use plugin::Plugin;
pub use stack::{BindingStack, Frame, Lookup};
pub use stdlib::{bundled_plugin, Keywords};
pub use types::{load_script, Control, Expr, Val};
