pub mod cli;
pub mod config;
pub mod executor;

// Re-export main types
pub use executor::{
    load_script, CaptureConsole, Console, Control, EvalError, Expr, Interpreter, LoadError,
    Plugin, Val,
};
