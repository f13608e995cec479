//! Test helpers for executor tests
//!
//! Common utilities for loading scripts and running them against a capture console

use crate::executor::{CaptureConsole, Diagnostic, EvalError, Expr, Interpreter, Val};

/// Everything observable after a run
pub struct Outcome {
    pub result: Result<Vec<Val>, EvalError>,
    pub lines: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    /// Binding stack length after the run
    pub stack_len: usize,
}

impl Outcome {
    /// Top-level values, panicking on a runtime error
    pub fn values(&self) -> &[Val] {
        match &self.result {
            Ok(values) => values,
            Err(e) => panic!("Script failed: {}", e),
        }
    }
}

/// Deserialize a JSON script
pub fn parse_script(source: &str) -> Vec<Expr> {
    serde_json::from_str(source).expect("Script deserialization failed")
}

/// Interpreter wired to a capture console
pub fn build_interpreter() -> (Interpreter, CaptureConsole) {
    let console = CaptureConsole::new();
    let interp = Interpreter::with_console(console.clone());
    (interp, console)
}

/// Load and run a script in a fresh interpreter
pub fn run_script(source: &str) -> Outcome {
    let (mut interp, console) = build_interpreter();
    run_in(&mut interp, &console, source)
}

/// Load and run a script in an existing interpreter
pub fn run_in(interp: &mut Interpreter, console: &CaptureConsole, source: &str) -> Outcome {
    let script = parse_script(source);
    let result = interp.run(&script);
    Outcome {
        result,
        lines: console.lines(),
        diagnostics: console.diagnostics(),
        stack_len: interp.stack().len(),
    }
}
