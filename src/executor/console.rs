//! Diagnostic output
//!
//! PRINT writes program output through `print`; unresolved keywords are reported through
//! `report`. The interpreter never touches stdout or stderr directly.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A keyword that could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub keyword: String,
    pub line: Option<u32>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "KEY NOT FOUND: '{}' on line: {}", self.keyword, line),
            None => write!(f, "KEY NOT FOUND: '{}'", self.keyword),
        }
    }
}

pub trait Console {
    /// Write one line of program output
    fn print(&mut self, line: &str);

    /// Report a non-fatal diagnostic
    fn report(&mut self, diagnostic: &Diagnostic);
}

/// Writes output to stdout and diagnostics to stderr
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print(&mut self, line: &str) {
        println!("{}", line);
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        eprintln!("{}", diagnostic);
    }
}

/// Collected output of a `CaptureConsole`
#[derive(Debug, Default)]
pub struct Captured {
    pub lines: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Records everything in memory
///
/// Clones share the same buffer, so a host can keep one handle and give the other
/// to the interpreter.
#[derive(Debug, Default, Clone)]
pub struct CaptureConsole {
    inner: Rc<RefCell<Captured>>,
}

impl CaptureConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.borrow().lines.clone()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.inner.borrow().diagnostics.clone()
    }
}

impl Console for CaptureConsole {
    fn print(&mut self, line: &str) {
        self.inner.borrow_mut().lines.push(line.to_string());
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        self.inner.borrow_mut().diagnostics.push(diagnostic.clone());
    }
}
