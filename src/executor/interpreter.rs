//! The evaluator
//!
//! Reduces expressions and scripts to values. Scopes are tied to `run_scope`: it saves the
//! stack length on entry and truncates back to it on every exit path, including
//! `Control::Return` unwinds and errors.

use super::console::{Console, Diagnostic, StdConsole};
use super::errors::EvalError;
use super::plugin::Plugin;
use super::stack::{BindingStack, Frame, Lookup};
use super::stdlib::Keywords;
use super::types::{Control, Expr, Function, Node, Val};
use std::rc::Rc;

/// Default limit on nested function invocations
///
/// Must fit a 2 MiB thread stack (spawned and test threads); each script-level call nests
/// about twenty native frames.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 64;

pub struct Interpreter {
    stack: BindingStack,
    keywords: Keywords,
    console: Box<dyn Console>,
    depth: usize,
    max_call_depth: usize,
}

impl Interpreter {
    /// Create an interpreter that prints to stdout/stderr
    pub fn new() -> Self {
        Self::with_console(StdConsole)
    }

    pub fn with_console(console: impl Console + 'static) -> Self {
        Self {
            stack: BindingStack::new(),
            keywords: Keywords::core(),
            console: Box::new(console),
            depth: 0,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    pub fn with_max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn stack(&self) -> &BindingStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut BindingStack {
        &mut self.stack
    }

    /* ===================== Public API ===================== */

    /// Run a top-level script in a fresh scope and return the value of each expression
    pub fn run(&mut self, script: &[Expr]) -> Result<Vec<Val>, EvalError> {
        self.run_with(script, |_| Ok(()))
    }

    /// Like `run`, but `init` executes inside the new scope before the first expression
    pub fn run_with<F>(&mut self, script: &[Expr], init: F) -> Result<Vec<Val>, EvalError>
    where
        F: FnOnce(&mut Self) -> Result<(), EvalError>,
    {
        match self.run_scope(script, init)? {
            Control::Value(Val::List(values)) => Ok(values),
            Control::Value(other) => Ok(vec![other]),
            Control::Return(value) => Err(EvalError::ReturnOutsideFunction { value }),
        }
    }

    /// Evaluate one expression
    ///
    /// `line` is the line context of the caller, used when the node carries none.
    pub fn evaluate(&mut self, expr: &Expr, line: Option<u32>) -> Result<Control, EvalError> {
        match expr {
            Expr::Lit(v) => Ok(Control::Value(v.clone())),
            Expr::Script(items) => self.run_scope(items, |_| Ok(())),
            Expr::Node(node) => self.dispatch(node, line),
        }
    }

    /// Resolve a keyword: the binding stack first, then the core keyword table
    pub fn find(&self, name: &str) -> Option<Val> {
        self.stack
            .lookup(name)
            .or_else(|| self.keywords.lookup(name))
            .cloned()
    }

    /// Invoke a callable value. Anything else evaluates to itself.
    pub fn call(&mut self, callee: &Val, args: Vec<Val>) -> Result<Control, EvalError> {
        match callee {
            Val::Builtin(builtin) => (builtin.func)(self, args),
            Val::Native(native) => {
                let func = Rc::clone(&native.func);
                (*func)(self, args)
            }
            Val::Func(func) => self.call_function(Rc::clone(func), args),
            other => Ok(Control::Value(other.clone())),
        }
    }

    /// Push a binding into the innermost open scope
    pub fn bind(&mut self, name: impl Into<String>, value: Val) {
        self.stack.push(Frame::new(name, value));
    }

    /// Install every entry of a plugin as a frame on the binding stack
    pub fn import(&mut self, plugin: Plugin) {
        tracing::info!(plugin = plugin.name(), entries = plugin.len(), "importing plugin");
        for (name, value) in plugin {
            self.bind(name, value);
        }
    }

    /// Write one line of program output
    pub fn print(&mut self, line: &str) {
        self.console.print(line);
    }

    /* ===================== Scopes ===================== */

    pub(crate) fn run_scope<F>(&mut self, script: &[Expr], init: F) -> Result<Control, EvalError>
    where
        F: FnOnce(&mut Self) -> Result<(), EvalError>,
    {
        let mark = self.stack.len();
        let outcome = init(self).and_then(|()| self.run_items(script));
        tracing::debug!(from = self.stack.len(), to = mark, "scope exit");
        self.stack.truncate(mark);
        outcome
    }

    fn run_items(&mut self, script: &[Expr]) -> Result<Control, EvalError> {
        let mut values = Vec::with_capacity(script.len());
        for (i, expr) in script.iter().enumerate() {
            match self.evaluate(expr, Some(i as u32 + 1))? {
                Control::Value(v) => values.push(v),
                ret @ Control::Return(_) => return Ok(ret),
            }
        }
        Ok(Control::Value(Val::List(values)))
    }

    /* ===================== Dispatch ===================== */

    fn dispatch(&mut self, node: &Node, line: Option<u32>) -> Result<Control, EvalError> {
        let line = node.line.or(line);

        let mut args = match self.evaluate(&node.arg, line)? {
            Control::Value(Val::List(items)) => items,
            Control::Value(v) => vec![v],
            ret @ Control::Return(_) => return Ok(ret),
        };
        if let Some(script) = &node.script {
            args.push(Val::Code(Rc::clone(script)));
        }

        tracing::debug!(keyword = %node.keyword, ?line, args = args.len(), "dispatch");

        match self.find(&node.keyword) {
            Some(callee) => self.call(&callee, args),
            None => {
                let diagnostic = Diagnostic {
                    keyword: node.keyword.clone(),
                    line,
                };
                tracing::warn!(keyword = %node.keyword, ?line, "unresolved keyword");
                self.console.report(&diagnostic);
                Ok(Control::Value(Val::Str(node.keyword.clone())))
            }
        }
    }

    /// Run a function body with its parameters bound in the body's scope
    ///
    /// A `Return` from anywhere inside the body becomes the call's value; falling off the
    /// end yields null.
    fn call_function(&mut self, func: Rc<Function>, args: Vec<Val>) -> Result<Control, EvalError> {
        if self.depth >= self.max_call_depth {
            return Err(EvalError::CallDepthExceeded {
                limit: self.max_call_depth,
            });
        }

        let params = func.params.clone();
        let bind_params = move |interp: &mut Self| {
            let mut args = args.into_iter();
            for param in params {
                interp.bind(param, args.next().unwrap_or(Val::Null));
            }
            Ok(())
        };

        self.depth += 1;
        let outcome = self.run_scope(func.body.as_items(), bind_params);
        self.depth -= 1;

        match outcome? {
            Control::Return(v) => Ok(Control::Value(v)),
            Control::Value(_) => Ok(Control::null()),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
