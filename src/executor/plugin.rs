//! Plugins: named native capabilities installed onto the binding stack
//!
//! Entries keep their insertion order, which is also the order `Interpreter::import`
//! pushes them. A later entry with the same name therefore shadows an earlier one.

use super::errors::EvalError;
use super::types::{Control, Native, Val};
use super::Interpreter;

#[derive(Clone, Default)]
pub struct Plugin {
    name: String,
    entries: Vec<(String, Val)>,
}

impl Plugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Add a native callable
    pub fn native<F>(mut self, name: &str, func: F) -> Self
    where
        F: Fn(&mut Interpreter, Vec<Val>) -> Result<Control, EvalError> + 'static,
    {
        self.entries
            .push((name.to_string(), Val::Native(Native::new(name, func))));
        self
    }

    /// Add a plain value
    pub fn value(mut self, name: &str, value: Val) -> Self {
        self.entries.push((name.to_string(), value));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Plugin {
    type Item = (String, Val);
    type IntoIter = std::vec::IntoIter<(String, Val)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
