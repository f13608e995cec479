//! Binding stack and keyword lookup
//!
//! Every binding lives in its own frame. Frames are only ever pushed on top or cut off
//! by `truncate`, so a scope is nothing more than a saved stack length.

use super::types::Val;

/// One name bound to one value
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub name: String,
    pub value: Val,
}

impl Frame {
    pub fn new(name: impl Into<String>, value: Val) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Name resolution shared by the core keyword table and the binding stack
pub trait Lookup {
    fn lookup(&self, name: &str) -> Option<&Val>;
}

/// Ordered sequence of frames, searched from the top down
#[derive(Debug, Default, Clone)]
pub struct BindingStack {
    frames: Vec<Frame>,
}

impl BindingStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Append a frame. Existing bindings of the same name are shadowed, not replaced.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Drop every frame at index `len` and above
    pub fn truncate(&mut self, len: usize) {
        self.frames.truncate(len);
    }

    /// Index of the newest frame binding `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.frames.iter().rposition(|frame| frame.name == name)
    }

    /// Newest frame binding `name`
    pub fn find(&self, name: &str) -> Option<&Frame> {
        self.frames.iter().rev().find(|frame| frame.name == name)
    }

    /// Mutable access to the newest frame binding `name`
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Frame> {
        self.frames.iter_mut().rev().find(|frame| frame.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }
}

impl Lookup for BindingStack {
    fn lookup(&self, name: &str) -> Option<&Val> {
        self.find(name).map(|frame| &frame.value)
    }
}
