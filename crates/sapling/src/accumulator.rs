//! Explicitly owned append-only accumulator

use crate::Value;

/// An ever-growing list of values owned by the caller.
///
/// ```
/// use sapling::{Accumulator, Value};
///
/// let mut acc = Accumulator::new();
/// acc.push(Value::Int(100));
/// assert_eq!(acc.push(Value::Int(200)), &[Value::Int(100), Value::Int(200)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    values: Vec<Value>,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` and return everything appended so far.
    pub fn push(&mut self, value: Value) -> &[Value] {
        self.values.push(value);
        &self.values
    }

    /// Everything appended so far
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of appended values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Take ownership of the accumulated values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

/// Free-function form of [`Accumulator::push`].
pub fn global_modifier(acc: &mut Accumulator, x: Value) -> &[Value] {
    acc.push(x)
}
