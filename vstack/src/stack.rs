use std::{fmt, io};

use crate::{ExecutionResult, RuntimeError, Value};

/// Value stack, mutated only at the top.
///
/// Capacity starts at zero and doubles whenever a push finds the stack
/// full (0, 1, 2, 4, ...). It never shrinks.
#[derive(Debug, Default)]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Pushes a value onto the stack
    pub fn push(&mut self, value: Value) {
        let capacity = self.values.capacity();
        if self.values.len() == capacity {
            self.values.reserve_exact(capacity.max(1));
        }
        self.values.push(value);
    }

    /// Pops the top value, handing ownership to the caller
    pub fn pop(&mut self) -> ExecutionResult {
        match self.values.pop() {
            Some(value) => ExecutionResult::Value(value),
            None => ExecutionResult::Error(RuntimeError::StackEmpty),
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Value> {
        self.values.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Iterates bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Writes the stack as `[a, b, c]` followed by a newline.
    pub fn print(&self, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl Drop for Stack {
    fn drop(&mut self) {
        log::trace!("releasing {} remaining stack values", self.values.len());
    }
}
