use std::fmt;

use crate::Value;

/// Recoverable failures carried through an [`ExecutionResult`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeError {
    /// Kind mismatch, or the operation is not defined for the kind.
    UnsupportedOperation = 0,
    StackEmpty = 1,
    ParseToIntFailed = 2,
}

impl RuntimeError {
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOperation => write!(f, "unsupported operation"),
            Self::StackEmpty => write!(f, "stack is empty"),
            Self::ParseToIntFailed => {
                write!(f, "string could not be parsed as an integer")
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Outcome of every pop and dispatch: a value, an error, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Value(Value),
    Error(RuntimeError),
    Void,
}

impl ExecutionResult {
    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Collapses into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<Option<Value>, RuntimeError> {
        match self {
            Self::Value(value) => Ok(Some(value)),
            Self::Error(err) => Err(err),
            Self::Void => Ok(None),
        }
    }
}

impl From<Result<Value, RuntimeError>> for ExecutionResult {
    fn from(result: Result<Value, RuntimeError>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(err) => Self::Error(err),
        }
    }
}

impl From<RuntimeError> for ExecutionResult {
    fn from(err: RuntimeError) -> Self {
        Self::Error(err)
    }
}
