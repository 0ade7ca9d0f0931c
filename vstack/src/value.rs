use std::fmt;

use crate::{ExecutionResult, INTEGER_TABLE, OperationTable, STRING_TABLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::String => write!(f, "string"),
        }
    }
}

/// A dynamically typed stack value.
///
/// The variant alone decides which [`OperationTable`] handles the value.
/// Integers live inline, strings own their buffer and free it on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    String(String),
}

impl Value {
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    /// Takes ownership of an already allocated buffer.
    #[must_use]
    pub fn string(buffer: String) -> Self {
        Self::String(buffer)
    }

    /// Copies `s` into a fresh buffer owned by the value.
    #[must_use]
    pub fn string_from(s: &str) -> Self {
        Self::String(s.to_owned())
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.table().kind
    }

    #[must_use]
    pub fn table(&self) -> &'static OperationTable {
        match self {
            Self::Integer(_) => &INTEGER_TABLE,
            Self::String(_) => &STRING_TABLE,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<&i64> {
        match self {
            Self::Integer(i) => Some(i),
            Self::String(_) => None,
        }
    }

    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::String(s) => Some(s),
        }
    }

    /// `( self other -- self+other )`
    /// Consumes both operands, whatever the outcome.
    pub fn add(self, other: Value) -> ExecutionResult {
        log::trace!("dispatch add: {:?} {:?}", self, other);
        (self.table().add)(&self, &other)
    }

    /// `( self other -- self-other )`
    pub fn sub(self, other: Value) -> ExecutionResult {
        log::trace!("dispatch sub: {:?} {:?}", self, other);
        (self.table().sub)(&self, &other)
    }

    /// `( self -- integer )`
    pub fn to_int(self) -> ExecutionResult {
        log::trace!("dispatch to_int: {:?}", self);
        (self.table().to_int)(&self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::string_from(value)
    }
}
