use crate::{ExecutionResult, Value, ValueKind};

mod integer;
mod string;

/// `lhs` is the receiver, `rhs` the argument. Neither is consumed here,
/// the caller releases both once the primitive returns.
pub type BinaryPrimitive = fn(lhs: &Value, rhs: &Value) -> ExecutionResult;

pub type UnaryPrimitive = fn(receiver: &Value) -> ExecutionResult;

/// The per-kind set of primitives a value dispatches through.
#[derive(Debug)]
pub struct OperationTable {
    pub add: BinaryPrimitive,
    pub sub: BinaryPrimitive,
    pub to_int: UnaryPrimitive,
    pub kind: ValueKind,
}

impl OperationTable {
    pub const fn new(
        add: BinaryPrimitive,
        sub: BinaryPrimitive,
        to_int: UnaryPrimitive,
        kind: ValueKind,
    ) -> Self {
        Self {
            add,
            sub,
            to_int,
            kind,
        }
    }
}

pub static INTEGER_TABLE: OperationTable = OperationTable::new(
    integer::integer_add,
    integer::integer_sub,
    integer::integer_to_int,
    ValueKind::Integer,
);

pub static STRING_TABLE: OperationTable = OperationTable::new(
    string::string_add,
    string::string_sub,
    string::string_to_int,
    ValueKind::String,
);
