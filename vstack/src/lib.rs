mod interpreter;
mod opcode;
mod primitives;
mod result;
mod settings;
mod stack;
mod value;

pub use interpreter::{ErrorChannel, Interpreter, LogChannel, process_token};
pub use opcode::{
    ARITY_MASK, Arity, BINARY_OP_SENTINEL, OpCode, UNARY_OP_SENTINEL,
};
pub use primitives::{
    BinaryPrimitive, INTEGER_TABLE, OperationTable, STRING_TABLE,
    UnaryPrimitive,
};
pub use result::{ExecutionResult, RuntimeError};
pub use settings::InterpreterSettings;
pub use stack::Stack;
pub use value::{Value, ValueKind};
