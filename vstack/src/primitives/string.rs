use crate::{ExecutionResult, RuntimeError, Value};

/// Concatenates into a new buffer, leaving both inputs as they were.
pub fn string_add(lhs: &Value, rhs: &Value) -> ExecutionResult {
    let (Some(a), Some(b)) = (lhs.as_string(), rhs.as_string()) else {
        return ExecutionResult::Error(RuntimeError::UnsupportedOperation);
    };
    let mut buffer = String::with_capacity(a.len() + b.len());
    buffer.push_str(a);
    buffer.push_str(b);
    ExecutionResult::Value(Value::string(buffer))
}

pub fn string_sub(_lhs: &Value, _rhs: &Value) -> ExecutionResult {
    ExecutionResult::Error(RuntimeError::UnsupportedOperation)
}

/// The whole buffer must be a base-10 integer, an optional sign included.
/// Partial parses and the empty string are rejected.
pub fn string_to_int(receiver: &Value) -> ExecutionResult {
    let Some(s) = receiver.as_string() else {
        return ExecutionResult::Error(RuntimeError::UnsupportedOperation);
    };
    match s.parse::<i64>() {
        Ok(i) => ExecutionResult::Value(Value::integer(i)),
        Err(_) => ExecutionResult::Error(RuntimeError::ParseToIntFailed),
    }
}
