use crate::{ExecutionResult, RuntimeError, Value};

type Integer2Op = fn(a: i64, b: i64) -> i64;

// overflow wraps, there is no promotion to a bigger representation
fn integer_binop(lhs: &Value, rhs: &Value, op: Integer2Op) -> ExecutionResult {
    let (Some(&a), Some(&b)) = (lhs.as_integer(), rhs.as_integer()) else {
        return ExecutionResult::Error(RuntimeError::UnsupportedOperation);
    };
    ExecutionResult::Value(Value::integer(op(a, b)))
}

pub fn integer_add(lhs: &Value, rhs: &Value) -> ExecutionResult {
    integer_binop(lhs, rhs, i64::wrapping_add)
}

pub fn integer_sub(lhs: &Value, rhs: &Value) -> ExecutionResult {
    integer_binop(lhs, rhs, i64::wrapping_sub)
}

pub fn integer_to_int(receiver: &Value) -> ExecutionResult {
    match receiver.as_integer() {
        Some(&i) => ExecutionResult::Value(Value::integer(i)),
        None => ExecutionResult::Error(RuntimeError::UnsupportedOperation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> Value {
        Value::integer(i)
    }

    #[test]
    fn add_and_sub() {
        let samples = [0, 1, -1, 42, -1000, i64::MAX / 2, i64::MIN / 2];
        for a in samples {
            for b in samples {
                assert_eq!(
                    integer_add(&int(a), &int(b)),
                    ExecutionResult::Value(int(a + b))
                );
                assert_eq!(
                    integer_sub(&int(a), &int(b)),
                    ExecutionResult::Value(int(a - b))
                );
            }
        }
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(
            integer_add(&int(i64::MAX), &int(1)),
            ExecutionResult::Value(int(i64::MIN))
        );
        assert_eq!(
            integer_sub(&int(i64::MIN), &int(1)),
            ExecutionResult::Value(int(i64::MAX))
        );
    }

    #[test]
    fn string_argument_is_unsupported() {
        let s = Value::string_from("1");
        assert_eq!(
            integer_add(&int(1), &s),
            ExecutionResult::Error(RuntimeError::UnsupportedOperation)
        );
        assert_eq!(
            integer_sub(&int(1), &s),
            ExecutionResult::Error(RuntimeError::UnsupportedOperation)
        );
    }

    #[test]
    fn to_int_is_identity() {
        for x in [0, 7, -7, i64::MAX, i64::MIN] {
            assert_eq!(integer_to_int(&int(x)), ExecutionResult::Value(int(x)));
        }
    }
}
