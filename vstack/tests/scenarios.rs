use vstack::{
    ExecutionResult, Interpreter, InterpreterSettings, OpCode, RuntimeError,
    Stack, Value, process_token,
};

fn interpreter() -> Interpreter<Vec<RuntimeError>> {
    Interpreter::with_channel(InterpreterSettings::new(), Vec::new())
}

#[test]
fn one_minus_two_plus_three() {
    let mut vm = interpreter();
    vm.push(Value::integer(1));
    vm.push(Value::integer(2));
    vm.push(Value::integer(3));
    vm.process(OpCode::ADD);
    assert_eq!(vm.stack().to_string(), "[1, 5]");
    vm.process(OpCode::SUB);

    assert!(vm.channel().is_empty());
    assert_eq!(vm.stack().len(), 1);
    assert_eq!(vm.pop(), ExecutionResult::Value(Value::integer(-4)));
}

#[test]
fn hello_world() {
    let mut vm = interpreter();
    vm.push(Value::string_from("Hello "));
    vm.push(Value::string_from("World"));
    vm.process(OpCode::ADD);
    assert_eq!(
        vm.pop(),
        ExecutionResult::Value(Value::string_from("Hello World"))
    );
}

#[test]
fn string_to_int() {
    let mut vm = interpreter();
    vm.push(Value::string_from("2"));
    vm.process(OpCode::TO_INT);
    assert_eq!(vm.pop(), ExecutionResult::Value(Value::integer(2)));
}

#[test]
fn mixed_kinds_are_unsupported_in_both_orders() {
    let pairs = [
        (Value::integer(1), Value::string_from("1")),
        (Value::string_from("1"), Value::integer(1)),
    ];
    for (lhs, rhs) in pairs {
        for code in [OpCode::ADD, OpCode::SUB] {
            let mut stack = Stack::new();
            stack.push(lhs.clone());
            stack.push(rhs.clone());
            let mut errors: Vec<RuntimeError> = Vec::new();
            process_token(&mut stack, code, &mut errors);
            assert_eq!(errors, [RuntimeError::UnsupportedOperation]);
            assert!(stack.is_empty());
        }
    }
}

#[test]
fn string_sub_is_unsupported() {
    let mut vm = interpreter();
    vm.push(Value::string_from("abc"));
    vm.push(Value::string_from("b"));
    vm.process(OpCode::SUB);
    assert_eq!(vm.channel(), &[RuntimeError::UnsupportedOperation]);
    assert!(vm.stack().is_empty());
}

#[test]
fn to_int_rejects_partial_and_empty() {
    for input in ["12a", ""] {
        let mut vm = interpreter();
        vm.push(Value::string_from(input));
        vm.process(OpCode::TO_INT);
        assert_eq!(vm.channel(), &[RuntimeError::ParseToIntFailed]);
    }
}

#[test]
fn integer_to_int_is_identity() {
    for x in [0, -1, 123, i64::MIN, i64::MAX] {
        let mut vm = interpreter();
        vm.push(Value::integer(x));
        vm.process(OpCode::TO_INT);
        assert_eq!(vm.pop(), ExecutionResult::Value(Value::integer(x)));
    }
}

#[test]
fn short_stack_binary_reports_stack_empty() {
    let mut vm = interpreter();
    vm.process(OpCode::ADD);
    vm.push(Value::integer(9));
    vm.process(OpCode::SUB);

    assert_eq!(
        vm.channel(),
        &[RuntimeError::StackEmpty, RuntimeError::StackEmpty]
    );
    assert!(vm.stack().is_empty());
}

#[test]
fn errors_do_not_halt_later_tokens() {
    let mut vm = interpreter();
    vm.push(Value::integer(1));
    vm.push(Value::integer(2));
    vm.push(Value::string_from("x"));
    vm.process(OpCode::SUB);
    vm.push(Value::integer(10));
    vm.process(OpCode::ADD);

    assert_eq!(vm.channel(), &[RuntimeError::UnsupportedOperation]);
    assert_eq!(vm.stack().to_string(), "[11]");
}

#[test]
fn dropping_a_populated_stack() {
    let mut stack = Stack::new();
    for i in 0..100 {
        stack.push(Value::integer(i));
        stack.push(Value::string(format!("value {i}")));
    }
    assert_eq!(stack.len(), 200);
    drop(stack);
}
