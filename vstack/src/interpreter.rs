use crate::{
    Arity, ExecutionResult, InterpreterSettings, OpCode, RuntimeError, Stack,
    Value,
};

/// Where failed tokens end up. Reporting never stops execution.
pub trait ErrorChannel {
    fn report(&mut self, code: OpCode, error: RuntimeError);
}

/// Reports through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogChannel;

impl ErrorChannel for LogChannel {
    fn report(&mut self, code: OpCode, error: RuntimeError) {
        log::error!("{code}: {error} (code {})", error.code());
    }
}

impl ErrorChannel for Vec<RuntimeError> {
    fn report(&mut self, _code: OpCode, error: RuntimeError) {
        self.push(error);
    }
}

fn execute_binary(code: OpCode, lhs: Value, rhs: Value) -> ExecutionResult {
    match code {
        OpCode::ADD => lhs.add(rhs),
        OpCode::SUB => lhs.sub(rhs),
        _ => panic!("not a binary op: {code}"),
    }
}

fn execute_unary(code: OpCode, value: Value) -> ExecutionResult {
    match code {
        OpCode::TO_INT => value.to_int(),
        _ => panic!("not a unary op: {code}"),
    }
}

/// Runs one token against `stack`.
///
/// Binary tokens always pop twice, right operand first. A failed right pop
/// wins over a failed left pop. Operands are consumed by the dispatch, so a
/// failing operation still releases them. A resulting value is pushed back,
/// an error goes to `channel` and leaves the stack as the pops left it.
///
/// # Panics
/// If `code` has an unknown arity or names no operation within its arity.
pub fn process_token<C: ErrorChannel + ?Sized>(
    stack: &mut Stack,
    code: OpCode,
    channel: &mut C,
) {
    log::debug!("process {code}");
    let result = match code.arity() {
        Some(Arity::Binary) => {
            let rhs = stack.pop();
            let lhs = stack.pop();
            match (rhs, lhs) {
                (ExecutionResult::Value(rhs), ExecutionResult::Value(lhs)) => {
                    execute_binary(code, lhs, rhs)
                }
                (ExecutionResult::Value(_), failure) => failure,
                (failure, _) => failure,
            }
        }
        Some(Arity::Unary) => match stack.pop() {
            ExecutionResult::Value(value) => execute_unary(code, value),
            failure => failure,
        },
        None => panic!("unrecognised operation arity: {code}"),
    };

    match result {
        ExecutionResult::Value(value) => stack.push(value),
        ExecutionResult::Error(error) => channel.report(code, error),
        ExecutionResult::Void => {}
    }
}

/// A stack bundled with its error channel and settings.
#[derive(Debug)]
pub struct Interpreter<C: ErrorChannel = LogChannel> {
    stack: Stack,
    channel: C,
    settings: InterpreterSettings,
}

impl Interpreter {
    #[must_use]
    pub fn new(settings: InterpreterSettings) -> Self {
        Self::with_channel(settings, LogChannel)
    }
}

impl<C: ErrorChannel> Interpreter<C> {
    pub fn with_channel(settings: InterpreterSettings, channel: C) -> Self {
        Self {
            stack: Stack::new(),
            channel,
            settings,
        }
    }

    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
        self.trace();
    }

    pub fn pop(&mut self) -> ExecutionResult {
        let result = self.stack.pop();
        self.trace();
        result
    }

    pub fn process(&mut self, code: OpCode) {
        process_token(&mut self.stack, code, &mut self.channel);
        self.trace();
    }

    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    #[must_use]
    pub fn channel(&self) -> &C {
        &self.channel
    }

    #[must_use]
    pub fn settings(&self) -> &InterpreterSettings {
        &self.settings
    }

    #[must_use]
    pub fn into_stack(self) -> Stack {
        self.stack
    }

    fn trace(&self) {
        if self.settings.trace_stack {
            log::debug!("stack: {}", self.stack);
        }
    }
}
