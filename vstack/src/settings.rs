/// Knobs for an [`crate::Interpreter`].
#[derive(Debug, Clone, Default)]
pub struct InterpreterSettings {
    /// Log the whole stack at `debug` level after every mutation.
    pub trace_stack: bool,
}

impl InterpreterSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_trace_stack(mut self, trace_stack: bool) -> Self {
        self.trace_stack = trace_stack;
        self
    }
}
