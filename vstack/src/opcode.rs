use core::fmt;

/// High nibble of an opcode, selects the arity class.
pub const ARITY_MASK: u16 = 0xF000;
pub const UNARY_OP_SENTINEL: u16 = 0x8000;
pub const BINARY_OP_SENTINEL: u16 = 0x9000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

/// A raw operation code as handed in by the caller.
///
/// The high nibble is the arity sentinel, the remaining bits pick the
/// operation within that arity. Codes outside the known set are
/// representable on purpose: feeding one to the interpreter is a caller bug
/// and aborts instead of producing a [`crate::RuntimeError`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpCode(u16);

impl OpCode {
    pub const TO_INT: OpCode = OpCode(UNARY_OP_SENTINEL);
    pub const ADD: OpCode = OpCode(BINARY_OP_SENTINEL);
    pub const SUB: OpCode = OpCode(BINARY_OP_SENTINEL + 1);

    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn arity(self) -> Option<Arity> {
        match self.0 & ARITY_MASK {
            UNARY_OP_SENTINEL => Some(Arity::Unary),
            BINARY_OP_SENTINEL => Some(Arity::Binary),
            _ => None,
        }
    }

    fn mnemonic(self) -> Option<&'static str> {
        match self {
            Self::TO_INT => Some("TO_INT"),
            Self::ADD => Some("ADD"),
            Self::SUB => Some("SUB"),
            _ => None,
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "0x{:04X}", self.0),
        }
    }
}

impl From<u16> for OpCode {
    fn from(raw: u16) -> Self {
        Self::from_raw(raw)
    }
}
