//! Keys of the merged opcode space.
//!
//! The CPU has two decoding tables. Opcodes of the primary table are written
//! as they are (`0x20`), while opcodes reached through the `0xCB` prefix byte
//! are printed with the [`PREFIX_MARKER`] in front of their code (`pre0x20`).
//! Both the reference table and the recording are keyed this way, so they can
//! share one flat map.

use std::fmt;

/// Namespace marker of the prefixed table. The emulator writes it as a
/// separate token in front of the code.
pub const PREFIX_MARKER: &str = "pre";

/// The table is part of the key, so a primary code can never alias a
/// prefixed one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpcodeKey {
    Primary(String),
    Prefixed(String),
}

impl OpcodeKey {
    /// Key of an opcode in the primary table.
    pub fn primary(code: &str) -> Self {
        Self::Primary(code.to_string())
    }

    /// Key of an opcode in the prefixed table.
    pub fn prefixed(code: &str) -> Self {
        Self::Prefixed(code.to_string())
    }
}

impl fmt::Display for OpcodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpcodeKey::Primary(code) => f.write_str(code),
            OpcodeKey::Prefixed(code) => write!(f, "{PREFIX_MARKER}{code}"),
        }
    }
}
