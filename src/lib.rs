//! Validate instruction timings recorded by the emulator against the
//! reference opcode table.
//!
//! The emulator writes one line per executed instruction (see [`record`]).
//! Every (opcode, cycles) pair in that log must appear in the opcode table
//! (see [`reference`]); [`check`] reports those that do not.

pub mod check;
pub mod opcode;
pub mod record;
pub mod reference;

pub use check::{check, Mismatch, Report};
pub use opcode::{OpcodeKey, PREFIX_MARKER};
pub use record::Recording;
pub use reference::Reference;
