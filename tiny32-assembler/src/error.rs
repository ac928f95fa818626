//! Assembler errors
//!
//! Every assembly-time variant carries the 1-based source line number; the
//! first error aborts the whole run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("line {line}: syntax error: {message}")]
    SyntaxError { line: usize, message: String },

    #[error("line {line}: unknown opcode: {mnemonic}")]
    UnknownOpcode { line: usize, mnemonic: String },

    #[error("line {line}: {mnemonic} is not supported by the encoder")]
    UnsupportedOpcode { line: usize, mnemonic: String },

    #[error("line {line}: {mnemonic} expects {expected} operand(s), got {found}")]
    ArityError {
        line: usize,
        mnemonic: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid register: {operand}")]
    InvalidRegister { line: usize, operand: String },

    #[error("line {line}: invalid immediate: {operand}")]
    InvalidImmediate { line: usize, operand: String },

    #[error("line {line}: immediate {value} out of range {min}..{max}")]
    ImmediateOutOfRange {
        line: usize,
        value: i64,
        min: i32,
        max: i32,
    },

    #[error("line {line}: unknown label: {label}")]
    UnknownLabel { line: usize, label: String },

    #[error("line {line}: branch offset {offset} out of 24-bit signed range")]
    BranchOutOfRange { line: usize, offset: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
