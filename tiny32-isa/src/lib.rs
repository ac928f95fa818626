//! # Tiny32 ISA
//!
//! A minimal fixed-width instruction set: 32-bit words, an 8-bit opcode in
//! the most significant byte, 32 general-purpose registers.
//!
//! ## Instruction Formats
//! - R-type: `[opcode:8][rd:5][rs1:5][rs2:5][unused:9]`
//! - I-type: `[opcode:8][rd:5][rs1:5][imm:14]` (14-bit signed immediate)
//! - J-type: `[opcode:8][offset:24]` (24-bit signed branch offset)
//!
//! This crate holds the pure parts shared by the assembler and the
//! disassembler: the opcode and register tables, the bit-level codec, and
//! the on-disk binary image (headerless little-endian words).

pub mod encoding;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

pub use encoding::{sign_extend, RawInstruction};
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::Program;
pub use register::{Register, NUM_REGISTERS};

/// Size of one encoded instruction in bytes
pub const WORD_BYTES: usize = 4;
