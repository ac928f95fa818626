//! # Tiny32 Disassembler
//!
//! Turns a packed binary instruction stream back into mnemonic text.
//!
//! Decoding is total: content never makes disassembly fail. Words whose
//! opcode byte has no rendering (NOP included) come out as the `UNK`
//! marker, and branch offsets are resolved to absolute instruction indices
//! (labels are not reconstructible from binary).
//!
//! ## Example
//!
//! ```rust
//! use tiny32_isa::Program;
//! use tiny32_disassembler::disassemble;
//!
//! let program = Program::new(vec![
//!     (3 << 24) | (1 << 19) | 5, // ADDI r1, r0, 5
//!     8 << 24,                   // EXIT
//! ]);
//! assert_eq!(disassemble(&program), "ADDI r1, r0, 5\nEXIT\n");
//! ```

pub mod decoder;
pub mod disassembler;
pub mod formatter;

pub use decoder::decode;
pub use disassembler::disassemble;
pub use formatter::{format, UNKNOWN};
