//! Tiny32 Assembler
//!
//! Translates Tiny32 assembly text into a packed binary instruction stream
//! in two passes: label collection, then relocation-aware emission.
//!
//! ## Example
//!
//! ```rust
//! use tiny32_assembler::assemble;
//!
//! let source = r#"
//! start:
//!     ADDI r1, r0, 5
//!     BRA start
//!     EXIT
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.len(), 3);
//! ```

pub mod assembler;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod parser;

pub use assembler::{assemble, assemble_file};
pub use encoder::encode;
pub use error::{AssemblerError, Result};
pub use parser::{parse_instruction, LabelTable};
