//! Main disassembler logic
//!
//! Disassembly is total over content: words with an unrenderable opcode
//! byte degrade to the [`UNKNOWN`] marker instead of failing the run.

use tiny32_isa::Program;

use crate::decoder::decode;
use crate::formatter::{format, UNKNOWN};

/// Disassemble a program into assembly text, one line per word
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();
    for (pc, &word) in program.code.iter().enumerate() {
        match decode(word) {
            Some(instr) => output.push_str(&format(&instr, pc)),
            None => output.push_str(UNKNOWN),
        }
        output.push('\n');
    }
    output
}
