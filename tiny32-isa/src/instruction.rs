//! Tiny32 Instruction Set
//!
//! Typed view of the 8 encodable operations. NOP exists in the opcode table
//! but has no instruction form here: the assembler rejects it and the
//! disassembler treats opcode 0 as unknown.

use crate::opcode::Opcode;
use crate::register::Register;
use serde::{Deserialize, Serialize};

/// A decoded Tiny32 instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// MOV: rd = rs (R-type, rs2 = 0)
    Mov { rd: Register, rs: Register },

    /// ADD: rd = rs1 + rs2
    Add { rd: Register, rs1: Register, rs2: Register },

    /// ADDI: rd = rs1 + imm (14-bit signed)
    Addi { rd: Register, rs1: Register, imm: i32 },

    /// MUL: rd = rs1 * rs2
    Mul { rd: Register, rs1: Register, rs2: Register },

    /// LD: rd = mem[addr] (absolute immediate address, rs1 = 0)
    Ld { rd: Register, addr: i32 },

    /// ST: mem[addr] = rs (source register travels in the rd field)
    St { rs: Register, addr: i32 },

    /// BRA: pc = pc + 1 + offset (24-bit signed, relative to the next
    /// instruction; offset 0 falls through)
    Bra { offset: i32 },

    /// EXIT: stop execution (R-type, all fields 0)
    Exit,
}

impl Instruction {
    /// Opcode this instruction encodes to
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::Mov { .. } => Opcode::Mov,
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Addi { .. } => Opcode::Addi,
            Instruction::Mul { .. } => Opcode::Mul,
            Instruction::Ld { .. } => Opcode::Ld,
            Instruction::St { .. } => Opcode::St,
            Instruction::Bra { .. } => Opcode::Bra,
            Instruction::Exit => Opcode::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_mapping() {
        let r0 = Register::R0;
        assert_eq!(Instruction::Mov { rd: r0, rs: r0 }.opcode(), Opcode::Mov);
        assert_eq!(
            Instruction::Addi { rd: r0, rs1: r0, imm: 1 }.opcode(),
            Opcode::Addi
        );
        assert_eq!(Instruction::Bra { offset: -2 }.opcode(), Opcode::Bra);
        assert_eq!(Instruction::Exit.opcode(), Opcode::Exit);
    }
}
