//! # Tiny32 Opcode Definitions
//!
//! Opcodes occupy the most significant byte of an instruction word. The
//! mnemonic table is fixed at 9 entries; lookups are case-sensitive exact
//! matches (the assembler uppercases mnemonics before looking them up).
//!
//! NOP sits in the table but has no encodable instruction form: the
//! assembler rejects it and the disassembler renders opcode 0 as unknown.

use serde::{Deserialize, Serialize};

/// Instruction opcode (8 bits, values 0x00-0x08)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// NOP: reserved, never emitted
    Nop = 0,
    /// MOV: rd = rs1
    Mov = 1,
    /// ADD: rd = rs1 + rs2
    Add = 2,
    /// ADDI: rd = rs1 + imm
    Addi = 3,
    /// MUL: rd = rs1 * rs2
    Mul = 4,
    /// LD: rd = mem[imm]
    Ld = 5,
    /// ST: mem[imm] = rd field (source register)
    St = 6,
    /// BRA: pc = pc + 1 + offset
    Bra = 7,
    /// EXIT: stop execution
    Exit = 8,
}

impl Opcode {
    /// Number of entries in the mnemonic table
    pub const COUNT: usize = 9;

    /// All valid opcodes, in encoding order
    pub const ALL: [Opcode; Self::COUNT] = [
        Opcode::Nop,
        Opcode::Mov,
        Opcode::Add,
        Opcode::Addi,
        Opcode::Mul,
        Opcode::Ld,
        Opcode::St,
        Opcode::Bra,
        Opcode::Exit,
    ];

    /// Try to convert from a raw opcode byte
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Opcode::Nop),
            1 => Some(Opcode::Mov),
            2 => Some(Opcode::Add),
            3 => Some(Opcode::Addi),
            4 => Some(Opcode::Mul),
            5 => Some(Opcode::Ld),
            6 => Some(Opcode::St),
            7 => Some(Opcode::Bra),
            8 => Some(Opcode::Exit),
            _ => None,
        }
    }

    /// Convert to the raw opcode byte
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Mnemonic for this opcode
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::Mov => "MOV",
            Opcode::Add => "ADD",
            Opcode::Addi => "ADDI",
            Opcode::Mul => "MUL",
            Opcode::Ld => "LD",
            Opcode::St => "ST",
            Opcode::Bra => "BRA",
            Opcode::Exit => "EXIT",
        }
    }

    /// Look up an opcode by mnemonic (case-sensitive exact match)
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        match name {
            "NOP" => Some(Opcode::Nop),
            "MOV" => Some(Opcode::Mov),
            "ADD" => Some(Opcode::Add),
            "ADDI" => Some(Opcode::Addi),
            "MUL" => Some(Opcode::Mul),
            "LD" => Some(Opcode::Ld),
            "ST" => Some(Opcode::St),
            "BRA" => Some(Opcode::Bra),
            "EXIT" => Some(Opcode::Exit),
            _ => None,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values() {
        assert_eq!(Opcode::Nop.to_u8(), 0);
        assert_eq!(Opcode::Mov.to_u8(), 1);
        assert_eq!(Opcode::Add.to_u8(), 2);
        assert_eq!(Opcode::Addi.to_u8(), 3);
        assert_eq!(Opcode::Mul.to_u8(), 4);
        assert_eq!(Opcode::Ld.to_u8(), 5);
        assert_eq!(Opcode::St.to_u8(), 6);
        assert_eq!(Opcode::Bra.to_u8(), 7);
        assert_eq!(Opcode::Exit.to_u8(), 8);
    }

    #[test]
    fn test_opcode_from_u8() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_u8(op.to_u8()), Some(op));
        }
        assert_eq!(Opcode::from_u8(9), None);
        assert_eq!(Opcode::from_u8(0xFF), None);
    }

    #[test]
    fn test_mnemonic_table_roundtrip() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
        }
    }

    #[test]
    fn test_from_mnemonic_is_case_sensitive() {
        assert_eq!(Opcode::from_mnemonic("add"), None);
        assert_eq!(Opcode::from_mnemonic("Add"), None);
        assert_eq!(Opcode::from_mnemonic("ADD"), Some(Opcode::Add));
    }

    #[test]
    fn test_from_mnemonic_unknown() {
        assert_eq!(Opcode::from_mnemonic("FOO"), None);
        assert_eq!(Opcode::from_mnemonic(""), None);
    }
}
