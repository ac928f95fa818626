//! Instruction encoding
//!
//! Maps a parsed [`Instruction`] onto its packed 32-bit word. All range
//! validation has already happened in the parser; the codec truncates.

use tiny32_isa::encoding::{encode_i, encode_j, encode_r};
use tiny32_isa::{Instruction, Opcode};

/// Encode an instruction to its 32-bit word
pub fn encode(instr: &Instruction) -> u32 {
    let opcode = instr.opcode().to_u8();
    match *instr {
        Instruction::Mov { rd, rs } => encode_r(opcode, rd.index(), rs.index(), 0),
        Instruction::Add { rd, rs1, rs2 } | Instruction::Mul { rd, rs1, rs2 } => {
            encode_r(opcode, rd.index(), rs1.index(), rs2.index())
        }
        Instruction::Addi { rd, rs1, imm } => encode_i(opcode, rd.index(), rs1.index(), imm),
        Instruction::Ld { rd, addr } => encode_i(opcode, rd.index(), 0, addr),
        Instruction::St { rs, addr } => encode_i(opcode, rs.index(), 0, addr),
        Instruction::Bra { offset } => encode_j(opcode, offset),
        Instruction::Exit => encode_r(opcode, 0, 0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny32_isa::encoding::{RawInstruction, IMM_MASK};
    use tiny32_isa::Register;

    fn reg(index: u8) -> Register {
        Register::from_index(index).unwrap()
    }

    #[test]
    fn test_encode_mov_zeroes_rs2() {
        let word = encode(&Instruction::Mov { rd: reg(1), rs: reg(2) });
        let raw = RawInstruction::decode(word);
        assert_eq!(raw.opcode, Opcode::Mov.to_u8());
        assert_eq!(raw.rd, 1);
        assert_eq!(raw.rs1, 2);
        assert_eq!(raw.rs2, 0);
    }

    #[test]
    fn test_encode_addi() {
        let word = encode(&Instruction::Addi { rd: reg(1), rs1: reg(0), imm: 5 });
        assert_eq!(word, (3 << 24) | (1 << 19) | 5);
    }

    #[test]
    fn test_encode_ld_st_zero_rs1() {
        let ld = encode(&Instruction::Ld { rd: reg(4), addr: 100 });
        let st = encode(&Instruction::St { rs: reg(4), addr: 100 });
        assert_eq!(RawInstruction::decode(ld).rs1, 0);
        assert_eq!(RawInstruction::decode(st).rs1, 0);
        // LD and ST carry their register in the same field
        assert_eq!(RawInstruction::decode(ld).rd, 4);
        assert_eq!(RawInstruction::decode(st).rd, 4);
        assert_eq!(RawInstruction::decode(st).imm & IMM_MASK, 100);
    }

    #[test]
    fn test_encode_bra_masks_offset() {
        let word = encode(&Instruction::Bra { offset: -2 });
        assert_eq!(word, (7 << 24) | 0xFF_FFFE);
    }

    #[test]
    fn test_encode_exit_all_zero_fields() {
        assert_eq!(encode(&Instruction::Exit), 8 << 24);
    }
}
