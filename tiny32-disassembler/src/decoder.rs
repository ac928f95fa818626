//! Instruction decoder
//!
//! Lifts a packed word into a typed [`Instruction`], applying the sign
//! extension width the opcode calls for: 14 bits for I-type immediates,
//! 24 bits for branch offsets. Opcode bytes with no instruction form
//! (including NOP) decode to `None`; the caller renders those as unknown.

use tiny32_isa::encoding::{sign_extend, RawInstruction, IMM_BITS, IMM_MASK, OFFSET_BITS};
use tiny32_isa::{Instruction, Opcode, Register};

/// Decode a 32-bit word, `None` if the opcode byte has no instruction form
pub fn decode(word: u32) -> Option<Instruction> {
    let raw = RawInstruction::decode(word);

    // 5-bit fields cannot hold an out-of-range index
    let rd = Register::from_index(raw.rd)?;
    let rs1 = Register::from_index(raw.rs1)?;
    let rs2 = Register::from_index(raw.rs2)?;

    let imm14 = sign_extend(raw.imm & IMM_MASK, IMM_BITS);
    let offset24 = sign_extend(raw.imm, OFFSET_BITS);

    match Opcode::from_u8(raw.opcode)? {
        Opcode::Nop => None,
        Opcode::Mov => Some(Instruction::Mov { rd, rs: rs1 }),
        Opcode::Add => Some(Instruction::Add { rd, rs1, rs2 }),
        Opcode::Addi => Some(Instruction::Addi { rd, rs1, imm: imm14 }),
        Opcode::Mul => Some(Instruction::Mul { rd, rs1, rs2 }),
        Opcode::Ld => Some(Instruction::Ld { rd, addr: imm14 }),
        Opcode::St => Some(Instruction::St { rs: rd, addr: imm14 }),
        Opcode::Bra => Some(Instruction::Bra { offset: offset24 }),
        Opcode::Exit => Some(Instruction::Exit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny32_isa::encoding::{encode_i, encode_j, encode_r};

    fn reg(index: u8) -> Register {
        Register::from_index(index).unwrap()
    }

    #[test]
    fn test_decode_mov() {
        let word = encode_r(1, 3, 4, 0);
        assert_eq!(decode(word), Some(Instruction::Mov { rd: reg(3), rs: reg(4) }));
    }

    #[test]
    fn test_decode_addi_sign_extends_14_bits() {
        let word = encode_i(3, 1, 0, -1);
        assert_eq!(
            decode(word),
            Some(Instruction::Addi { rd: reg(1), rs1: reg(0), imm: -1 })
        );
    }

    #[test]
    fn test_decode_st_register_in_rd_field() {
        let word = encode_i(6, 9, 0, 12);
        assert_eq!(decode(word), Some(Instruction::St { rs: reg(9), addr: 12 }));
    }

    #[test]
    fn test_decode_bra_sign_extends_24_bits() {
        let word = encode_j(7, -2);
        assert_eq!(decode(word), Some(Instruction::Bra { offset: -2 }));
    }

    #[test]
    fn test_decode_exit() {
        assert_eq!(decode(8 << 24), Some(Instruction::Exit));
    }

    #[test]
    fn test_decode_nop_and_unknown_opcodes() {
        assert_eq!(decode(0), None); // NOP has no instruction form
        assert_eq!(decode(9 << 24), None);
        assert_eq!(decode(0xFF00_0000), None);
    }
}
