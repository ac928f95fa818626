//! Instruction formatting to assembly text
//!
//! One mnemonic line per instruction. Branches render an absolute numeric
//! target (labels are not reconstructible from binary), so formatting needs
//! the instruction's pc.

use tiny32_isa::Instruction;

/// Marker for words whose opcode byte has no rendering
pub const UNKNOWN: &str = "UNK";

/// Format an instruction at instruction index `pc`
pub fn format(instr: &Instruction, pc: usize) -> String {
    match *instr {
        Instruction::Mov { rd, rs } => format!("MOV {}, {}", rd, rs),
        Instruction::Add { rd, rs1, rs2 } => format!("ADD {}, {}, {}", rd, rs1, rs2),
        Instruction::Mul { rd, rs1, rs2 } => format!("MUL {}, {}, {}", rd, rs1, rs2),
        Instruction::Addi { rd, rs1, imm } => format!("ADDI {}, {}, {}", rd, rs1, imm),
        Instruction::Ld { rd, addr } => format!("LD {}, {}", rd, addr),
        Instruction::St { rs, addr } => format!("ST {}, {}", rs, addr),
        Instruction::Bra { offset } => {
            let target = pc as i64 + 1 + offset as i64;
            format!("BRA {}", target)
        }
        Instruction::Exit => "EXIT".to_string(),
    }
}
