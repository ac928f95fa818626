//! Cross-crate invariants: the table lookups and the codec must agree
//! between the assembler and the disassembler.

use tiny32_assembler::{assemble, encode};
use tiny32_disassembler::{decode, disassemble, format};
use tiny32_isa::{Instruction, Opcode, Register};

#[test]
fn test_opcode_table_idempotence() {
    for op in Opcode::ALL {
        assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
        assert_eq!(Opcode::from_u8(op.to_u8()), Some(op));
    }
}

#[test]
fn test_register_table_idempotence() {
    for i in 0..32u8 {
        let reg = Register::from_index(i).unwrap();
        assert_eq!(Register::from_name(&reg.name()), Some(reg));
        assert_eq!(reg.index(), i);
    }
}

#[test]
fn test_encode_decode_roundtrip_all_forms() {
    let r = |i| Register::from_index(i).unwrap();
    let instructions = vec![
        Instruction::Mov { rd: r(1), rs: r(2) },
        Instruction::Add { rd: r(0), rs1: r(31), rs2: r(15) },
        Instruction::Mul { rd: r(7), rs1: r(8), rs2: r(9) },
        Instruction::Addi { rd: r(1), rs1: r(0), imm: 8191 },
        Instruction::Addi { rd: r(1), rs1: r(0), imm: -8192 },
        Instruction::Ld { rd: r(30), addr: -1 },
        Instruction::St { rs: r(30), addr: 4095 },
        Instruction::Bra { offset: 0 },
        Instruction::Bra { offset: -8_388_608 },
        Instruction::Bra { offset: 8_388_607 },
        Instruction::Exit,
    ];

    for instr in instructions {
        assert_eq!(decode(encode(&instr)), Some(instr), "roundtrip of {:?}", instr);
    }
}

#[test]
fn test_branch_offset_law_through_both_tools() {
    // branch at index c = 2, target at index t = 4: offset = t - c - 1
    let source = "\
ADDI r1, r0, 1
ADDI r2, r0, 2
BRA end
ADDI r3, r0, 3
end:
EXIT
";
    let program = assemble(source).unwrap();
    let bra = decode(program.code[2]).unwrap();
    assert_eq!(bra, Instruction::Bra { offset: 1 });
    // the disassembler must report the absolute target back
    assert_eq!(format(&bra, 2), "BRA 4");
}

#[test]
fn test_assembled_text_matches_formatter_output() {
    // canonical text (uppercase, r-names, no labels) survives a full
    // text -> binary -> text cycle unchanged
    let source = "MOV r1, r2\nADDI r3, r1, -20\nST r3, 0\nEXIT\n";
    let program = assemble(source).unwrap();
    assert_eq!(disassemble(&program), source);
}
