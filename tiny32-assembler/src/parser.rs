//! Assembly parser
//!
//! Parses one instruction line into a typed [`Instruction`], enforcing the
//! per-opcode arity, operand roles, and immediate ranges. Branch targets are
//! resolved here against the pass-1 label table, so parsing an instruction
//! needs the table and the instruction's own pc.

use std::collections::HashMap;

use tiny32_isa::encoding::{IMM_MAX, IMM_MIN, OFFSET_MAX, OFFSET_MIN};
use tiny32_isa::{Instruction, Opcode, Register};

use crate::error::{AssemblerError, Result};
use crate::lexer::{tokenize, Token};

/// Label table built by pass 1: name -> instruction index.
/// Duplicate definitions keep the last-written value.
pub type LabelTable = HashMap<String, i32>;

/// Parse a single instruction line.
///
/// `line` is the 1-based source line number used in errors; `pc` is the
/// 0-based index this instruction will occupy.
pub fn parse_instruction(
    text: &str,
    line: usize,
    labels: &LabelTable,
    pc: i32,
) -> Result<Instruction> {
    let text = text.trim();
    let (mnemonic, rest) = match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest),
        None => (text, ""),
    };

    // Mnemonics match case-insensitively; the table itself is exact-match.
    let opcode = Opcode::from_mnemonic(&mnemonic.to_uppercase()).ok_or_else(|| {
        AssemblerError::UnknownOpcode {
            line,
            mnemonic: mnemonic.to_string(),
        }
    })?;

    if opcode == Opcode::Bra {
        return parse_branch(rest, mnemonic, line, labels, pc);
    }

    let tokens = tokenize(rest).ok_or_else(|| AssemblerError::SyntaxError {
        line,
        message: format!("unrecognized input: {text}"),
    })?;
    let operands = split_operands(&tokens);

    match opcode {
        Opcode::Nop => Err(AssemblerError::UnsupportedOpcode {
            line,
            mnemonic: mnemonic.to_string(),
        }),
        Opcode::Mov => {
            expect_arity(&operands, 2, line, mnemonic)?;
            let rd = register_operand(&operands[0], line)?;
            let rs = register_operand(&operands[1], line)?;
            Ok(Instruction::Mov { rd, rs })
        }
        Opcode::Add | Opcode::Mul => {
            expect_arity(&operands, 3, line, mnemonic)?;
            let rd = register_operand(&operands[0], line)?;
            let rs1 = register_operand(&operands[1], line)?;
            // The third operand is tried as an integer literal first; a
            // literal re-encodes as ADDI, for MUL as well (compatibility
            // quirk: there is no MULI form, the immediate is still added).
            match integer_literal(&operands[2]) {
                Some(value) => {
                    let imm = check_imm_range(value, line)?;
                    Ok(Instruction::Addi { rd, rs1, imm })
                }
                None => {
                    let rs2 = register_operand(&operands[2], line)?;
                    match opcode {
                        Opcode::Add => Ok(Instruction::Add { rd, rs1, rs2 }),
                        _ => Ok(Instruction::Mul { rd, rs1, rs2 }),
                    }
                }
            }
        }
        Opcode::Addi => {
            expect_arity(&operands, 3, line, mnemonic)?;
            let rd = register_operand(&operands[0], line)?;
            let rs1 = register_operand(&operands[1], line)?;
            let value = immediate_operand(&operands[2], line)?;
            let imm = check_imm_range(value, line)?;
            Ok(Instruction::Addi { rd, rs1, imm })
        }
        Opcode::Ld => {
            expect_arity(&operands, 2, line, mnemonic)?;
            let rd = register_operand(&operands[0], line)?;
            let value = immediate_operand(&operands[1], line)?;
            let addr = check_imm_range(value, line)?;
            Ok(Instruction::Ld { rd, addr })
        }
        Opcode::St => {
            expect_arity(&operands, 2, line, mnemonic)?;
            let rs = register_operand(&operands[0], line)?;
            let value = immediate_operand(&operands[1], line)?;
            let addr = check_imm_range(value, line)?;
            Ok(Instruction::St { rs, addr })
        }
        // handled before tokenization
        Opcode::Bra => unreachable!(),
        Opcode::Exit => {
            expect_arity(&operands, 0, line, mnemonic)?;
            Ok(Instruction::Exit)
        }
    }
}

/// Parse a branch instruction from its raw operand text.
///
/// Label names are free-form (anything before the trailing `:` of a
/// definition), so the operand never goes through the lexer; it is
/// comma-split and looked up verbatim against the pass-1 table.
fn parse_branch(
    rest: &str,
    mnemonic: &str,
    line: usize,
    labels: &LabelTable,
    pc: i32,
) -> Result<Instruction> {
    let operands: Vec<&str> = rest
        .split(',')
        .map(str::trim)
        .filter(|operand| !operand.is_empty())
        .collect();
    if operands.len() != 1 {
        return Err(AssemblerError::ArityError {
            line,
            mnemonic: mnemonic.to_string(),
            expected: 1,
            found: operands.len(),
        });
    }

    let target = labels
        .get(operands[0])
        .copied()
        .ok_or_else(|| AssemblerError::UnknownLabel {
            line,
            label: operands[0].to_string(),
        })?;

    // Offset is relative to the instruction after the branch.
    let offset = target as i64 - pc as i64 - 1;
    if offset < OFFSET_MIN as i64 || offset > OFFSET_MAX as i64 {
        return Err(AssemblerError::BranchOutOfRange { line, offset });
    }
    Ok(Instruction::Bra {
        offset: offset as i32,
    })
}

/// Group the tokens after the mnemonic into comma-separated operands.
/// Empty groups (stray commas) are dropped.
fn split_operands(tokens: &[Token]) -> Vec<Vec<Token>> {
    tokens
        .split(|t| *t == Token::Comma)
        .filter(|group| !group.is_empty())
        .map(|group| group.to_vec())
        .collect()
}

fn expect_arity(
    operands: &[Vec<Token>],
    expected: usize,
    line: usize,
    mnemonic: &str,
) -> Result<()> {
    if operands.len() != expected {
        return Err(AssemblerError::ArityError {
            line,
            mnemonic: mnemonic.to_string(),
            expected,
            found: operands.len(),
        });
    }
    Ok(())
}

/// The operand as written, for error messages
fn operand_text(operand: &[Token]) -> String {
    operand
        .iter()
        .map(|token| match token {
            Token::Ident(name) => name.clone(),
            Token::Int(value) => value.to_string(),
            Token::Hex(value) => format!("{:#x}", value),
            Token::Comma => ",".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// An operand that must be a register name
fn register_operand(operand: &[Token], line: usize) -> Result<Register> {
    let reg = match operand {
        [Token::Ident(name)] => Register::from_name(name),
        _ => None,
    };
    reg.ok_or_else(|| AssemblerError::InvalidRegister {
        line,
        operand: operand_text(operand),
    })
}

/// The operand as a single integer literal, if it is one
fn integer_literal(operand: &[Token]) -> Option<i64> {
    match operand {
        [Token::Int(value)] | [Token::Hex(value)] => Some(*value),
        _ => None,
    }
}

/// An operand that must be an integer literal
fn immediate_operand(operand: &[Token], line: usize) -> Result<i64> {
    integer_literal(operand).ok_or_else(|| AssemblerError::InvalidImmediate {
        line,
        operand: operand_text(operand),
    })
}

fn check_imm_range(value: i64, line: usize) -> Result<i32> {
    if value < IMM_MIN as i64 || value > IMM_MAX as i64 {
        return Err(AssemblerError::ImmediateOutOfRange {
            line,
            value,
            min: IMM_MIN,
            max: IMM_MAX,
        });
    }
    Ok(value as i32)
}
