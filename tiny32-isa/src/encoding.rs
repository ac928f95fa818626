//! # Instruction Encoding Constants and Helpers
//!
//! Centralized bit-level codec for the three Tiny32 instruction formats:
//!
//! ```text
//! R-type: [opcode:8][rd:5][rs1:5][rs2:5][unused:9]
//! I-type: [opcode:8][rd:5][rs1:5][imm:14]
//! J-type: [opcode:8][offset:24]
//! ```
//!
//! The encode helpers truncate their fields to the layout widths and never
//! validate; range checking is the assembler's job. Decoding is total and
//! opcode-agnostic: it extracts every field position plus the raw low 24
//! bits, and the consumer applies the width that its opcode calls for via
//! [`sign_extend`].

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Opcode field: bits 24-31 (8 bits)
pub const OPCODE_SHIFT: u32 = 24;

/// Destination (or store-source) register field: bits 19-23 (5 bits)
pub const RD_SHIFT: u32 = 19;

/// Source register 1 field: bits 14-18 (5 bits)
pub const RS1_SHIFT: u32 = 14;

/// Source register 2 field: bits 9-13 (5 bits)
pub const RS2_SHIFT: u32 = 9;

// ============================================================================
// Field Masks and Widths
// ============================================================================

/// Register field mask (5 bits)
pub const REGISTER_MASK: u32 = 0x1F;

/// I-type immediate mask (14 bits)
pub const IMM_MASK: u32 = 0x3FFF;

/// J-type offset mask (24 bits)
pub const OFFSET_MASK: u32 = 0xFF_FFFF;

/// I-type immediate width in bits
pub const IMM_BITS: u32 = 14;

/// J-type offset width in bits
pub const OFFSET_BITS: u32 = 24;

/// Smallest 14-bit signed immediate
pub const IMM_MIN: i32 = -(1 << (IMM_BITS - 1));

/// Largest 14-bit signed immediate
pub const IMM_MAX: i32 = (1 << (IMM_BITS - 1)) - 1;

/// Smallest 24-bit signed branch offset
pub const OFFSET_MIN: i32 = -(1 << (OFFSET_BITS - 1));

/// Largest 24-bit signed branch offset
pub const OFFSET_MAX: i32 = (1 << (OFFSET_BITS - 1)) - 1;

// ============================================================================
// Encoding Functions
// ============================================================================

/// Encode an R-type instruction; register indices are truncated to 5 bits
#[inline]
pub const fn encode_r(opcode: u8, rd: u8, rs1: u8, rs2: u8) -> u32 {
    ((opcode as u32) << OPCODE_SHIFT)
        | ((rd as u32 & REGISTER_MASK) << RD_SHIFT)
        | ((rs1 as u32 & REGISTER_MASK) << RS1_SHIFT)
        | ((rs2 as u32 & REGISTER_MASK) << RS2_SHIFT)
}

/// Encode an I-type instruction; the immediate is truncated to 14 bits
#[inline]
pub const fn encode_i(opcode: u8, rd_or_rs: u8, rs1: u8, imm: i32) -> u32 {
    ((opcode as u32) << OPCODE_SHIFT)
        | ((rd_or_rs as u32 & REGISTER_MASK) << RD_SHIFT)
        | ((rs1 as u32 & REGISTER_MASK) << RS1_SHIFT)
        | (imm as u32 & IMM_MASK)
}

/// Encode a J-type instruction; the offset is truncated to 24 bits
#[inline]
pub const fn encode_j(opcode: u8, offset: i32) -> u32 {
    ((opcode as u32) << OPCODE_SHIFT) | (offset as u32 & OFFSET_MASK)
}

// ============================================================================
// Decoding
// ============================================================================

/// Field-level view of a packed instruction word.
///
/// Every field position is extracted regardless of opcode; `imm` holds the
/// raw low 24 bits with no sign applied. The 5-bit register fields bound
/// the indices structurally, so the values are always in [0, 31].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInstruction {
    pub opcode: u8,
    pub rd: u8,
    pub rs1: u8,
    pub rs2: u8,
    /// Raw low 24 bits, not sign-extended
    pub imm: u32,
}

impl RawInstruction {
    /// Split a word into its fields. Total: never fails.
    #[inline]
    pub const fn decode(word: u32) -> Self {
        RawInstruction {
            opcode: (word >> OPCODE_SHIFT) as u8,
            rd: ((word >> RD_SHIFT) & REGISTER_MASK) as u8,
            rs1: ((word >> RS1_SHIFT) & REGISTER_MASK) as u8,
            rs2: ((word >> RS2_SHIFT) & REGISTER_MASK) as u8,
            imm: word & OFFSET_MASK,
        }
    }
}

/// Reinterpret the low `bits` bits of `value` as a two's-complement signed
/// integer of that width.
#[inline]
pub const fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}
