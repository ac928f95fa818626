//! # Binary Image
//!
//! The on-disk artifact is a raw sequence of 32-bit words in little-endian
//! byte order: no header, no magic number, length = 4 x instruction count.

use crate::WORD_BYTES;

/// An assembled program: packed instruction words in program order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction words
    pub code: Vec<u32>,
}

impl Program {
    /// Wrap a word sequence
    pub fn new(code: Vec<u32>) -> Self {
        Self { code }
    }

    /// Number of instructions
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Serialize to little-endian bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.code.len() * WORD_BYTES);
        for &word in &self.code {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    /// Deserialize from little-endian bytes. A trailing partial word (input
    /// length not a multiple of 4) is dropped silently, not an error.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let code = bytes
            .chunks_exact(WORD_BYTES)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Self { code }
    }
}
