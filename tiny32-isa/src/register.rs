//! Register definitions for the Tiny32 ISA

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of registers
pub const NUM_REGISTERS: usize = 32;

/// A register index in [0, 31].
///
/// The packed 5-bit field bounds decoded indices structurally, so
/// construction is the only place the range is checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Register(u8);

impl Register {
    pub const R0: Self = Register(0);

    /// Build from a numeric index, `None` if out of range
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < NUM_REGISTERS {
            Some(Register(index))
        } else {
            None
        }
    }

    /// Parse a register name: `r` or `R` followed by a decimal index in
    /// [0, 31]. Anything else (wrong prefix, non-digit suffix, empty
    /// suffix, out-of-range index) is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let digits = name.strip_prefix('r').or_else(|| name.strip_prefix('R'))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let index: u8 = digits.parse().ok()?;
        Self::from_index(index)
    }

    /// Numeric index of this register
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Canonical name, always `r<index>`
    pub fn name(self) -> String {
        format!("r{}", self.0)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
