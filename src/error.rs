//! Error types for the lfsrcrypt library.

use thiserror::Error;

/// Errors produced by the lfsrcrypt library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LfsrCryptError {
    /// Seed is zero or does not fit in the register width.
    #[error("seed {seed:#b} is invalid for a {width}-bit register (must be nonzero and fit in {width} bits)")]
    InvalidSeed { seed: u64, width: u32 },

    /// Register width is outside the supported range [1, 63].
    #[error("register width {0} is outside the valid range [1, 63]")]
    InvalidWidth(u32),

    /// Tap set is empty.
    #[error("tap set must contain at least one position")]
    InvalidTaps,

    /// Tap position does not address a register bit.
    #[error("tap position {tap} is outside a {width}-bit register")]
    TapOutOfRange { tap: u32, width: u32 },

    /// Keystream is shorter than the data it must cover.
    #[error("keystream exhausted (needed {needed} bits, available {available} bits)")]
    KeystreamExhausted { needed: usize, available: usize },

    /// Register did not return to its seed within `2^width` steps.
    #[error("register did not return to its seed after {steps} steps")]
    NonTerminating { steps: u64 },

    /// Bit string contains a character other than '0' or '1'.
    #[error("invalid bit character {found:?} at position {position}")]
    InvalidBitChar { position: usize, found: char },

    /// Bit sequence length is not a multiple of 8.
    #[error("bit sequence length {0} is not a multiple of 8")]
    InvalidBitLength(usize),
}
