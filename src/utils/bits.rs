//! Bit-level helpers for fixed-width registers.
//!
//! Registers are stored in a `u64` and every value produced here is
//! confined to the low `width` bits, so no operation can leak state above
//! the register's most significant bit.

use crate::error::LfsrCryptError;

/// Largest register width that still leaves room for the `2^width` step guard.
pub const MAX_WIDTH: u32 = 63;

/// Returns a mask with the low `width` bits set.
///
/// # Parameters
/// - `width`: Register width (1..=63).
///
/// # Errors
/// Returns [`LfsrCryptError::InvalidWidth`] if `width` is 0 or above [`MAX_WIDTH`].
pub fn width_mask(width: u32) -> Result<u64, LfsrCryptError> {
    if width == 0 || width > MAX_WIDTH {
        return Err(LfsrCryptError::InvalidWidth(width));
    }
    Ok((1u64 << width) - 1)
}

/// Folds a set of tap positions into a single mask.
///
/// Duplicate positions collapse to one bit.
///
/// # Errors
/// - [`LfsrCryptError::InvalidTaps`] if `taps` is empty.
/// - [`LfsrCryptError::TapOutOfRange`] if a position is `>= width`.
pub fn tap_mask(taps: &[u32], width: u32) -> Result<u64, LfsrCryptError> {
    if taps.is_empty() {
        return Err(LfsrCryptError::InvalidTaps);
    }
    let mut mask = 0u64;
    for &tap in taps {
        if tap >= width {
            return Err(LfsrCryptError::TapOutOfRange { tap, width });
        }
        mask |= 1u64 << tap;
    }
    Ok(mask)
}

/// Expands a tap mask back into ascending bit positions.
pub fn tap_positions(mask: u64) -> Vec<u32> {
    (0..64).filter(|&pos| mask & (1u64 << pos) != 0).collect()
}

/// XOR of all bits of `value`.
#[inline]
pub fn parity(value: u64) -> bool {
    value.count_ones() & 1 == 1
}

/// Returns the bit of `value` at `pos`.
#[inline]
pub fn bit_at(value: u64, pos: u32) -> bool {
    (value >> pos) & 1 == 1
}

/// Returns the number of bits required to represent the given number.
pub fn bits_required(num: u64) -> u32 {
    64 - num.leading_zeros()
}
