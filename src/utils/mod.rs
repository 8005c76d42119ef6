//! Bit manipulation and conversion helpers shared by the engine and cipher.

pub mod bits;
pub mod converter;
