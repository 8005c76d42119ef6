//! Conversion between bit sequences and their external forms.
//!
//! The engine and cipher work on `&[bool]`. These helpers translate to and
//! from `'0'`/`'1'` strings and to and from bytes using most-significant-bit
//! first ordering, so a byte `0x80` maps to `[true, false, ..., false]`.

use crate::error::LfsrCryptError;

/// Parses a string of `'0'` and `'1'` characters into bits.
///
/// # Errors
/// Returns [`LfsrCryptError::InvalidBitChar`] for the first character that
/// is not `'0'` or `'1'`.
pub fn parse_bits(input: &str) -> Result<Vec<bool>, LfsrCryptError> {
    input
        .chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(LfsrCryptError::InvalidBitChar { position, found }),
        })
        .collect()
}

/// Formats bits as a string of `'0'` and `'1'` characters.
pub fn format_bits(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Expands bytes into bits, most significant bit first.
///
/// # Returns
/// A `Vec<bool>` containing `input.len() * 8` bits.
pub fn bytes_to_bits(input: &[u8]) -> Vec<bool> {
    let mut output = Vec::with_capacity(input.len() * 8);
    for &byte in input {
        for j in (0..8).rev() {
            output.push((byte >> j) & 1 == 1);
        }
    }
    output
}

/// Packs bits into bytes, most significant bit first.
///
/// # Parameters
/// - `input`: Bit slice whose length must be a multiple of 8.
///
/// # Errors
/// Returns [`LfsrCryptError::InvalidBitLength`] if `input.len() % 8 != 0`.
pub fn bits_to_bytes(input: &[bool]) -> Result<Vec<u8>, LfsrCryptError> {
    if !input.len().is_multiple_of(8) {
        return Err(LfsrCryptError::InvalidBitLength(input.len()));
    }
    Ok(input
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bits_basic() {
        assert_eq!(parse_bits("1011").unwrap(), vec![true, false, true, true]);
    }

    #[test]
    fn test_parse_bits_empty() {
        assert!(parse_bits("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_bits_invalid_char() {
        assert_eq!(
            parse_bits("10a1"),
            Err(LfsrCryptError::InvalidBitChar {
                position: 2,
                found: 'a'
            })
        );
    }

    #[test]
    fn test_parse_bits_rejects_whitespace() {
        assert!(matches!(
            parse_bits("10 1"),
            Err(LfsrCryptError::InvalidBitChar { position: 2, .. })
        ));
    }

    #[test]
    fn test_format_bits() {
        assert_eq!(format_bits(&[true, false, false, true]), "1001");
        assert_eq!(format_bits(&[]), "");
    }

    #[test]
    fn test_bytes_to_bits_msb_first() {
        assert_eq!(
            bytes_to_bits(&[0x80, 0x01]),
            vec![
                true, false, false, false, false, false, false, false, //
                false, false, false, false, false, false, false, true,
            ]
        );
    }

    #[test]
    fn test_bits_to_bytes_basic() {
        let bits = parse_bits("0000000111111110").unwrap();
        assert_eq!(bits_to_bytes(&bits).unwrap(), vec![0x01, 0xFE]);
    }

    #[test]
    fn test_bytes_bits_roundtrip() {
        let original = b"LFSR";
        let bits = bytes_to_bits(original);
        assert_eq!(bits.len(), 32);
        assert_eq!(bits_to_bytes(&bits).unwrap(), original.to_vec());
    }

    #[test]
    fn test_bits_to_bytes_invalid_length() {
        assert_eq!(
            bits_to_bytes(&[true; 7]),
            Err(LfsrCryptError::InvalidBitLength(7))
        );
    }

    #[test]
    fn test_bits_to_bytes_empty() {
        assert!(bits_to_bytes(&[]).unwrap().is_empty());
    }
}
