//! XOR stream cipher over a captured LFSR keystream.
//!
//! Encryption and decryption are the same operation: each data bit is
//! XORed with the keystream bit at the same position.

use log::debug;

use crate::config::LfsrConfig;
use crate::error::LfsrCryptError;

/// XORs `data` with the leading bits of `keystream`.
///
/// # Parameters
/// - `data`: Plaintext or ciphertext bits.
/// - `keystream`: Key bits; only the first `data.len()` are consumed.
///
/// # Returns
/// A `Vec<bool>` of the same length as `data`.
///
/// # Errors
/// Returns [`LfsrCryptError::KeystreamExhausted`] if `keystream` is shorter than `data`.
///
/// # Examples
///
/// ```
/// use lfsrcrypt::xor_combine;
///
/// let data = [true, true, false, false];
/// let key = [true, false, true, false, true];
/// let ciphertext = xor_combine(&data, &key).unwrap();
/// assert_eq!(ciphertext, vec![false, true, true, false]);
/// assert_eq!(xor_combine(&ciphertext, &key).unwrap(), data.to_vec());
/// ```
pub fn xor_combine(data: &[bool], keystream: &[bool]) -> Result<Vec<bool>, LfsrCryptError> {
    if keystream.len() < data.len() {
        return Err(LfsrCryptError::KeystreamExhausted {
            needed: data.len(),
            available: keystream.len(),
        });
    }
    Ok(data.iter().zip(keystream).map(|(&d, &k)| d ^ k).collect())
}

/// Encrypts `plaintext` with `keystream`.
pub fn encrypt(plaintext: &[bool], keystream: &[bool]) -> Result<Vec<bool>, LfsrCryptError> {
    xor_combine(plaintext, keystream)
}

/// Decrypts `ciphertext` with `keystream`.
///
/// Symmetric operation: identical to [`encrypt`] since XOR is its own inverse.
pub fn decrypt(ciphertext: &[bool], keystream: &[bool]) -> Result<Vec<bool>, LfsrCryptError> {
    xor_combine(ciphertext, keystream)
}

/// Stream cipher holding a fixed keystream prefix.
///
/// Every call starts from the beginning of the keystream, so an encoder
/// and a decoder built from the same configuration agree without sharing
/// state.
///
/// # Examples
///
/// ```
/// use lfsrcrypt::{LfsrConfig, StreamCipher};
/// use lfsrcrypt::utils::converter::{format_bits, parse_bits};
///
/// let cipher = StreamCipher::from_config(&LfsrConfig::default()).unwrap();
/// assert_eq!(cipher.period(), Some(1023));
///
/// let plaintext = parse_bits("11101100000110111011010011111010").unwrap();
/// let ciphertext = cipher.encrypt(&plaintext).unwrap();
/// assert_eq!(format_bits(&ciphertext), "01000001110010101110101101011001");
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamCipher {
    keystream: Vec<bool>,
    period: Option<u64>,
}

impl StreamCipher {
    /// Creates a cipher over an externally supplied keystream.
    pub fn new(keystream: Vec<bool>) -> Self {
        StreamCipher {
            keystream,
            period: None,
        }
    }

    /// Builds the register described by `config`, runs it through one
    /// period and keeps the first `config.capture_limit` bits.
    ///
    /// # Errors
    /// Any error from [`LfsrConfig::build`] or
    /// [`Lfsr::run_until_period`](crate::Lfsr::run_until_period).
    pub fn from_config(config: &LfsrConfig) -> Result<Self, LfsrCryptError> {
        let mut lfsr = config.build()?;
        let run = lfsr.run_until_period(config.capture_limit)?;
        debug!(
            "stream cipher keyed: period={} keystream={} bits",
            run.period,
            run.keystream.len()
        );
        Ok(StreamCipher {
            keystream: run.keystream,
            period: Some(run.period),
        })
    }

    /// Encrypts `plaintext` with the keystream prefix.
    pub fn encrypt(&self, plaintext: &[bool]) -> Result<Vec<bool>, LfsrCryptError> {
        encrypt(plaintext, &self.keystream)
    }

    /// Decrypts `ciphertext` with the keystream prefix.
    pub fn decrypt(&self, ciphertext: &[bool]) -> Result<Vec<bool>, LfsrCryptError> {
        decrypt(ciphertext, &self.keystream)
    }

    /// Returns the keystream prefix.
    pub fn keystream(&self) -> &[bool] {
        &self.keystream
    }

    /// Returns the register period, if the cipher was built from a configuration.
    pub fn period(&self) -> Option<u64> {
        self.period
    }
}
