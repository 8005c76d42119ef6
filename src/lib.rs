//! Fibonacci LFSR keystream generator and XOR stream cipher.
//!
//! An [`Lfsr`] holds a fixed-width register and a set of feedback taps.
//! Each step XORs the tapped bits, shifts right and inserts the result as
//! the new top bit. [`Lfsr::run_until_period`] steps the register until it
//! returns to its seed, reporting the period and a bounded prefix of the
//! keystream. [`xor_combine`] and [`StreamCipher`] use that prefix to
//! encrypt and decrypt bit sequences.
//!
//! LFSR keystreams are linear and predictable. This crate is a
//! deterministic bit-sequence generator, not a secure cipher.
//!
//! # Architecture
//!
//! ```text
//! LfsrConfig  (width, seed, taps, capture limit)
//!     │ build()
//! Lfsr        (register + XOR-of-taps feedback, period detection)
//!     │ run_until_period() → PeriodRun { period, keystream }
//! StreamCipher / xor_combine  (data XOR keystream prefix)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the reference 10-bit register:
//!
//! ```
//! use lfsrcrypt::{xor_combine, Lfsr};
//! use lfsrcrypt::utils::converter::{format_bits, parse_bits};
//!
//! let mut lfsr = Lfsr::new(0b1000011001, 10, &[0, 7]).unwrap();
//! let run = lfsr.run_until_period(512).unwrap();
//! assert_eq!(run.period, 1023);
//!
//! let plaintext = parse_bits("11101100000110111011010011111010").unwrap();
//! let ciphertext = xor_combine(&plaintext, &run.keystream).unwrap();
//! let decrypted = xor_combine(&ciphertext, &run.keystream).unwrap();
//! assert_eq!(format_bits(&decrypted), "11101100000110111011010011111010");
//! ```
//!
//! Any tap set is accepted; non-maximal ones simply have shorter periods:
//!
//! ```
//! use lfsrcrypt::LfsrConfig;
//!
//! let mut lfsr = LfsrConfig::new(4, 1, vec![0, 2]).build().unwrap();
//! assert_eq!(lfsr.run_until_period(16).unwrap().period, 6);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod utils;

mod config;
mod lfsr;
mod stream_cipher;

pub use config::{
    LfsrConfig, DEFAULT_CAPTURE_LIMIT, REFERENCE_SEED, REFERENCE_TAPS, REFERENCE_WIDTH,
};
pub use error::LfsrCryptError;
pub use lfsr::{Lfsr, PeriodRun};
pub use stream_cipher::{decrypt, encrypt, xor_combine, StreamCipher};
