//! Register configuration.
//!
//! Groups the parameters needed to build an [`Lfsr`] and capture its
//! keystream. The default is the reference 10-bit register.

use crate::error::LfsrCryptError;
use crate::lfsr::Lfsr;

/// Width of the reference register.
pub const REFERENCE_WIDTH: u32 = 10;

/// Seed of the reference register.
pub const REFERENCE_SEED: u64 = 0b10_0001_1001;

/// Taps of the reference register (`x^10 + x^3 + 1`).
pub const REFERENCE_TAPS: [u32; 2] = [0, 7];

/// Default number of keystream bits retained by a period run.
pub const DEFAULT_CAPTURE_LIMIT: usize = 512;

/// Parameters for building an [`Lfsr`] and capturing its keystream.
///
/// # Examples
///
/// ```
/// use lfsrcrypt::LfsrConfig;
///
/// let config = LfsrConfig::new(16, 0xACE1, vec![0, 2, 3, 5]).with_capture_limit(64);
/// let mut lfsr = config.build().unwrap();
/// assert_eq!(lfsr.run_until_period(config.capture_limit).unwrap().period, 65535);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LfsrConfig {
    /// Register width in bits.
    pub width: u32,
    /// Initial register value.
    pub seed: u64,
    /// Feedback tap positions.
    pub taps: Vec<u32>,
    /// Maximum number of keystream bits retained.
    #[cfg_attr(feature = "serde", serde(default = "default_capture_limit"))]
    pub capture_limit: usize,
}

#[cfg(feature = "serde")]
fn default_capture_limit() -> usize {
    DEFAULT_CAPTURE_LIMIT
}

impl Default for LfsrConfig {
    fn default() -> Self {
        LfsrConfig {
            width: REFERENCE_WIDTH,
            seed: REFERENCE_SEED,
            taps: REFERENCE_TAPS.to_vec(),
            capture_limit: DEFAULT_CAPTURE_LIMIT,
        }
    }
}

impl LfsrConfig {
    /// Creates a configuration with the default capture limit.
    pub fn new(width: u32, seed: u64, taps: Vec<u32>) -> Self {
        LfsrConfig {
            width,
            seed,
            taps,
            capture_limit: DEFAULT_CAPTURE_LIMIT,
        }
    }

    /// Sets the number of keystream bits retained by a period run.
    pub fn with_capture_limit(mut self, capture_limit: usize) -> Self {
        self.capture_limit = capture_limit;
        self
    }

    /// Builds a register from this configuration.
    ///
    /// # Errors
    /// Any validation error from [`Lfsr::new`].
    pub fn build(&self) -> Result<Lfsr, LfsrCryptError> {
        Lfsr::new(self.seed, self.width, &self.taps)
    }
}
