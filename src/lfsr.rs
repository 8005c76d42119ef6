//! Lfsr: fixed-width Fibonacci linear feedback shift register.
//!
//! Each step XORs the register bits at the configured tap positions,
//! shifts the register right by one and inserts the feedback bit as the
//! new most significant bit. The feedback bit is also the keystream bit.
//!
//! The reference configuration is a 10-bit register with taps at bits 0
//! and 7 (polynomial `x^10 + x^3 + 1`), which is maximal length.

use log::{debug, trace, warn};

use crate::error::LfsrCryptError;
use crate::utils::bits;

/// Result of running a register through one full period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodRun {
    /// Number of steps taken until the register returned to its seed.
    pub period: u64,
    /// Output bits of the first `min(capture_limit, period)` steps.
    pub keystream: Vec<bool>,
}

/// Fixed-width Fibonacci LFSR.
///
/// Owns its register exclusively. Independent keystreams need independent
/// instances.
///
/// # Examples
///
/// ```
/// use lfsrcrypt::Lfsr;
///
/// let mut lfsr = Lfsr::new(0b1000011001, 10, &[0, 7]).unwrap();
/// let run = lfsr.run_until_period(512).unwrap();
/// assert_eq!(run.period, 1023);
/// assert_eq!(run.keystream.len(), 512);
/// ```
#[derive(Debug, Clone)]
pub struct Lfsr {
    seed: u64,
    register: u64,
    width: u32,
    mask: u64,
    taps: u64,
    step_count: u64,
}

impl Lfsr {
    /// Creates a register of `width` bits loaded with `seed`.
    ///
    /// # Parameters
    /// - `seed`: Initial register value. Must be nonzero and fit in `width` bits.
    /// - `width`: Register width (1..=63).
    /// - `taps`: Bit positions in `[0, width)` XORed to form the feedback.
    ///
    /// # Errors
    /// - [`LfsrCryptError::InvalidWidth`] if `width` is out of range.
    /// - [`LfsrCryptError::InvalidTaps`] if `taps` is empty.
    /// - [`LfsrCryptError::TapOutOfRange`] if a tap is `>= width`.
    /// - [`LfsrCryptError::InvalidSeed`] if `seed` is zero or wider than `width`.
    ///
    /// ```
    /// use lfsrcrypt::{Lfsr, LfsrCryptError};
    ///
    /// let result = Lfsr::new(0, 10, &[0, 7]);
    /// assert_eq!(result.unwrap_err(), LfsrCryptError::InvalidSeed { seed: 0, width: 10 });
    /// ```
    pub fn new(seed: u64, width: u32, taps: &[u32]) -> Result<Self, LfsrCryptError> {
        let mask = bits::width_mask(width)?;
        let taps = bits::tap_mask(taps, width)?;
        if seed == 0 || bits::bits_required(seed) > width {
            return Err(LfsrCryptError::InvalidSeed { seed, width });
        }
        debug!(
            "lfsr created: width={} seed={:#b} taps={:?}",
            width,
            seed,
            bits::tap_positions(taps)
        );
        Ok(Lfsr {
            seed,
            register: seed,
            width,
            mask,
            taps,
            step_count: 0,
        })
    }

    /// Advances the register by one step and returns the feedback bit.
    pub fn step(&mut self) -> bool {
        let bit = bits::parity(self.register & self.taps);
        self.register = ((self.register >> 1) | ((bit as u64) << (self.width - 1))) & self.mask;
        self.step_count += 1;
        bit
    }

    /// Returns the next `n` keystream bits.
    pub fn keystream(&mut self, n: usize) -> Vec<bool> {
        (0..n).map(|_| self.step()).collect()
    }

    /// Runs the register from its seed until it returns to the seed.
    ///
    /// The register is reset first, so repeated calls yield identical
    /// results. Only the first `capture_limit` bits are retained; the rest
    /// advance the register without being stored. On success the register
    /// is back at its seed and [`step_count`](Self::step_count) equals the period.
    ///
    /// # Errors
    /// Returns [`LfsrCryptError::NonTerminating`] if the seed does not recur
    /// within `2^width` steps. This happens when bit 0 is not a tap: the
    /// step then discards information and the seed can drain into a cycle
    /// that never revisits it.
    pub fn run_until_period(&mut self, capture_limit: usize) -> Result<PeriodRun, LfsrCryptError> {
        let mut keystream = Vec::with_capacity(capture_limit.min(self.state_space()));
        let period = self.cycle(|bit, _| {
            if keystream.len() < capture_limit {
                keystream.push(bit);
                if keystream.len() == capture_limit {
                    trace!("capture limit of {} bits reached", capture_limit);
                }
            }
        })?;
        debug!(
            "lfsr period found: period={} captured={} bits",
            period,
            keystream.len()
        );
        Ok(PeriodRun { period, keystream })
    }

    /// Returns every register state visited during one period, in order.
    ///
    /// The last entry is the seed itself.
    ///
    /// # Errors
    /// Same as [`run_until_period`](Self::run_until_period).
    pub fn states_in_period(&mut self) -> Result<Vec<u64>, LfsrCryptError> {
        let mut states = Vec::new();
        self.cycle(|_, state| states.push(state))?;
        Ok(states)
    }

    /// Steps from the seed until recurrence, handing each bit and the
    /// resulting state to `visit`.
    fn cycle<F>(&mut self, mut visit: F) -> Result<u64, LfsrCryptError>
    where
        F: FnMut(bool, u64),
    {
        self.reset();
        let guard = 1u64 << self.width;
        loop {
            let bit = self.step();
            visit(bit, self.register);
            if self.register == self.seed {
                return Ok(self.step_count);
            }
            if self.step_count >= guard {
                warn!(
                    "lfsr seed {:#b} did not recur within {} steps (taps={:?})",
                    self.seed,
                    guard,
                    bits::tap_positions(self.taps)
                );
                return Err(LfsrCryptError::NonTerminating {
                    steps: self.step_count,
                });
            }
        }
    }

    /// Number of register states, saturated to `usize`.
    fn state_space(&self) -> usize {
        usize::try_from(self.mask).unwrap_or(usize::MAX)
    }

    // --- Getters ---

    /// Returns the seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the current register state.
    pub fn state(&self) -> u64 {
        self.register
    }

    /// Returns the register width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the tap positions in ascending order.
    pub fn taps(&self) -> Vec<u32> {
        bits::tap_positions(self.taps)
    }

    /// Returns the number of steps taken since the last reset.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Resets the register to the seed and clears the step count.
    pub fn reset(&mut self) {
        self.register = self.seed;
        self.step_count = 0;
    }
}

impl Iterator for Lfsr {
    type Item = bool;

    /// Yields keystream bits forever.
    fn next(&mut self) -> Option<bool> {
        Some(self.step())
    }
}

impl Drop for Lfsr {
    /// Clears register state and seed on drop.
    fn drop(&mut self) {
        self.seed = 0;
        self.register = 0;
        self.taps = 0;
        self.step_count = 0;
    }
}
