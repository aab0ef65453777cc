//! MT19937-64 random number generator
//!
//! The 64-bit Mersenne Twister: 312 words of state, period 2^19937 - 1,
//! 64-bit output. Deterministic and fast, but NOT cryptographically secure;
//! the full state can be recovered from 312 consecutive outputs.
//!
//! # Determinism
//!
//! Same seed → same sequence, on every platform. All seeding and twisting
//! arithmetic wraps modulo 2^64, so there is no overflow to report.
//!
//! # Unseeded use
//!
//! An `Mt64` is always seeded. [`Mt64::default`] seeds with [`DEFAULT_SEED`]
//! (5489, the reference implementation's default), so code that never
//! chooses a seed still gets a documented, reproducible sequence.

use super::state::{GeneratorState, N};
use crate::error::RngError;

/// Seed used by [`Mt64::default`] and by the lazily created global engine
pub const DEFAULT_SEED: u64 = 5489;

/// Deterministic random number generator using MT19937-64
///
/// # Example
/// ```
/// use mt64_core_rs::Mt64;
///
/// let mut rng = Mt64::new(5489);
/// assert_eq!(rng.next(), 14514284786278117030);
///
/// let unit = rng.next_f64(); // [0.0, 1.0)
/// let frame = rng.range(0, 60); // [0, 60)
/// # assert!(unit < 1.0 && (0..60).contains(&frame));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt64 {
    state: GeneratorState,
}

impl Mt64 {
    /// Create a new generator seeded with a single 64-bit value
    ///
    /// Any value is accepted, including 0.
    ///
    /// # Example
    /// ```
    /// use mt64_core_rs::Mt64;
    ///
    /// let mut a = Mt64::new(0);
    /// let mut b = Mt64::new(0);
    /// assert_eq!(a.next(), b.next());
    /// ```
    pub fn new(seed: u64) -> Self {
        tracing::debug!(seed, "seeding MT19937-64 engine");
        Self {
            state: GeneratorState::seeded(seed),
        }
    }

    /// Create a new generator seeded from a key array
    ///
    /// Longer keys let callers feed more than 64 bits of entropy into the
    /// 19968-bit state.
    ///
    /// # Errors
    /// Returns [`RngError::EmptyKey`] if `key` is empty.
    ///
    /// # Example
    /// ```
    /// use mt64_core_rs::Mt64;
    ///
    /// let mut rng = Mt64::from_key(&[0x12345, 0x23456, 0x34567, 0x45678]).unwrap();
    /// assert_eq!(rng.next(), 7266447313870364031);
    /// ```
    pub fn from_key(key: &[u64]) -> Result<Self, RngError> {
        let mut state = GeneratorState::seeded(0);
        state.seed_from_key(key)?;
        tracing::debug!(key_len = key.len(), "seeding MT19937-64 engine from key");
        Ok(Self { state })
    }

    /// Reset the generator to the start of the sequence for `seed`
    ///
    /// Discards all prior state. The next output equals the first output of
    /// `Mt64::new(seed)`.
    pub fn seed(&mut self, seed: u64) {
        tracing::debug!(seed, "reseeding MT19937-64 engine");
        self.state.seed(seed);
    }

    /// Reset the generator from a key array
    ///
    /// # Errors
    /// Returns [`RngError::EmptyKey`] if `key` is empty; the generator is
    /// left unchanged in that case.
    pub fn reseed_from_key(&mut self, key: &[u64]) -> Result<(), RngError> {
        self.state.seed_from_key(key)?;
        tracing::debug!(key_len = key.len(), "reseeded MT19937-64 engine from key");
        Ok(())
    }

    /// Generate next random u64 value
    ///
    /// Every 312th call regenerates the whole state before reading.
    pub fn next(&mut self) -> u64 {
        temper(self.state.next_word())
    }

    /// Generate a non-negative i64 in [0, 2^63)
    pub fn next_i63(&mut self) -> i64 {
        (self.next() >> 1) as i64
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 bits of one output.
    ///
    /// # Example
    /// ```
    /// use mt64_core_rs::Mt64;
    ///
    /// let mut rng = Mt64::new(12345);
    /// let t = rng.next_f64();
    /// assert!(t >= 0.0 && t < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        (self.next() >> 11) as f64 * (1.0 / 9_007_199_254_740_992.0)
    }

    /// Generate random f64 in range [0.0, 1.0], both ends reachable
    pub fn next_f64_closed(&mut self) -> f64 {
        (self.next() >> 11) as f64 * (1.0 / 9_007_199_254_740_991.0)
    }

    /// Generate random f64 in range (0.0, 1.0), neither end reachable
    pub fn next_f64_open(&mut self) -> f64 {
        ((self.next() >> 12) as f64 + 0.5) * (1.0 / 4_503_599_627_370_496.0)
    }

    /// Generate random value in range [min, max)
    ///
    /// Reduces one output modulo the range size, so very wide ranges carry
    /// a slight bias toward low values.
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use mt64_core_rs::Mt64;
    ///
    /// let mut rng = Mt64::new(12345);
    /// let x = rng.range(-640, 640);
    /// assert!((-640..640).contains(&x));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let span = max.wrapping_sub(min) as u64;
        min.wrapping_add((self.next() % span) as i64)
    }

    /// Fill `dest` with little-endian bytes of successive outputs
    ///
    /// A trailing partial chunk uses the low bytes of one more output.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    /// Position of the cursor within the current generation, in [0, 312]
    pub fn index(&self) -> usize {
        self.state.index()
    }

    /// Raw (untempered) state words
    pub fn words(&self) -> &[u64; N] {
        self.state.words()
    }

    pub(crate) fn from_state(state: GeneratorState) -> Self {
        Self { state }
    }
}

impl Default for Mt64 {
    /// Generator seeded with [`DEFAULT_SEED`]
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Tempering transform applied to each raw word before it is returned
#[inline]
pub fn temper(mut y: u64) -> u64 {
    y ^= (y >> 29) & 0x5555_5555_5555_5555;
    y ^= (y << 17) & 0x71D6_7FFF_EDA6_0000;
    y ^= (y << 37) & 0xFFF7_EEE0_0000_0000;
    y ^= y >> 43;
    y
}
