//! Raw MT19937-64 state: the word array, the read cursor, and the
//! recurrences that fill and regenerate it.
//!
//! Everything here works on untempered words. Tempering and the public
//! drawing API live in [`super::mt64`].

use std::fmt;

use crate::error::RngError;

/// Number of 64-bit words in the state
pub const N: usize = 312;

/// Offset of the word mixed into each twisted word
pub const M: usize = 156;

/// Twist transformation constant
pub const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;

/// Most significant 33 bits
pub const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;

/// Least significant 31 bits
pub const LOWER_MASK: u64 = 0x7FFF_FFFF;

const SEED_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

const KEY_BASE_SEED: u64 = 19_650_218;
const KEY_MULTIPLIER_1: u64 = 3_935_559_000_370_003_845;
const KEY_MULTIPLIER_2: u64 = 2_862_933_555_777_941_757;

/// Word array plus cursor
///
/// `index == N` means every word of the current generation has been read
/// and the next read must twist first.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratorState {
    words: [u64; N],
    index: usize,
}

impl GeneratorState {
    /// State initialized from a single seed word
    pub fn seeded(seed: u64) -> Self {
        let mut state = Self {
            words: [0; N],
            index: N,
        };
        state.seed(seed);
        state
    }

    /// Rebuild a state from raw parts, rejecting an out-of-range cursor
    pub fn from_parts(words: [u64; N], index: usize) -> Result<Self, RngError> {
        if index > N {
            return Err(RngError::InvalidIndex { index, max: N });
        }
        Ok(Self { words, index })
    }

    /// Overwrite every word from `seed` and mark the state exhausted
    ///
    /// Multiplication and addition wrap modulo 2^64.
    pub fn seed(&mut self, seed: u64) {
        self.words[0] = seed;
        for i in 1..N {
            let prev = self.words[i - 1];
            self.words[i] = SEED_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        self.index = N;
    }

    /// Overwrite every word from a key array
    ///
    /// The key is validated before anything is written, so an empty key
    /// leaves the state as it was.
    pub fn seed_from_key(&mut self, key: &[u64]) -> Result<(), RngError> {
        if key.is_empty() {
            return Err(RngError::EmptyKey);
        }

        self.seed(KEY_BASE_SEED);

        let mut i = 1;
        let mut j = 0;
        for _ in 0..N.max(key.len()) {
            let prev = self.words[i - 1];
            self.words[i] = (self.words[i] ^ (prev ^ (prev >> 62)).wrapping_mul(KEY_MULTIPLIER_1))
                .wrapping_add(key[j])
                .wrapping_add(j as u64);
            i += 1;
            j += 1;
            if i >= N {
                self.words[0] = self.words[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..N - 1 {
            let prev = self.words[i - 1];
            self.words[i] = (self.words[i] ^ (prev ^ (prev >> 62)).wrapping_mul(KEY_MULTIPLIER_2))
                .wrapping_sub(i as u64);
            i += 1;
            if i >= N {
                self.words[0] = self.words[N - 1];
                i = 1;
            }
        }

        // Guarantees a non-zero state regardless of key
        self.words[0] = 1 << 63;
        self.index = N;
        Ok(())
    }

    /// Regenerate all N words in one ascending in-place pass
    ///
    /// Slot `i` reads `words[i + 1]` and `words[(i + M) % N]`. Below `N - M`
    /// both are still from the previous generation; from `N - M` on, the far
    /// word has already been regenerated in this pass, and the final slot
    /// wraps to the new `words[0]`. That ordering is the recurrence itself,
    /// so the loops are split to keep each read pattern explicit.
    pub fn twist(&mut self) {
        for i in 0..N - M {
            self.words[i] = twist_word(self.words[i], self.words[i + 1], self.words[i + M]);
        }
        for i in N - M..N - 1 {
            self.words[i] = twist_word(self.words[i], self.words[i + 1], self.words[i + M - N]);
        }
        self.words[N - 1] = twist_word(self.words[N - 1], self.words[0], self.words[M - 1]);
        self.index = 0;

        tracing::trace!("regenerated {} state words", N);
    }

    /// Read the word under the cursor, twisting first if exhausted
    #[inline]
    pub fn next_word(&mut self) -> u64 {
        if self.index >= N {
            self.twist();
        }
        let word = self.words[self.index];
        self.index += 1;
        word
    }

    pub fn words(&self) -> &[u64; N] {
        &self.words
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

#[inline(always)]
fn twist_word(current: u64, next: u64, far: u64) -> u64 {
    let x = (current & UPPER_MASK) | (next & LOWER_MASK);
    let magnitude = if x & 1 == 0 { 0 } else { MATRIX_A };
    far ^ (x >> 1) ^ magnitude
}

impl fmt::Debug for GeneratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorState")
            .field("index", &self.index)
            .field("words[0]", &format_args!("{:#018x}", self.words[0]))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_follows_recurrence() {
        let state = GeneratorState::seeded(12345);
        let words = state.words();

        assert_eq!(words[0], 12345);
        for i in 1..N {
            let prev = words[i - 1];
            let expected = SEED_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
            assert_eq!(words[i], expected, "recurrence broken at word {}", i);
        }
        assert_eq!(state.index(), N);
    }

    #[test]
    fn test_seed_zero_is_accepted() {
        let state = GeneratorState::seeded(0);
        // 0 ^ (0 >> 62) == 0, so only the index term survives
        assert_eq!(state.words()[1], 1);
        assert!(state.words().iter().skip(2).any(|&w| w != 0));
    }

    #[test]
    fn test_twist_resets_cursor_and_changes_words() {
        let mut state = GeneratorState::seeded(7);
        let before = state.clone();

        state.twist();

        assert_eq!(state.index(), 0);
        assert_ne!(state.words(), before.words());
    }

    #[test]
    fn test_twist_first_half_reads_previous_generation() {
        let before = GeneratorState::seeded(99);
        let mut after = before.clone();
        after.twist();

        let old = before.words();
        for i in 0..N - M {
            assert_eq!(after.words()[i], twist_word(old[i], old[i + 1], old[i + M]));
        }
    }

    #[test]
    fn test_twist_second_half_reads_regenerated_words() {
        let before = GeneratorState::seeded(99);
        let mut after = before.clone();
        after.twist();

        let old = before.words();
        let new = after.words();
        for i in N - M..N - 1 {
            assert_eq!(new[i], twist_word(old[i], old[i + 1], new[i + M - N]));
        }
        assert_eq!(new[N - 1], twist_word(old[N - 1], new[0], new[M - 1]));
    }

    #[test]
    fn test_next_word_twists_only_when_exhausted() {
        let mut state = GeneratorState::seeded(1);

        state.next_word();
        assert_eq!(state.index(), 1);

        let snapshot = state.words().to_vec();
        for _ in 1..N {
            state.next_word();
        }
        assert_eq!(state.index(), N);
        assert_eq!(state.words().to_vec(), snapshot, "no twist before exhaustion");

        state.next_word();
        assert_eq!(state.index(), 1);
        assert_ne!(state.words().to_vec(), snapshot);
    }

    #[test]
    fn test_key_seeding_sets_top_bit_of_first_word() {
        let mut state = GeneratorState::seeded(0);
        state.seed_from_key(&[0x12345, 0x23456]).unwrap();

        assert_eq!(state.words()[0], 1 << 63);
        assert_eq!(state.index(), N);
    }

    #[test]
    fn test_key_longer_than_state_is_consumed() {
        let long_key: Vec<u64> = (0..(N as u64 + 40)).collect();
        let mut a = GeneratorState::seeded(0);
        let mut b = GeneratorState::seeded(0);

        a.seed_from_key(&long_key).unwrap();
        let mut truncated = long_key.clone();
        truncated.pop();
        b.seed_from_key(&truncated).unwrap();

        assert_ne!(a.words(), b.words());
    }

    #[test]
    fn test_empty_key_leaves_state_untouched() {
        let mut state = GeneratorState::seeded(42);
        state.next_word();
        let before = state.clone();

        assert_eq!(state.seed_from_key(&[]), Err(RngError::EmptyKey));
        assert_eq!(state, before);
    }

    #[test]
    fn test_from_parts_rejects_cursor_past_end() {
        let result = GeneratorState::from_parts([0; N], N + 1);
        assert_eq!(
            result,
            Err(RngError::InvalidIndex {
                index: N + 1,
                max: N
            })
        );
        assert!(GeneratorState::from_parts([0; N], N).is_ok());
    }
}
