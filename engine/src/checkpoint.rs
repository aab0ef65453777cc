//! Checkpoint - Save/Load Generator State
//!
//! Captures the complete state of an [`Mt64`] so a sequence can be paused
//! and resumed later, e.g. to replay an animation from a given frame.
//!
//! # Critical Invariants
//!
//! - **Continuation**: a restored engine yields exactly the values the
//!   original would have yielded next
//! - **Shape**: exactly 312 words and a cursor in [0, 312]
//! - **Integrity**: the stored digest must match the words and cursor

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::RngError;
use crate::rng::{GeneratorState, Mt64, N};

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngSnapshot {
    /// Raw state words (always 312 when produced by [`Mt64::snapshot`])
    pub words: Vec<u64>,

    /// Cursor into `words`
    pub index: usize,

    /// SHA256 hex digest of words and cursor
    pub checksum: String,
}

impl RngSnapshot {
    pub fn to_json(&self) -> Result<String, RngError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RngError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Checksum
// ============================================================================

/// Compute SHA256 over the little-endian words followed by the cursor
///
/// The cursor is hashed as a u64 so the digest does not depend on the
/// platform's pointer width.
pub fn compute_state_checksum(words: &[u64], index: usize) -> String {
    let mut hasher = Sha256::new();
    for word in words {
        hasher.update(word.to_le_bytes());
    }
    hasher.update((index as u64).to_le_bytes());
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Save / Restore
// ============================================================================

impl Mt64 {
    /// Capture the full generator state
    ///
    /// # Example
    /// ```
    /// use mt64_core_rs::Mt64;
    ///
    /// let mut rng = Mt64::new(12345);
    /// rng.next();
    ///
    /// let snapshot = rng.snapshot();
    /// let mut resumed = Mt64::restore(&snapshot).unwrap();
    /// assert_eq!(rng.next(), resumed.next());
    /// ```
    pub fn snapshot(&self) -> RngSnapshot {
        let words = self.words().to_vec();
        let index = self.index();
        let checksum = compute_state_checksum(&words, index);
        RngSnapshot {
            words,
            index,
            checksum,
        }
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// - [`RngError::InvalidStateLength`] if the snapshot does not hold 312 words
    /// - [`RngError::InvalidIndex`] if the cursor is past the end
    /// - [`RngError::ChecksumMismatch`] if the digest does not match
    pub fn restore(snapshot: &RngSnapshot) -> Result<Self, RngError> {
        let words: [u64; N] = snapshot.words.as_slice().try_into().map_err(|_| {
            tracing::warn!(
                actual = snapshot.words.len(),
                "rejected snapshot with wrong state length"
            );
            RngError::InvalidStateLength {
                expected: N,
                actual: snapshot.words.len(),
            }
        })?;

        let state = GeneratorState::from_parts(words, snapshot.index)?;

        let actual = compute_state_checksum(&snapshot.words, snapshot.index);
        if actual != snapshot.checksum {
            tracing::warn!("rejected snapshot with checksum mismatch");
            return Err(RngError::ChecksumMismatch {
                expected: snapshot.checksum.clone(),
                actual,
            });
        }

        tracing::debug!(index = snapshot.index, "restored MT19937-64 engine");
        Ok(Mt64::from_state(state))
    }
}
