//! Explicitly shared generators
//!
//! [`Mt64`] itself has no locking. When several owners really do need one
//! sequence, wrap it in a [`SharedRng`] handle; every call takes the lock for
//! its duration, so interleaving between owners is up to the callers.
//!
//! [`global`] keeps one such engine for the whole process.

use std::sync::Arc;

use parking_lot::Mutex;

use super::mt64::Mt64;

/// Cloneable handle to one generator shared between owners
///
/// # Example
/// ```
/// use mt64_core_rs::rng::SharedRng;
///
/// let rng = SharedRng::new(42);
/// let other = rng.clone();
///
/// let first = rng.next();
/// let second = other.next(); // continues the same sequence
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedRng {
    inner: Arc<Mutex<Mt64>>,
}

impl SharedRng {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(Mt64::new(seed))
    }

    pub fn from_rng(rng: Mt64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Reset the shared sequence for every holder of this handle
    pub fn seed(&self, seed: u64) {
        self.inner.lock().seed(seed);
    }

    pub fn next(&self) -> u64 {
        self.inner.lock().next()
    }

    /// Run `f` with exclusive access, e.g. to draw several values atomically
    pub fn with<R>(&self, f: impl FnOnce(&mut Mt64) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

/// One process-wide generator
///
/// Created on first use with [`DEFAULT_SEED`](crate::rng::DEFAULT_SEED);
/// calling `global::next` before any `global::seed` yields the default-seed
/// sequence.
pub mod global {
    use once_cell::sync::Lazy;

    use super::SharedRng;
    use crate::rng::Mt64;

    static GLOBAL: Lazy<SharedRng> = Lazy::new(SharedRng::default);

    /// Reset the process-wide sequence
    pub fn seed(seed: u64) {
        GLOBAL.seed(seed);
    }

    pub fn next() -> u64 {
        GLOBAL.next()
    }

    pub fn with<R>(f: impl FnOnce(&mut Mt64) -> R) -> R {
        GLOBAL.with(f)
    }

    /// Another handle onto the process-wide generator
    pub fn handle() -> SharedRng {
        GLOBAL.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_sequence() {
        let shared = SharedRng::new(11);
        let clone = shared.clone();
        let mut reference = Mt64::new(11);

        assert_eq!(shared.next(), reference.next());
        assert_eq!(clone.next(), reference.next());
        assert_eq!(shared.next(), reference.next());
    }

    #[test]
    fn test_seed_through_any_handle_resets_all() {
        let shared = SharedRng::new(11);
        let clone = shared.clone();
        shared.next();

        clone.seed(77);

        assert_eq!(shared.next(), Mt64::new(77).next());
    }

    #[test]
    fn test_with_gives_exclusive_access() {
        let shared = SharedRng::new(3);
        let pair = shared.with(|rng| (rng.next(), rng.next()));

        let mut reference = Mt64::new(3);
        assert_eq!(pair, (reference.next(), reference.next()));
    }

    #[test]
    fn test_shared_across_threads() {
        let shared = SharedRng::new(5);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let rng = shared.clone();
                std::thread::spawn(move || (0..250).map(|_| rng.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut drawn: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        drawn.sort_unstable();

        let mut reference = Mt64::new(5);
        let mut expected: Vec<u64> = (0..1000).map(|_| reference.next()).collect();
        expected.sort_unstable();

        assert_eq!(drawn, expected, "every value drawn exactly once");
    }
}
