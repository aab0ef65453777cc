//! MT19937-64 Core - Deterministic Random Numbers
//!
//! Seedable 64-bit Mersenne Twister used as the shared randomness source for
//! graphics and demo code, where the same seed must replay the same frames.
//!
//! # Architecture
//!
//! - **rng**: The generator engine, `rand_core` integration, shared handles
//! - **checkpoint**: Save/restore of complete generator state
//! - **config**: Seed selection from host configuration
//! - **geometry**: Random points in rectangles
//! - **error**: Error taxonomy for fallible operations
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, on every platform
//! 2. Seeding and twisting arithmetic wraps modulo 2^64
//! 3. A generator is never unseeded; the default seed is 5489
//! 4. Sharing is opt-in, through `SharedRng` or `rng::global`

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::RngSnapshot;
pub use config::RngConfig;
pub use error::RngError;
pub use rng::{Mt64, SharedRng, DEFAULT_SEED};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn mt64_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyMt64>()?;
    Ok(())
}
