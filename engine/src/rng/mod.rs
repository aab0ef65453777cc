//! Deterministic random number generation
//!
//! Uses the 64-bit Mersenne Twister (MT19937-64) for reproducible output.
//! Seed once, draw forever: two engines given the same seed agree on every
//! value.

mod mt64;
mod rand_compat;
mod shared;
pub mod state;

pub use mt64::{temper, Mt64, DEFAULT_SEED};
pub use shared::{global, SharedRng};
pub use state::{GeneratorState, N};
