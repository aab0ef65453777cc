//! `rand_core` integration
//!
//! Lets an [`Mt64`] drive anything written against `rand`'s traits
//! (`gen_range`, shuffles, distributions) while keeping its own exact output
//! sequence. Deliberately not `CryptoRng`.

use rand_core::{Error, RngCore, SeedableRng};

use super::mt64::Mt64;

impl RngCore for Mt64 {
    /// Upper half of one 64-bit output
    fn next_u32(&mut self) -> u32 {
        (Mt64::next(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Mt64::next(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Mt64::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        Mt64::fill_bytes(self, dest);
        Ok(())
    }
}

impl SeedableRng for Mt64 {
    /// Little-endian encoding of the `u64` seed
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Mt64::new(u64::from_le_bytes(seed))
    }

    /// Same sequence as [`Mt64::new`], not the PCG-expanded default
    fn seed_from_u64(state: u64) -> Self {
        Mt64::new(state)
    }
}
