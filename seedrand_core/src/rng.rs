// seedrand_core/src/rng.rs

//! `rand_core` integration, so the generator can drive `rand_distr`
//! distributions and anything else written against `RngCore`.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::generator::SeededRandomGenerator;

impl RngCore for SeededRandomGenerator {
    /// One xorshift step; the raw register.
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededRandomGenerator {
    /// A little-endian `i32` seed. As with [`SeededRandomGenerator::new`], only
    /// the low 16 bits matter.
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i32::from_le_bytes(seed))
    }

    // The default implementation expands the u64 through PCG first; keep the
    // seed-to-stream mapping identical to `new` instead.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i32)
    }
}
