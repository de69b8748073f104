//! A simple pseudorandom number generator.
//!
//! Specifically, the PCG32 generator (XSH RR output, with a fixed stream) from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.
//!
//! Each [experiment](crate::experiment) stores a source of rng.
//! The experiment structure is paramaterised to anything which satisfies the [Rng](rand::Rng) trait.
//! Though, to keep seeding from a [config](crate::config) straightforward the rng of an [Experiment](crate::experiment::Experiment) is fixed as [MinimalPCG32].

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// The multiplier of the underlying linear congruential generator.
const MULTIPLIER: u64 = 6364136223846793005;

/// The (odd) increment, which fixes the stream of the generator.
const INCREMENT: u64 = (0xda3e39cb94b95bdb << 1) | 1;

/// State of the generator.
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
}

impl MinimalPCG32 {
    fn step(&mut self) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Two outputs, low half first.
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    /// Seeds as the reference `pcg32_srandom_r`, with the seed read as a little-endian u64.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.step();
        rng
    }
}
