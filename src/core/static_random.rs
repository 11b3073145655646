// src/core/static_random.rs

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded random source owned by a single benchmark run.
///
/// With a seed the stream is reproducible; without one the seed is drawn from
/// the thread RNG and recorded so the run can be repeated.
pub struct StaticRandom {
    rng: ChaCha8Rng,
    seed: u64,
}

impl StaticRandom {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        StaticRandom {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.random()
    }

    /// Independent child stream, used to hand one generator to each worker.
    pub fn fork(&mut self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.next_u64())
    }
}
