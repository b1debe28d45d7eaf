//! `Random` and friends.
//!
//! Delphi's linear congruential generator: `seed := seed * 134775813 + 1`
//! over 32 bits. `Random(n)` scales the new seed into `0..n`; `Random`
//! without an argument divides it by 2^32. The same seed replays the same
//! sequence Delphi produces.
//!
//! The free functions share one process-wide generator behind a mutex, so
//! every thread draws from a single sequence. Nothing seeds it until
//! [`randomize`] or [`set_rand_seed`] is called.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::{const_mutex, Mutex};

use crate::scalar::{Double, Integer};

const MULTIPLIER: u32 = 134_775_813;

/// A Delphi-compatible random number generator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RandomGenerator {
    seed: u32,
}

impl RandomGenerator {
    pub const fn new(seed: Integer) -> Self {
        Self {
            seed: seed.raw() as u32,
        }
    }

    /// `RandSeed`.
    pub const fn seed(&self) -> Integer {
        Integer::new(self.seed as i32)
    }

    pub fn set_seed(&mut self, seed: Integer) {
        self.seed = seed.raw() as u32;
    }

    fn next(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(1);
        self.seed
    }

    /// `Random(range)`: a value in `0..range`. A range `<= 0` yields 0.
    pub fn int(&mut self, range: Integer) -> Integer {
        let next = u64::from(self.next());
        if range.raw() <= 0 {
            return Integer::ZERO;
        }
        Integer::new(((next * range.raw() as u64) >> 32) as i32)
    }

    /// `Random`: a value in `[0, 1)`.
    pub fn float(&mut self) -> Double {
        Double::new(f64::from(self.next()) / 4_294_967_296.0)
    }
}

static GENERATOR: Mutex<RandomGenerator> = const_mutex(RandomGenerator::new(Integer::ZERO));

/// `Randomize`: seed the shared generator from the clock.
pub fn randomize() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let seed = Integer::new(nanos as i32);
    tracing::trace!(seed = seed.raw(), "randomize");
    GENERATOR.lock().set_seed(seed);
}

/// Current `RandSeed`.
pub fn rand_seed() -> Integer {
    GENERATOR.lock().seed()
}

/// `RandSeed := seed`.
pub fn set_rand_seed(seed: Integer) {
    GENERATOR.lock().set_seed(seed);
}

/// `Random(range)` from the shared generator.
pub fn random_int(range: Integer) -> Integer {
    GENERATOR.lock().int(range)
}

/// `Random` from the shared generator.
pub fn random_float() -> Double {
    GENERATOR.lock().float()
}

#[cfg(test)]
mod tests;
