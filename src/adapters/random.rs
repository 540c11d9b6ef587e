//! `fastrand` backed random source

use crate::core::ports::RandomSource;

impl RandomSource for fastrand::Rng {
    fn index(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}
