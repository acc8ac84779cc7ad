//! Thread-local RNG backing for card selection

use rand::Rng;

use crate::domain::tarot::RandomSource;

/// `RandomSource` backed by the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn pick(&self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stays_in_bounds() {
        let source = ThreadRngSource::new();

        for _ in 0..100 {
            assert!(source.pick(3) < 3);
        }
    }

    #[test]
    fn test_pick_single_bound() {
        let source = ThreadRngSource::new();
        assert_eq!(source.pick(1), 0);
    }
}
