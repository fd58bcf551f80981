use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of uniformly distributed integers in `[0, bound)`.
///
/// Callers must pass `bound >= 1`. Implementations return 0 for a zero
/// bound rather than panicking.
pub trait RandomSource {
    fn next(&mut self, bound: u32) -> u32;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next(&mut self, bound: u32) -> u32 {
        (**self).next(bound)
    }
}

/// Backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Reproducible sequence for a given seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> SeededRandom {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of values (reduced modulo the bound), cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<u32>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<u32>) -> SequenceRandom {
        SequenceRandom {
            values,
            position: 0,
        }
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceRandom {
    fn next(&mut self, bound: u32) -> u32 {
        if bound == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_cycles_and_reduces() {
        let mut random = SequenceRandom::new(vec![5, 150]);
        assert_eq!(random.next(100), 5);
        assert_eq!(random.next(100), 50);
        assert_eq!(random.next(3), 2);
        assert_eq!(random.draws(), 3);
    }

    #[test]
    fn test_seeded_is_reproducible_and_in_range() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..1000 {
            let value = a.next(24);
            assert!(value < 24);
            assert_eq!(value, b.next(24));
        }
    }

    #[test]
    fn test_zero_bound_returns_zero() {
        assert_eq!(ThreadRandom.next(0), 0);
        assert_eq!(SeededRandom::new(1).next(0), 0);
        assert_eq!(SequenceRandom::new(vec![7]).next(0), 0);
    }

    #[test]
    fn test_thread_random_in_range() {
        let mut random = ThreadRandom;
        for _ in 0..1000 {
            assert!(random.next(100) < 100);
        }
    }
}
