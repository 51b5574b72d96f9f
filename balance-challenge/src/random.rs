//! The source of randomness used by the challenge generators.

use rand::Rng;

/// Random choices made while generating challenges.
///
/// This is implemented for every [`rand::Rng`], so generators can be driven by a seeded
/// [`rand::rngs::StdRng`] for reproducible sequences, or by [`rand::thread_rng`] otherwise.
pub trait RandomSource {
    /// Returns an index in `0..len`.
    ///
    /// Panics if `len` is zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Returns true or false with equal probability.
    fn next_bool(&mut self) -> bool;

    /// Picks one of the given values uniformly.
    ///
    /// Panics if `values` is empty.
    fn sample_value(&mut self, values: &[i64]) -> i64 {
        assert!(!values.is_empty(), "cannot sample from an empty set of values");
        values[self.next_index(values.len())]
    }

    /// Picks one of the given values that satisfies `predicate` uniformly, or returns [`None`] if
    /// no value satisfies it.
    fn sample_value_by(&mut self, values: &[i64], predicate: &dyn Fn(i64) -> bool) -> Option<i64> {
        let candidates = values.iter()
            .copied()
            .filter(|&value| predicate(value))
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            None
        } else {
            Some(self.sample_value(&candidates))
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn next_bool(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Returns the integers in `min..=max`, leaving out the `excluded` ones.
pub fn range_values(min: i64, max: i64, excluded: &[i64]) -> Vec<i64> {
    (min..=max).filter(|value| !excluded.contains(value)).collect()
}
