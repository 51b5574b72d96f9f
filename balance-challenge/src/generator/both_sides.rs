//! Level five: `ax + b = mx + n`, with `x` on both sides.

use crate::{challenge::Challenge, random::RandomSource};
use super::{pick, ChallengeGenerator, GeneratorState, Level, NONZERO_VALUES};

/// The largest `|a - m|`, which is the coefficient left after collecting the `x` terms.
pub const MAX_COLLECTED_COEFFICIENT: i64 = 10;

/// Generates `ax + b = mx + n`.
#[derive(Debug, Clone)]
pub struct BothSidesGenerator<R> {
    state: GeneratorState,
    rng: R,
}

impl<R: RandomSource> BothSidesGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { state: GeneratorState::new(), rng }
    }
}

impl<R: RandomSource> ChallengeGenerator for BothSidesGenerator<R> {
    fn level(&self) -> Level {
        Level::Five
    }

    fn number_of_challenges(&self) -> usize {
        self.state.number_of_challenges()
    }

    fn next_challenge(&mut self) -> Challenge {
        let x = self.state.random_x(&mut self.rng);
        let a = pick(&mut self.rng, "a", &NONZERO_VALUES, |_| true);
        let m = pick(&mut self.rng, "m", &NONZERO_VALUES, |m| {
            m != a && (a - m).abs() <= MAX_COLLECTED_COEFFICIENT
        });
        let b = pick(&mut self.rng, "b", &NONZERO_VALUES, |_| true);
        let n = (a - m) * x + b;
        let challenge = Challenge::new(
            x,
            a,
            b,
            m,
            n,
            "ax + b = mx + n",
            vec![
                format!("x = {}", x),
                format!("a = {}", a),
                format!("m = {} (m ≠ a, |a - m| ≤ {})", m, MAX_COLLECTED_COEFFICIENT),
                format!("b = {}", b),
                format!("n = (a - m)·x + b = {}", n),
            ],
        );
        self.state.record(Level::Five, &challenge);
        challenge
    }
}

#[cfg(test)]
mod tests {
    use balance_core::Fraction;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    #[test]
    fn collected_coefficient_bounded() {
        let mut generator = BothSidesGenerator::new(StdRng::seed_from_u64(41));
        for _ in 0..500 {
            let challenge = generator.next_challenge();
            let collected = challenge.a() - challenge.m();
            assert!(!collected.is_zero());
            assert!(collected.abs() <= Fraction::from(MAX_COLLECTED_COEFFICIENT));
            assert!(!challenge.m().is_zero());
            assert!(!challenge.a().is_zero());
        }
    }
}
