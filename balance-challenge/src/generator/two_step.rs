//! Level three: `ax + b = c`.

use crate::{challenge::Challenge, random::{range_values, RandomSource}};
use once_cell::sync::Lazy;
use super::{pick, ChallengeGenerator, GeneratorState, Level, NONZERO_VALUES};

/// `[-10, 10]` without `0` and `1`.
static A_VALUES: Lazy<Vec<i64>> = Lazy::new(|| range_values(-10, 10, &[0, 1]));

/// Generates `ax + b = c`, solved by undoing the constant and then the coefficient.
#[derive(Debug, Clone)]
pub struct TwoStepGenerator<R> {
    state: GeneratorState,
    rng: R,
}

impl<R: RandomSource> TwoStepGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { state: GeneratorState::new(), rng }
    }
}

impl<R: RandomSource> ChallengeGenerator for TwoStepGenerator<R> {
    fn level(&self) -> Level {
        Level::Three
    }

    fn number_of_challenges(&self) -> usize {
        self.state.number_of_challenges()
    }

    fn next_challenge(&mut self) -> Challenge {
        let x = self.state.random_x(&mut self.rng);
        let a = pick(&mut self.rng, "a", &A_VALUES, |_| true);
        let b = pick(&mut self.rng, "b", &NONZERO_VALUES, |_| true);
        let c = a * x + b;
        let challenge = Challenge::new(
            x,
            a,
            b,
            0,
            c,
            "ax + b = c",
            vec![
                format!("x = {}", x),
                format!("a = {}", a),
                format!("b = {}", b),
                format!("c = a·x + b = {}", c),
            ],
        );
        self.state.record(Level::Three, &challenge);
        challenge
    }
}
