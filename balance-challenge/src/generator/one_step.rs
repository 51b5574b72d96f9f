//! Levels one and two: equations solved with a single operation.

use balance_core::Fraction;
use crate::{challenge::Challenge, random::{range_values, RandomSource}};
use once_cell::sync::Lazy;
use std::fmt::{self, Display, Formatter};
use super::{pick, ChallengeGenerator, GeneratorState, Level, NONZERO_VALUES};

/// Coefficients of `x` at level one: `[-10, 10]` without `0` and `1`.
static LEVEL_ONE_A: Lazy<Vec<i64>> = Lazy::new(|| range_values(-10, 10, &[0, 1]));

/// Divisors at level one: `[-10, 10]` without `-1`, `0` and `1`.
static LEVEL_ONE_D: Lazy<Vec<i64>> = Lazy::new(|| range_values(-10, 10, &[-1, 0, 1]));

/// Coefficients of `x` at level two: `[-10, -1]`.
static LEVEL_TWO_A: Lazy<Vec<i64>> = Lazy::new(|| range_values(-10, -1, &[]));

/// Divisors at level two: `[-10, -1]`.
static LEVEL_TWO_D: Lazy<Vec<i64>> = Lazy::new(|| range_values(-10, -1, &[]));

/// The largest `|x|` the `x/d = c` form may produce.
const MAX_QUOTIENT_X: i64 = 40;

/// The number of times the `x/d = c` form retries to avoid repeating the previous `x`.
const MAX_QUOTIENT_ATTEMPTS: usize = 50;

/// The three forms of a one-step equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneStepForm {
    /// `ax = c`
    Multiply,

    /// `x + b = c`
    Add,

    /// `x/d = c`
    Divide,
}

impl OneStepForm {
    /// Every form, in the order the first challenges use them.
    pub const ALL: [OneStepForm; 3] = [OneStepForm::Multiply, OneStepForm::Add, OneStepForm::Divide];
}

impl Display for OneStepForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OneStepForm::Multiply => write!(f, "ax = c"),
            OneStepForm::Add => write!(f, "x + b = c"),
            OneStepForm::Divide => write!(f, "x/d = c"),
        }
    }
}

/// Generates `ax = c`, `x + b = c` and `x/d = c`.
///
/// The first three challenges use the forms in that order; after that, the form is chosen at
/// random. At level two, `a` and `d` are negative and the first challenge is `-x = c`.
#[derive(Debug, Clone)]
pub struct OneStepGenerator<R> {
    level: Level,
    a_values: &'static [i64],
    d_values: &'static [i64],
    state: GeneratorState,
    rng: R,
}

impl<R: RandomSource> OneStepGenerator<R> {
    pub fn level_one(rng: R) -> Self {
        Self {
            level: Level::One,
            a_values: &LEVEL_ONE_A,
            d_values: &LEVEL_ONE_D,
            state: GeneratorState::new(),
            rng,
        }
    }

    pub fn level_two(rng: R) -> Self {
        Self {
            level: Level::Two,
            a_values: &LEVEL_TWO_A,
            d_values: &LEVEL_TWO_D,
            state: GeneratorState::new(),
            rng,
        }
    }

    /// The form of the next challenge.
    fn next_form(&mut self) -> OneStepForm {
        OneStepForm::ALL.get(self.state.number_of_challenges())
            .copied()
            .unwrap_or_else(|| OneStepForm::ALL[self.rng.next_index(OneStepForm::ALL.len())])
    }

    /// Generates a challenge of the given form.
    pub fn challenge_of_form(&mut self, form: OneStepForm) -> Challenge {
        let challenge = match form {
            OneStepForm::Multiply => self.multiply(),
            OneStepForm::Add => self.add(),
            OneStepForm::Divide => self.divide(),
        };
        self.state.record(self.level, &challenge);
        challenge
    }

    fn multiply(&mut self) -> Challenge {
        let x = self.state.random_x(&mut self.rng);
        let a = if self.level == Level::Two && self.state.number_of_challenges() == 0 {
            -1
        } else {
            pick(&mut self.rng, "a", self.a_values, |_| true)
        };
        let c = a * x;
        Challenge::new(
            x,
            a,
            0,
            0,
            c,
            OneStepForm::Multiply.to_string(),
            vec![
                format!("x = {}", x),
                format!("a = {}", a),
                format!("c = a·x = {}", c),
            ],
        )
    }

    fn add(&mut self) -> Challenge {
        let x = self.state.random_x(&mut self.rng);
        let b = pick(&mut self.rng, "b", &NONZERO_VALUES, |_| true);
        let c = x + b;
        Challenge::new(
            x,
            1,
            b,
            0,
            c,
            OneStepForm::Add.to_string(),
            vec![
                format!("x = {}", x),
                format!("b = {}", b),
                format!("c = x + b = {}", c),
            ],
        )
    }

    /// `x/d = c` picks `d` and `c` first so that `x = c·d` is an integer in range. If every
    /// attempt lands on the previous `x`, the last one is kept.
    fn divide(&mut self) -> Challenge {
        let d = pick(&mut self.rng, "d", self.d_values, |_| true);
        let previous = self.state.previous_x();
        let mut c = 0;
        let mut x = 0;
        for _ in 0..MAX_QUOTIENT_ATTEMPTS {
            c = pick(&mut self.rng, "c", &NONZERO_VALUES, |c| (c * d).abs() <= MAX_QUOTIENT_X);
            x = c * d;
            if Some(x) != previous {
                break;
            }
        }
        Challenge::new(
            x,
            Fraction::new(1, d),
            0,
            0,
            c,
            OneStepForm::Divide.to_string(),
            vec![
                format!("d = {}", d),
                format!("c = {} (|c·d| ≤ {})", c, MAX_QUOTIENT_X),
                format!("x = c·d = {}", x),
            ],
        )
    }
}

impl<R: RandomSource> ChallengeGenerator for OneStepGenerator<R> {
    fn level(&self) -> Level {
        self.level
    }

    fn number_of_challenges(&self) -> usize {
        self.state.number_of_challenges()
    }

    fn next_challenge(&mut self) -> Challenge {
        let form = self.next_form();
        self.challenge_of_form(form)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    #[test]
    fn first_forms_in_order() {
        let mut generator = OneStepGenerator::level_one(StdRng::seed_from_u64(5));
        let descriptions = (0..3)
            .map(|_| generator.next_challenge().description().to_string())
            .collect::<Vec<_>>();
        assert_eq!(descriptions, vec!["ax = c", "x + b = c", "x/d = c"]);
    }

    #[test]
    fn level_two_starts_with_negative_x() {
        for seed in 0..20 {
            let mut generator = OneStepGenerator::level_two(StdRng::seed_from_u64(seed));
            let challenge = generator.next_challenge();
            assert_eq!(challenge.a(), &Fraction::from(-1));
            assert_eq!(challenge.n(), &Fraction::from(-challenge.x()));
        }
    }

    #[test]
    fn level_two_coefficients_are_negative() {
        assert_eq!(LEVEL_TWO_D.first(), Some(&-10));
        assert_eq!(LEVEL_TWO_D.last(), Some(&-1));
        let mut generator = OneStepGenerator::level_two(StdRng::seed_from_u64(9));
        for _ in 0..300 {
            let challenge = generator.next_challenge();
            match challenge.description() {
                "ax = c" => assert!(challenge.a() < &Fraction::zero()),
                "x/d = c" => {
                    assert!(challenge.a() < &Fraction::zero());
                    assert!(challenge.a() >= &Fraction::from(-1));
                    let d = Fraction::one().divided(challenge.a()).unwrap().to_integer().unwrap();
                    assert!((-10..=-1).contains(&d), "divisor {} out of range", d);
                },
                _ => assert_eq!(challenge.a(), &Fraction::one()),
            }
        }
    }

    /// Always picks the first candidate, counting the draws.
    struct FirstValue {
        draws: usize,
    }

    impl RandomSource for FirstValue {
        fn next_index(&mut self, _: usize) -> usize {
            self.draws += 1;
            0
        }

        fn next_bool(&mut self) -> bool {
            false
        }
    }

    #[test]
    fn quotient_retries_are_bounded() {
        let mut generator = OneStepGenerator::level_one(FirstValue { draws: 0 });

        // d = -10, c = -4
        let first = generator.challenge_of_form(OneStepForm::Divide);
        assert_eq!(first.x(), 40);
        assert_eq!(generator.rng.draws, 2);

        generator.rng.draws = 0;
        let second = generator.challenge_of_form(OneStepForm::Divide);
        assert_eq!(second.x(), first.x());
        assert_eq!(generator.rng.draws, 1 + MAX_QUOTIENT_ATTEMPTS);
    }


        let mut generator = OneStepGenerator::level_one(StdRng::seed_from_u64(13));
        for _ in 0..300 {
            let challenge = generator.challenge_of_form(OneStepForm::Divide);
            assert!(challenge.x().abs() <= MAX_QUOTIENT_X);
            assert_ne!(challenge.x(), 0);
            assert!(*challenge.a().abs().numerator() == 1);
        }
    }
}
