//! Level four: equations with a fractional coefficient of `x`.

use balance_core::Fraction;
use crate::{challenge::Challenge, random::{range_values, RandomSource}};
use once_cell::sync::Lazy;
use super::{pick, ChallengeGenerator, GeneratorState, Level, NONZERO_VALUES};

/// Denominators: `[2, 10]`.
static D_VALUES: Lazy<Vec<i64>> = Lazy::new(|| range_values(2, 10, &[]));

/// The largest `|b·d|` allowed in `(a/d)x + b = c`, which bounds the constant after multiplying
/// both sides by `d`.
const MAX_CONSTANT_PRODUCT: i64 = 40;

/// Generates `(a/d)x + b = c` and `(a/d)x + b/d = c`, choosing between the two at random.
///
/// `a/d` is never an integer. In the first form `d` divides `x`, so `c` is an integer; in the
/// second, neither `(a/d)x` nor `b/d` is an integer but their sum is.
#[derive(Debug, Clone)]
pub struct FractionalGenerator<R> {
    state: GeneratorState,
    rng: R,
}

impl<R: RandomSource> FractionalGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { state: GeneratorState::new(), rng }
    }

    /// Picks `d` and an `a` that `d` does not divide.
    fn coefficient(&mut self) -> (i64, i64) {
        let d = pick(&mut self.rng, "d", &D_VALUES, |_| true);
        let a = pick(&mut self.rng, "a", &NONZERO_VALUES, |a| a % d != 0);
        (a, d)
    }

    /// `(a/d)x + b = c`
    fn integer_constant(&mut self) -> Challenge {
        let (a, d) = self.coefficient();
        let x = self.state.random_x_by(&mut self.rng, |x| x % d == 0);
        let b = pick(&mut self.rng, "b", &NONZERO_VALUES, |b| (b * d).abs() <= MAX_CONSTANT_PRODUCT);
        let c = a * (x / d) + b;
        Challenge::new(
            x,
            Fraction::new(a, d),
            b,
            0,
            c,
            "(a/d)x + b = c",
            vec![
                format!("d = {}", d),
                format!("a = {} (not a multiple of d)", a),
                format!("x = {} (a multiple of d)", x),
                format!("b = {} (|b·d| ≤ {})", b, MAX_CONSTANT_PRODUCT),
                format!("c = (a/d)·x + b = {}", c),
            ],
        )
    }

    /// `(a/d)x + b/d = c`
    fn fractional_constant(&mut self) -> Challenge {
        let (a, d) = self.coefficient();
        let x = self.state.random_x_by(&mut self.rng, |x| (a * x) % d != 0);
        let b = pick(&mut self.rng, "b", &NONZERO_VALUES, |b| (a * x + b) % d == 0 && b % d != 0);
        let c = (a * x + b) / d;
        Challenge::new(
            x,
            Fraction::new(a, d),
            Fraction::new(b, d),
            0,
            c,
            "(a/d)x + b/d = c",
            vec![
                format!("d = {}", d),
                format!("a = {} (not a multiple of d)", a),
                format!("x = {} (a·x not a multiple of d)", x),
                format!("b = {} (a·x + b a multiple of d)", b),
                format!("c = (a·x + b)/d = {}", c),
            ],
        )
    }
}

impl<R: RandomSource> ChallengeGenerator for FractionalGenerator<R> {
    fn level(&self) -> Level {
        Level::Four
    }

    fn number_of_challenges(&self) -> usize {
        self.state.number_of_challenges()
    }

    fn next_challenge(&mut self) -> Challenge {
        let challenge = if self.rng.next_bool() {
            self.integer_constant()
        } else {
            self.fractional_constant()
        };
        self.state.record(Level::Four, &challenge);
        challenge
    }
}
