//! Procedural generators for the five challenge levels.
//!
//! Every generator samples its coefficients from precomputed integer ranges, filtering them by the
//! constraints of its level, and builds the challenge with exact arithmetic. A generator never
//! returns an unbalanced challenge; see [`Challenge::new`].

pub mod both_sides;
pub mod fractional;
pub mod one_step;
pub mod two_step;

use crate::{challenge::Challenge, random::{range_values, RandomSource}};
use once_cell::sync::Lazy;
use std::fmt::{self, Display, Formatter};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use both_sides::BothSidesGenerator;
pub use fractional::FractionalGenerator;
pub use one_step::{OneStepForm, OneStepGenerator};
pub use two_step::TwoStepGenerator;

/// The values `x` is drawn from: `[-40, 40]` without `0`.
pub static X_VALUES: Lazy<Vec<i64>> = Lazy::new(|| range_values(-40, 40, &[0]));

/// `[-10, 10]` without `0`, used for constants and for most coefficients.
pub static NONZERO_VALUES: Lazy<Vec<i64>> = Lazy::new(|| range_values(-10, 10, &[0]));

/// A source of challenges for one level.
pub trait ChallengeGenerator {
    /// The level this generator produces challenges for.
    fn level(&self) -> Level;

    /// The number of challenges generated so far.
    fn number_of_challenges(&self) -> usize;

    /// Generates the next challenge.
    fn next_challenge(&mut self) -> Challenge;
}

/// The state every generator keeps between challenges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorState {
    number_of_challenges: usize,
    previous_x: Option<i64>,
}

impl GeneratorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_of_challenges(&self) -> usize {
        self.number_of_challenges
    }

    /// The solution of the last generated challenge.
    pub fn previous_x(&self) -> Option<i64> {
        self.previous_x
    }

    /// Picks a value of `x` from [`X_VALUES`] that is not the previous `x`.
    pub fn random_x<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i64 {
        self.random_x_by(rng, |_| true)
    }

    /// Picks a value of `x` from [`X_VALUES`] that satisfies `predicate` and is not the previous
    /// `x`. If only the previous `x` satisfies `predicate`, it is returned anyway.
    ///
    /// Panics if no value satisfies `predicate`.
    pub fn random_x_by<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        predicate: impl Fn(i64) -> bool,
    ) -> i64 {
        let previous = self.previous_x;
        rng.sample_value_by(&X_VALUES, &|x| Some(x) != previous && predicate(x))
            .or_else(|| rng.sample_value_by(&X_VALUES, &predicate))
            .unwrap_or_else(|| panic!("no value of `x` satisfies the constraints"))
    }

    /// Records a generated challenge.
    pub fn record(&mut self, level: Level, challenge: &Challenge) {
        self.number_of_challenges += 1;
        self.previous_x = Some(challenge.x());
        trace!(
            %level,
            number = self.number_of_challenges,
            %challenge,
            x = challenge.x(),
            description = challenge.description(),
            "generated challenge"
        );
    }
}

/// Picks one of `values` that satisfies `predicate`.
///
/// Panics if no value does, naming the coefficient that could not be chosen.
pub(crate) fn pick<R: RandomSource + ?Sized>(
    rng: &mut R,
    name: &str,
    values: &[i64],
    predicate: impl Fn(i64) -> bool,
) -> i64 {
    rng.sample_value_by(values, &predicate)
        .unwrap_or_else(|| panic!("no value of `{}` satisfies the constraints", name))
}

/// The five difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    /// `ax = c`, `x + b = c` and `x/d = c`.
    One,

    /// The forms of level one with negative coefficients.
    Two,

    /// `ax + b = c`.
    Three,

    /// `(a/d)x + b = c` and `(a/d)x + b/d = c`.
    Four,

    /// `ax + b = mx + n`.
    Five,
}

impl Level {
    /// Every level, in order.
    pub const ALL: [Level; 5] = [Level::One, Level::Two, Level::Three, Level::Four, Level::Five];

    /// Returns the level with the given number, from 1 to 5.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            4 => Some(Level::Four),
            5 => Some(Level::Five),
            _ => None,
        }
    }

    /// The number of this level, from 1 to 5.
    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
            Level::Four => 4,
            Level::Five => 5,
        }
    }

    /// The forms of the challenges of this level.
    pub fn description(self) -> &'static str {
        match self {
            Level::One => "ax = c, x + b = c, x/d = c",
            Level::Two => "ax = c, x + b = c, x/d = c with negative a and d",
            Level::Three => "ax + b = c",
            Level::Four => "(a/d)x + b = c, (a/d)x + b/d = c",
            Level::Five => "ax + b = mx + n",
        }
    }

    /// Creates a generator for this level, drawing its random values from `rng`.
    pub fn generator<R: RandomSource + 'static>(self, rng: R) -> Box<dyn ChallengeGenerator> {
        match self {
            Level::One => Box::new(OneStepGenerator::level_one(rng)),
            Level::Two => Box::new(OneStepGenerator::level_two(rng)),
            Level::Three => Box::new(TwoStepGenerator::new(rng)),
            Level::Four => Box::new(FractionalGenerator::new(rng)),
            Level::Five => Box::new(BothSidesGenerator::new(rng)),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.number())
    }
}
