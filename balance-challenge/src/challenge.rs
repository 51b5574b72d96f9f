//! Linear-equation challenges of the form `a·x + b = m·x + n`.

use balance_core::{error::OutOfRange, fmt::write_sum, Fraction, Scale, Side, Term};
use balance_error::Error;
use crate::error::{NotAnInteger, UnbalancedChallenge, WrongElementCount, ZeroDenominator};
use std::{fmt::{self, Display, Formatter}, ops::Range, rc::Rc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The names of the four coefficients, in the order they appear in a debug string.
const COEFFICIENTS: [&str; 4] = ["a", "b", "m", "n"];

/// The number of integers in a debug string.
pub const DEBUG_ELEMENTS: usize = 9;

/// An equation `a·x + b = m·x + n` together with the value of `x` that solves it.
///
/// A challenge is always balanced: [`Challenge::new`] panics if `a·x + b` and `m·x + n` are not
/// exactly equal, since a generator producing such a challenge has a bug.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Challenge {
    x: i64,
    a: Fraction,
    b: Fraction,
    m: Fraction,
    n: Fraction,

    /// The form of the equation, such as `ax + b = c`.
    description: String,

    /// How each value was chosen, one line per step.
    derivation: Vec<String>,
}

impl Challenge {
    /// Creates a challenge.
    ///
    /// Panics if `a·x + b` is not equal to `m·x + n`.
    pub fn new(
        x: i64,
        a: impl Into<Fraction>,
        b: impl Into<Fraction>,
        m: impl Into<Fraction>,
        n: impl Into<Fraction>,
        description: impl Into<String>,
        derivation: Vec<String>,
    ) -> Self {
        let challenge = Self {
            x,
            a: a.into().reduce(),
            b: b.into().reduce(),
            m: m.into().reduce(),
            n: n.into().reduce(),
            description: description.into(),
            derivation,
        };
        let (left, right) = challenge.sides();
        assert!(
            left == right,
            "malformed challenge `{}` at x = {}: {} != {}",
            challenge,
            x,
            left,
            right,
        );
        challenge
    }

    /// The values of `a·x + b` and `m·x + n`.
    fn sides(&self) -> (Fraction, Fraction) {
        let x = Fraction::from(self.x);
        (&self.a * &x + &self.b, &self.m * &x + &self.n)
    }

    /// Returns true if `a·x + b` equals `m·x + n`.
    pub fn is_balanced(&self) -> bool {
        let (left, right) = self.sides();
        left == right
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn a(&self) -> &Fraction {
        &self.a
    }

    pub fn b(&self) -> &Fraction {
        &self.b
    }

    pub fn m(&self) -> &Fraction {
        &self.m
    }

    pub fn n(&self) -> &Fraction {
        &self.n
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// How the values of the challenge were chosen, for display in a developer overlay.
    pub fn derivation(&self) -> &[String] {
        &self.derivation
    }

    /// Formats the challenge as nine comma-separated integers:
    /// `a_num,a_den,b_num,b_den,m_num,m_den,n_num,n_den,x`.
    ///
    /// The result can be read back with [`Challenge::from_debug_str`].
    pub fn debug_string(&self) -> String {
        let coefficients = [&self.a, &self.b, &self.m, &self.n]
            .iter()
            .map(|c| format!("{},{}", c.numerator(), c.denominator()))
            .collect::<Vec<_>>()
            .join(",");
        format!("{},{}", coefficients, self.x)
    }

    /// Creates a challenge from nine integers in the order written by
    /// [`Challenge::debug_string`].
    ///
    /// The returned errors carry no spans; use [`Challenge::from_debug_str`] to have them point
    /// at the offending elements.
    pub fn from_debug_values(values: &[i64]) -> Result<Self, Error> {
        if values.len() != DEBUG_ELEMENTS {
            return Err(Error::new(vec![], WrongElementCount { found: values.len() }));
        }
        Self::from_elements(values, None, None)
    }

    /// Parses a debug challenge such as `-7,2,4,1,0,1,-17,1,6`, optionally surrounded by square
    /// brackets. Errors point at the elements of `input` that caused them.
    pub fn from_debug_str(input: &str) -> Result<Self, Error> {
        let whole = 0..input.len();
        let mut offset = input.len() - input.trim_start().len();
        let mut body = input.trim();
        if let Some(inner) = body.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            offset += 1;
            body = inner;
        }

        let mut elements = Vec::new();
        for piece in body.split(',') {
            let leading = piece.len() - piece.trim_start().len();
            let text = piece.trim();
            let start = offset + leading;
            elements.push((text, start..start + text.len()));
            offset += piece.len() + 1;
        }

        if elements.len() != DEBUG_ELEMENTS {
            return Err(Error::new(vec![whole], WrongElementCount { found: elements.len() }));
        }

        let mut values = Vec::with_capacity(DEBUG_ELEMENTS);
        let mut spans = Vec::with_capacity(DEBUG_ELEMENTS);
        for (text, span) in elements {
            let value = text.parse::<i64>()
                .map_err(|_| Error::new(vec![span.clone()], NotAnInteger { element: text.to_string() }))?;
            values.push(value);
            spans.push(span);
        }

        Self::from_elements(&values, Some(&spans), Some(whole))
    }

    /// Builds a challenge from exactly nine values, checking the denominators and the balance.
    fn from_elements(
        values: &[i64],
        spans: Option<&[Range<usize>]>,
        whole: Option<Range<usize>>,
    ) -> Result<Self, Error> {
        let coefficient = |i: usize| -> Result<Fraction, Error> {
            let (numerator, denominator) = (values[2 * i], values[2 * i + 1]);
            if denominator == 0 {
                let span = spans.map(|spans| vec![spans[2 * i + 1].clone()]).unwrap_or_default();
                return Err(Error::new(span, ZeroDenominator { coefficient: COEFFICIENTS[i] }));
            }
            Ok(Fraction::new(numerator, denominator).reduce())
        };

        let challenge = Self {
            x: values[2 * COEFFICIENTS.len()],
            a: coefficient(0)?,
            b: coefficient(1)?,
            m: coefficient(2)?,
            n: coefficient(3)?,
            description: "debug challenge".to_string(),
            derivation: Vec::new(),
        };

        let (left, right) = challenge.sides();
        if left != right {
            return Err(Error::new(
                whole.into_iter().collect(),
                UnbalancedChallenge { left: left.to_string(), right: right.to_string() },
            ));
        }
        Ok(challenge)
    }

    /// Puts the equation on the scale: `a·x` and `b` on the left plate, `m·x` and `n` on the
    /// right. Every slot is cleared first, and zero coefficients leave their slot empty. The
    /// variable of the scale is set to `x`.
    pub fn seed_scale(&self, scale: &mut Scale) -> Result<(), OutOfRange> {
        scale.variable().set_value(self.x)?;
        scale.clear();

        let variable = Rc::clone(scale.variable());
        let left = scale.plate_mut(Side::Left);
        left.add_term(Term::variable(self.a.clone(), &variable));
        left.add_term(Term::constant(self.b.clone()));

        let right = scale.plate_mut(Side::Right);
        right.add_term(Term::variable(self.m.clone(), &variable));
        right.add_term(Term::constant(self.n.clone()));
        Ok(())
    }
}

impl Display for Challenge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_sum(f, [(&self.a, Some("x")), (&self.b, None)])?;
        f.write_str(" = ")?;
        write_sum(f, [(&self.m, Some("x")), (&self.n, None)])
    }
}
