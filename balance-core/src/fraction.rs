//! Exact rational arithmetic.
//!
//! A [`Fraction`] stores a numerator and denominator as arbitrary-precision [`Integer`]s, exactly
//! as given, and does its arithmetic through [`Rational`]. Arithmetic never loses precision and
//! never overflows; the engine enforces its own size limit separately (see [`Fraction::exceeds`]).

use crate::error::DivisionByZero;
use rug::{Integer, Rational};
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rational number `numerator / denominator`.
///
/// [`Fraction::new`] stores the numerator and denominator exactly as given. Every other way of
/// producing a fraction, including all arithmetic, returns the reduced form: the denominator is
/// positive and shares no factor with the numerator. Equality and ordering compare values, so
/// `2/4 == 1/2` even before reduction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    numerator: Integer,
    denominator: Integer,
}

impl Fraction {
    /// Creates a fraction without reducing it.
    ///
    /// Panics if the denominator is zero.
    pub fn new(numerator: impl Into<Integer>, denominator: impl Into<Integer>) -> Self {
        let denominator = denominator.into();
        assert!(denominator.cmp0() != Ordering::Equal, "fraction denominator must not be zero");
        Self { numerator: numerator.into(), denominator }
    }

    /// Creates the fraction `n / 1`.
    pub fn integer(n: impl Into<Integer>) -> Self {
        Self { numerator: n.into(), denominator: Integer::from(1) }
    }

    /// The fraction `0 / 1`.
    pub fn zero() -> Self {
        Self::integer(0)
    }

    /// The fraction `1 / 1`.
    pub fn one() -> Self {
        Self::integer(1)
    }

    /// Builds a fraction from a [`Rational`], which is always in reduced form.
    pub fn from_rational(rational: Rational) -> Self {
        let (numerator, denominator) = rational.into_numer_denom();
        Self { numerator, denominator }
    }

    /// The value of this fraction as a canonical [`Rational`].
    pub fn to_rational(&self) -> Rational {
        Rational::from((self.numerator.clone(), self.denominator.clone()))
    }

    /// The numerator, as stored.
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// The denominator, as stored.
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns the reduced form of this fraction. Reducing an already reduced fraction returns an
    /// identical fraction.
    pub fn reduce(&self) -> Self {
        Self::from_rational(self.to_rational())
    }

    /// Returns true if this fraction is stored in reduced form.
    pub fn is_reduced(&self) -> bool {
        let rational = self.to_rational();
        self.numerator == *rational.numer() && self.denominator == *rational.denom()
    }

    /// `self + other`
    pub fn plus(&self, other: &Self) -> Self {
        Self::from_rational(self.to_rational() + other.to_rational())
    }

    /// `self - other`
    pub fn minus(&self, other: &Self) -> Self {
        Self::from_rational(self.to_rational() - other.to_rational())
    }

    /// `self * other`
    pub fn times(&self, other: &Self) -> Self {
        Self::from_rational(self.to_rational() * other.to_rational())
    }

    /// `self / other`. Returns [`Err`] if `other` is zero.
    pub fn divided(&self, other: &Self) -> Result<Self, DivisionByZero> {
        if other.is_zero() {
            return Err(DivisionByZero);
        }
        Ok(Self::from_rational(self.to_rational() / other.to_rational()))
    }

    /// `-self`
    pub fn negate(&self) -> Self {
        Self::from_rational(-self.to_rational())
    }

    /// `|self|`
    pub fn abs(&self) -> Self {
        Self::from_rational(self.to_rational().abs())
    }

    /// The sign of the value of this fraction.
    pub fn sign(&self) -> Ordering {
        self.to_rational().cmp0()
    }

    /// Returns true if the value of this fraction is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.cmp0() == Ordering::Equal
    }

    /// Returns true if the value of this fraction is a whole number.
    pub fn is_integer(&self) -> bool {
        self.to_rational().is_integer()
    }

    /// Returns the value of this fraction as an [`Integer`], if it is a whole number.
    pub fn to_integer(&self) -> Option<Integer> {
        let rational = self.to_rational();
        rational.is_integer().then(|| rational.into_numer_denom().0)
    }

    /// Approximates the value of this fraction as a float.
    ///
    /// This is only meant for display and rough comparisons. None of the arithmetic in this crate
    /// goes through floats.
    pub fn value(&self) -> f64 {
        self.to_rational().to_f64()
    }

    /// Returns true if the magnitude of the reduced numerator or denominator is greater than
    /// `limit`.
    pub fn exceeds(&self, limit: &Integer) -> bool {
        let rational = self.to_rational();
        rational.numer().cmp_abs(limit) == Ordering::Greater
            || rational.denom().cmp_abs(limit) == Ordering::Greater
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::integer(n)
    }
}

impl From<Integer> for Fraction {
    fn from(n: Integer) -> Self {
        Self::integer(n)
    }
}

impl From<Rational> for Fraction {
    fn from(rational: Rational) -> Self {
        Self::from_rational(rational)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.to_rational() == other.to_rational()
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_rational().cmp(&other.to_rational())
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rational = self.to_rational();
        if *rational.denom() == 1 {
            write!(f, "{}", rational.numer())
        } else {
            write!(f, "{}/{}", rational.numer(), rational.denom())
        }
    }
}

/// Implements a binary operator for every combination of owned and borrowed fractions, in terms of
/// the given method.
macro_rules! fraction_op {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl $trait<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $fn(self, rhs: &Fraction) -> Fraction {
                self.$method(rhs)
            }
        }

        impl $trait<Fraction> for Fraction {
            type Output = Fraction;

            fn $fn(self, rhs: Fraction) -> Fraction {
                self.$method(&rhs)
            }
        }

        impl $trait<&Fraction> for Fraction {
            type Output = Fraction;

            fn $fn(self, rhs: &Fraction) -> Fraction {
                self.$method(rhs)
            }
        }

        impl $trait<Fraction> for &Fraction {
            type Output = Fraction;

            fn $fn(self, rhs: Fraction) -> Fraction {
                self.$method(&rhs)
            }
        }
    };
}

fraction_op!(Add, add, plus);
fraction_op!(Sub, sub, minus);
fraction_op!(Mul, mul, times);

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negate()
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::{frac, int};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn reduce_normalizes_sign_and_gcd() {
        let f = Fraction::new(3, -6).reduce();
        assert_eq!(f.numerator(), &int(-1));
        assert_eq!(f.denominator(), &int(2));
        assert!(f.is_reduced());
        assert!(!Fraction::new(3, -6).is_reduced());
    }

    #[test]
    fn reduce_zero() {
        let f = Fraction::new(0, -7).reduce();
        assert_eq!(f.numerator(), &int(0));
        assert_eq!(f.denominator(), &int(1));
    }

    #[test]
    fn exact_round_trip() {
        assert_eq!(Fraction::new(3, 6).reduce(), frac(1, 2));
        assert_eq!(frac(1, 3).plus(&frac(1, 6)).reduce(), frac(1, 2));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(frac(1, 2).minus(&frac(3, 4)), frac(-1, 4));
        assert_eq!(frac(-2, 3).times(&frac(9, 4)), frac(-3, 2));
        assert_eq!(frac(2, 3).divided(&frac(-4, 9)).unwrap(), frac(-3, 2));
        assert_eq!(&frac(1, 2) + &frac(1, 2), Fraction::one());
        assert_eq!(-frac(5, 3), frac(-5, 3));
        assert_eq!(frac(-5, 3).abs(), frac(5, 3));
    }

    #[test]
    fn results_are_reduced() {
        let f = Fraction::new(2, 4).plus(&Fraction::new(6, 12));
        assert_eq!(f.numerator(), &int(1));
        assert_eq!(f.denominator(), &int(1));
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(frac(1, 2).divided(&Fraction::zero()), Err(DivisionByZero));
        assert_eq!(frac(1, 2).divided(&Fraction::new(0, 5)), Err(DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "denominator must not be zero")]
    fn zero_denominator() {
        Fraction::new(1, 0);
    }

    #[test]
    fn sign_and_integer() {
        assert_eq!(Fraction::new(1, -2).sign(), Ordering::Less);
        assert_eq!(Fraction::new(-1, -2).sign(), Ordering::Greater);
        assert_eq!(Fraction::zero().sign(), Ordering::Equal);
        assert!(Fraction::new(-8, 4).is_integer());
        assert!(!frac(7, 2).is_integer());
        assert_eq!(Fraction::new(-8, 4).to_integer(), Some(int(-2)));
        assert_eq!(frac(7, 2).to_integer(), None);
    }

    #[test]
    fn ordering_by_value() {
        assert!(frac(-1, 2) < frac(1, 3));
        assert!(Fraction::new(1, -2) < Fraction::new(1, 3));
        assert_eq!(Fraction::new(2, 4).cmp(&frac(1, 2)), Ordering::Equal);
    }

    #[test]
    fn exceeds_limit() {
        let limit = int(1_000_000_000);
        assert!(!Fraction::integer(999_999_999).exceeds(&limit));
        assert!(!Fraction::integer(-1_000_000_000).exceeds(&limit));
        assert!(Fraction::integer(1_000_000_001).exceeds(&limit));
        assert!(Fraction::new(1, 2_000_000_000).exceeds(&limit));
        // compared after reduction
        assert!(!Fraction::new(2_000_000_000, 4_000_000_000i64).exceeds(&limit));
    }

    #[test]
    fn display() {
        assert_eq!(frac(4, 2).to_string(), "2");
        assert_eq!(Fraction::new(3, -6).to_string(), "-1/2");
        assert_eq!(Fraction::zero().to_string(), "0");
    }

    #[test]
    fn rational_conversion() {
        let f = Fraction::new(6, -4);
        assert_eq!(f.to_rational(), Rational::from((-3, 2)));
        let back = Fraction::from(Rational::from((10, 4)));
        assert_eq!(back.numerator(), &int(5));
        assert_eq!(back.denominator(), &int(2));
    }

    #[test]
    fn value() {
        assert_eq!(frac(-7, 2).value(), -3.5);
    }
}
