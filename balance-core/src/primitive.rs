//! Functions to construct [`Integer`]s and [`Fraction`]s from various types.

use crate::fraction::Fraction;
use rug::Integer;

/// The default largest magnitude a numerator or denominator may reach before an operation is
/// rejected as an overflow.
pub const DEFAULT_MAX_INTEGER: u64 = 1_000_000_000;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Fraction`] with the given numerator and denominator. The result is reduced.
///
/// Panics if the denominator is zero.
pub fn frac(numerator: i64, denominator: i64) -> Fraction {
    Fraction::new(numerator, denominator).reduce()
}
