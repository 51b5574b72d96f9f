//! Formatting helpers shared by terms, scales and challenges.

use crate::fraction::Fraction;
use std::{cmp::Ordering, fmt::{self, Formatter}};

/// Writes a sum of terms such as `-x + 3/4` or `2x - 5`.
///
/// Each term is given as a coefficient and an optional variable symbol. Terms with a zero
/// coefficient are skipped, and a coefficient of `1` or `-1` in front of a symbol is elided. If
/// every term is skipped, `0` is written.
pub fn write_sum<'a>(
    f: &mut Formatter<'_>,
    terms: impl IntoIterator<Item = (&'a Fraction, Option<&'a str>)>,
) -> fmt::Result {
    let mut first = true;
    for (coefficient, symbol) in terms {
        if coefficient.is_zero() {
            continue;
        }

        let negative = coefficient.sign() == Ordering::Less;
        if first {
            if negative {
                f.write_str("-")?;
            }
        } else {
            f.write_str(if negative { " - " } else { " + " })?;
        }
        first = false;

        let magnitude = coefficient.abs();
        match symbol {
            Some(symbol) if magnitude == Fraction::one() => f.write_str(symbol)?,
            Some(symbol) => write!(f, "{}{}", magnitude, symbol)?,
            None => write!(f, "{}", magnitude)?,
        }
    }

    if first {
        f.write_str("0")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::primitive::frac;
    use pretty_assertions::assert_eq;
    use std::fmt::Display;
    use super::*;

    struct Sum(Vec<(Fraction, Option<&'static str>)>);

    impl Display for Sum {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write_sum(f, self.0.iter().map(|(c, s)| (c, *s)))
        }
    }

    #[test]
    fn signs_and_coefficients() {
        let sum = Sum(vec![(frac(-1, 1), Some("x")), (frac(3, 4), None)]);
        assert_eq!(sum.to_string(), "-x + 3/4");

        let sum = Sum(vec![(frac(2, 1), Some("x")), (frac(-5, 1), None)]);
        assert_eq!(sum.to_string(), "2x - 5");

        let sum = Sum(vec![(frac(-7, 2), Some("x"))]);
        assert_eq!(sum.to_string(), "-7/2x");
    }

    #[test]
    fn zero_terms_are_skipped() {
        let sum = Sum(vec![(frac(0, 1), Some("x")), (frac(4, 1), None)]);
        assert_eq!(sum.to_string(), "4");

        let sum = Sum(vec![(frac(0, 1), Some("x")), (frac(0, 1), None)]);
        assert_eq!(sum.to_string(), "0");
    }
}
