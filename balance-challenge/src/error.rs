//! Errors reported while reading a debug challenge.

use ariadne::{Fmt, Report};
use balance_error::{report, ErrorKind, EXPR};
use std::ops::Range;

/// The debug challenge does not have exactly nine elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongElementCount {
    /// The number of elements that were found.
    pub found: usize,
}

impl ErrorKind for WrongElementCount {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("expected 9 integers, found {}", self.found),
            &["this challenge".to_string()],
            Some(format!(
                "a challenge is written as: {}",
                "a_num,a_den,b_num,b_den,m_num,m_den,n_num,n_den,x".fg(EXPR),
            )),
        )
    }
}

/// An element of the debug challenge is not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotAnInteger {
    /// The text of the element.
    pub element: String,
}

impl ErrorKind for NotAnInteger {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("`{}` is not an integer", self.element),
            &["this element".to_string()],
            None,
        )
    }
}

/// A denominator in the debug challenge is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroDenominator {
    /// The coefficient whose denominator is zero: `a`, `b`, `m` or `n`.
    pub coefficient: &'static str,
}

impl ErrorKind for ZeroDenominator {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("the denominator of `{}` is zero", self.coefficient),
            &["this denominator".to_string()],
            None,
        )
    }
}

/// The two sides of the debug challenge are not equal at the given `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbalancedChallenge {
    /// The value of `a·x + b`.
    pub left: String,

    /// The value of `m·x + n`.
    pub right: String,
}

impl ErrorKind for UnbalancedChallenge {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "the sides of this challenge are not equal",
            &[format!("the left side is {}, but the right side is {}", self.left, self.right)],
            Some(format!("`{}` must equal `{}`", "a·x + b".fg(EXPR), "m·x + n".fg(EXPR))),
        )
    }
}
