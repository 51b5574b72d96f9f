//! Error kinds produced by the engine.
//!
//! Only [`Overflow`] is expected to reach an end user during normal use. The other kinds indicate
//! that the host offered an operation it should have filtered out, or passed a value the model
//! rejects.

use ariadne::{Fmt, Report};
use balance_error::{report, ErrorKind, EXPR};
use rug::Integer;
use std::ops::Range;

/// Attempted to divide by a zero-valued fraction or term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionByZero;

impl ErrorKind for DivisionByZero {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "cannot divide by zero",
            &["this operand is zero".to_string()],
            None,
        )
    }
}

/// Why a [`UniversalOperation`] is not supported.
///
/// [`UniversalOperation`]: crate::operation::UniversalOperation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// Dividing by a zero constant.
    DivideByZero,

    /// Multiplying by a zero constant while `allow_times_zero` is disabled.
    TimesZero,

    /// Multiplying or dividing by a variable term, which would leave the linear model.
    VariableOperand,
}

impl UnsupportedReason {
    /// A short explanation suitable for the help line of a report.
    pub fn help(self) -> &'static str {
        match self {
            Self::DivideByZero => "dividing by zero is undefined",
            Self::TimesZero => "multiplying by zero would clear both sides of the equation",
            Self::VariableOperand => "terms can only be multiplied or divided by a constant",
        }
    }
}

/// The operation cannot be applied to both sides of the equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedOperation {
    /// The operation that was attempted, formatted for display.
    pub operation: String,

    /// Why the operation was rejected.
    pub reason: UnsupportedReason,
}

impl ErrorKind for UnsupportedOperation {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("cannot apply `{}` to both sides", self.operation),
            &["this operator".to_string(), "this operand".to_string()],
            Some(self.reason.help().to_string()),
        )
    }
}

/// Applying the operation made a numerator or denominator larger than the configured limit. The
/// operation was rolled back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overflow {
    /// The operation that was attempted, formatted for display.
    pub operation: String,

    /// The limit that was exceeded.
    pub max_integer: Integer,
}

impl ErrorKind for Overflow {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "the numbers got too big",
            &[format!("applying `{}` was undone", (&self.operation).fg(EXPR))],
            Some(format!(
                "numerators and denominators must stay within {}",
                self.max_integer,
            )),
        )
    }
}

/// The value is outside the range of the variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRange {
    /// The symbol of the variable.
    pub symbol: String,

    /// The value that was rejected.
    pub value: i64,

    /// The smallest allowed value.
    pub min: i64,

    /// The largest allowed value.
    pub max: i64,
}

impl ErrorKind for OutOfRange {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("`{}` cannot be {}", self.symbol, self.value),
            &["this value".to_string()],
            Some(format!("choose a value from {} to {}", self.min, self.max)),
        )
    }
}

/// The operator symbol is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator {
    /// The text that was found.
    pub found: String,
}

impl ErrorKind for UnknownOperator {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("`{}` is not an operator", self.found),
            &["expected one of `+`, `-`, `*`, `/`".to_string()],
            None,
        )
    }
}
