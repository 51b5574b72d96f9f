//! Errors in the commands typed into the host.

use ariadne::{Fmt, Report};
use balance_error::{report, ErrorKind, EXPR};
use std::ops::Range;

/// The first word of the line is not a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand {
    pub name: String,
}

impl ErrorKind for UnknownCommand {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("unknown command `{}`", self.name),
            &["this command".to_string()],
            Some(format!("type `{}` to see the available commands", "help".fg(EXPR))),
        )
    }
}

/// A command was given without its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingArgument {
    pub command: String,

    /// A description of the argument, such as `a level from 1 to 5`.
    pub expected: &'static str,
}

impl ErrorKind for MissingArgument {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("missing argument to `{}`", self.command),
            &[format!("expected {} after this", self.expected)],
            None,
        )
    }
}

/// A command that takes no argument was given one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedArgument {
    pub command: String,
}

impl ErrorKind for UnexpectedArgument {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("`{}` does not take an argument", self.command),
            &["remove this".to_string()],
            None,
        )
    }
}

/// An argument is not the number the command expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNumber {
    pub found: String,
    pub expected: &'static str,
}

impl ErrorKind for InvalidNumber {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("`{}` is not {}", self.found, self.expected),
            &[format!("expected {}", self.expected)],
            None,
        )
    }
}

/// The operand of an operation is not a number or a multiple of `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOperand {
    pub found: String,
}

impl ErrorKind for InvalidOperand {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("`{}` is not a valid operand", self.found),
            &["this operand".to_string()],
            Some(format!(
                "an operand is a number such as {} or {}, or a multiple of x such as {}",
                "3".fg(EXPR),
                "-1/2".fg(EXPR),
                "2x".fg(EXPR),
            )),
        )
    }
}

/// There is no snapshot at the requested place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSnapshot {
    pub index: usize,
}

impl ErrorKind for NoSnapshot {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("there is no snapshot at place {}", self.index),
            &["this place is empty".to_string()],
            Some(format!("type `{}` to save one", "save".fg(EXPR))),
        )
    }
}

/// Every snapshot place is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotsFull {
    pub capacity: usize,
}

impl ErrorKind for SnapshotsFull {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("all {} snapshot places are taken", self.capacity),
            &[],
            Some(format!("type `{}` to start over with no snapshots", "clear".fg(EXPR))),
        )
    }
}

/// A coefficient of a loaded challenge is already past the overflow limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeTooLarge {
    /// The name of the coefficient, such as `n`.
    pub coefficient: &'static str,
    pub max_integer: String,
}

impl ErrorKind for ChallengeTooLarge {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("coefficient `{}` of this challenge is too big", self.coefficient),
            &["this challenge".to_string()],
            Some(format!("numerators and denominators must stay within {}", self.max_integer)),
        )
    }
}
