//! Parsing of the commands typed into the host.

use balance_challenge::{Challenge, Level};
use balance_core::{error::DivisionByZero, Fraction, Operator};
use balance_error::Error;
use crate::error::{InvalidNumber, InvalidOperand, MissingArgument, UnexpectedArgument, UnknownCommand};
use std::ops::Range;

/// Characters that start a universal operation.
const OPERATOR_CHARS: [char; 7] = ['+', '-', '−', '*', '×', '/', '÷'];

/// The operand of a universal operation: a number, or a multiple of `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub coefficient: Fraction,

    /// Whether the operand is a multiple of the variable.
    pub variable: bool,
}

/// A command typed into the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply an operation to both sides of the scale, such as `+ 3` or `/ 2x`.
    Apply {
        operator: Operator,
        operand: Operand,

        /// The region of the line holding the operation.
        span: Range<usize>,
    },

    /// Generate the next challenge of the current level.
    New,

    /// Switch to another level and generate a challenge for it.
    Level(Level),

    /// Load a debug challenge.
    Challenge {
        challenge: Challenge,

        /// The region of the line holding the challenge.
        span: Range<usize>,
    },

    /// Set the value of `x`.
    SetVariable {
        value: i64,
        span: Range<usize>,
    },

    Show,
    Derivation,
    Save,
    Restore {
        index: usize,
        span: Range<usize>,
    },
    History,
    Clear,
    Help,
    Quit,
}

/// A word of the line and where it is.
struct Word<'a> {
    text: &'a str,
    span: Range<usize>,
}

/// Returns the first word of `input` (starting at byte `offset` of the line) and the rest of the
/// input after it, both trimmed.
fn split_word(input: &str, offset: usize) -> (Word<'_>, Word<'_>) {
    let leading = input.len() - input.trim_start().len();
    let trimmed = input.trim();
    let start = offset + leading;
    let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let rest = &trimmed[end..];
    let rest_start = start + end + (rest.len() - rest.trim_start().len());
    let rest = rest.trim_start();
    (
        Word { text: &trimmed[..end], span: start..start + end },
        Word { text: rest, span: rest_start..rest_start + rest.len() },
    )
}

/// Parses a line typed into the host. Returns [`None`] for blank lines and for comments, which
/// start with `#`.
pub fn parse(input: &str) -> Result<Option<Command>, Error> {
    let (name, rest) = split_word(input, 0);
    let rest = &rest;
    let Some(first) = name.text.chars().next() else {
        return Ok(None);
    };
    if first == '#' {
        return Ok(None);
    }

    if OPERATOR_CHARS.contains(&first) {
        return parse_operation(input).map(Some);
    }

    let no_argument = |command: Command| {
        if rest.text.is_empty() {
            Ok(command)
        } else {
            Err(Error::new(vec![rest.span.clone()], UnexpectedArgument { command: name.text.to_string() }))
        }
    };
    let argument = |expected: &'static str| {
        if rest.text.is_empty() {
            Err(Error::new(
                vec![name.span.clone()],
                MissingArgument { command: name.text.to_string(), expected },
            ))
        } else {
            Ok(rest)
        }
    };

    let command = match name.text {
        "new" => no_argument(Command::New)?,
        "show" => no_argument(Command::Show)?,
        "derivation" => no_argument(Command::Derivation)?,
        "save" => no_argument(Command::Save)?,
        "history" => no_argument(Command::History)?,
        "clear" => no_argument(Command::Clear)?,
        "help" => no_argument(Command::Help)?,
        "quit" | "exit" => no_argument(Command::Quit)?,
        "level" => {
            let expected = "a level from 1 to 5";
            let arg = argument(expected)?;
            let level = arg.text.parse::<u8>()
                .ok()
                .and_then(Level::from_number)
                .ok_or_else(|| invalid_number(arg, expected))?;
            Command::Level(level)
        },
        "x" => {
            let expected = "an integer";
            let arg = argument(expected)?;
            let value = arg.text.parse::<i64>().map_err(|_| invalid_number(arg, expected))?;
            Command::SetVariable { value, span: arg.span.clone() }
        },
        "restore" => {
            let expected = "a snapshot place";
            let arg = argument(expected)?;
            let index = arg.text.parse::<usize>().map_err(|_| invalid_number(arg, expected))?;
            Command::Restore { index, span: arg.span.clone() }
        },
        "challenge" => {
            let arg = argument("nine comma-separated integers")?;
            let challenge = Challenge::from_debug_str(arg.text)
                .map_err(|err| shift_spans(err, arg.span.start))?;
            Command::Challenge { challenge, span: arg.span.clone() }
        },
        _ => return Err(Error::new(vec![name.span.clone()], UnknownCommand { name: name.text.to_string() })),
    };
    Ok(Some(command))
}

fn invalid_number(word: &Word<'_>, expected: &'static str) -> Error {
    Error::new(vec![word.span.clone()], InvalidNumber { found: word.text.to_string(), expected })
}

/// Moves the spans of an error reported against part of the line so they point into the line.
fn shift_spans(mut err: Error, offset: usize) -> Error {
    err.spans.iter_mut().for_each(|span| *span = span.start + offset..span.end + offset);
    err
}

/// Parses an operation such as `+ 3`, `- 2x`, `* -1/2` or `/4`.
fn parse_operation(input: &str) -> Result<Command, Error> {
    let start = input.len() - input.trim_start().len();
    let line = input.trim();
    let span = start..start + line.len();

    // the operator is always a single character
    let symbol_len = line.chars().next().map_or(0, char::len_utf8);
    let operator = line[..symbol_len].parse::<Operator>()
        .map_err(|err| Error::new(vec![start..start + symbol_len], err))?;

    let rest = &line[symbol_len..];
    let operand_start = start + symbol_len + (rest.len() - rest.trim_start().len());
    let text = rest.trim();
    let operand_span = operand_start..operand_start + text.len();
    if text.is_empty() {
        return Err(Error::new(
            vec![start..start + symbol_len],
            MissingArgument { command: operator.symbol().to_string(), expected: "an operand" },
        ));
    }

    let operand = parse_operand(text, operand_span)?;
    Ok(Command::Apply { operator, operand, span })
}

/// Parses an operand: an integer or fraction, optionally followed by `x`.
fn parse_operand(text: &str, span: Range<usize>) -> Result<Operand, Error> {
    let invalid = || Error::new(vec![span.clone()], InvalidOperand { found: text.to_string() });

    let (coefficient, variable) = match text.strip_suffix('x') {
        Some(coefficient) => (coefficient.trim_end(), true),
        None => (text, false),
    };

    let coefficient = match coefficient {
        "" | "+" if variable => Fraction::one(),
        "-" if variable => Fraction::from(-1),
        _ => {
            let (numerator, denominator) = coefficient.split_once('/')
                .map(|(n, d)| (n.trim(), d.trim()))
                .unwrap_or((coefficient, "1"));
            let numerator = numerator.parse::<i64>().map_err(|_| invalid())?;
            let denominator = denominator.parse::<i64>().map_err(|_| invalid())?;
            if denominator == 0 {
                return Err(Error::new(vec![span], DivisionByZero));
            }
            Fraction::new(numerator, denominator).reduce()
        },
    };

    Ok(Operand { coefficient, variable })
}

#[cfg(test)]
mod tests {
    use balance_core::primitive::frac;
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse_ok(input: &str) -> Command {
        parse(input).unwrap().unwrap()
    }

    fn report(input: &str) -> String {
        let err = parse(input).unwrap_err();
        let report = err.report_to_string("input", input).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(report)).unwrap()
    }

    #[test]
    fn operations() {
        assert_eq!(parse_ok("+ 3"), Command::Apply {
            operator: Operator::Plus,
            operand: Operand { coefficient: Fraction::from(3), variable: false },
            span: 0..3,
        });
        assert_eq!(parse_ok("  - 2x"), Command::Apply {
            operator: Operator::Minus,
            operand: Operand { coefficient: Fraction::from(2), variable: true },
            span: 2..6,
        });
        assert_eq!(parse_ok("* -1/2"), Command::Apply {
            operator: Operator::Times,
            operand: Operand { coefficient: frac(-1, 2), variable: false },
            span: 0..6,
        });
        assert_eq!(parse_ok("/4"), Command::Apply {
            operator: Operator::Divide,
            operand: Operand { coefficient: Fraction::from(4), variable: false },
            span: 0..2,
        });
        assert_eq!(parse_ok("÷ -x"), Command::Apply {
            operator: Operator::Divide,
            operand: Operand { coefficient: Fraction::from(-1), variable: true },
            span: 0..5,
        });
        assert_eq!(parse_ok("+ 3/4 x"), Command::Apply {
            operator: Operator::Plus,
            operand: Operand { coefficient: frac(3, 4), variable: true },
            span: 0..7,
        });
    }

    #[test]
    fn words() {
        assert_eq!(parse_ok("new"), Command::New);
        assert_eq!(parse_ok("level 4"), Command::Level(Level::Four));
        assert_eq!(parse_ok("x -12"), Command::SetVariable { value: -12, span: 2..5 });
        assert_eq!(parse_ok("restore 2"), Command::Restore { index: 2, span: 8..9 });
        assert_eq!(parse_ok(" quit "), Command::Quit);
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   # a comment").unwrap(), None);
    }

    #[test]
    fn challenge() {
        let Command::Challenge { challenge, span } = parse_ok("challenge -7,2,4,1,0,1,-17,1,6") else {
            panic!("expected a challenge");
        };
        assert_eq!(span, 10..30);
        assert_eq!(challenge.x(), 6);
        assert_eq!(challenge.a(), &frac(-7, 2));
    }

    #[test]
    fn challenge_error_points_into_line() {
        let err = parse("challenge 1,1,0,1,0,0,5,1,5").unwrap_err();
        assert_eq!(err.spans, vec![20..21]);
    }

    #[test]
    fn unknown_command() {
        let err = parse("solve").unwrap_err();
        assert_eq!(err.spans, vec![0..5]);
        assert!(report("solve").contains("unknown command `solve`"));
    }

    #[test]
    fn bad_arguments() {
        assert!(report("level 6").contains("`6` is not a level from 1 to 5"));
        assert!(report("level").contains("missing argument to `level`"));
        assert!(report("show me").contains("`show` does not take an argument"));
        assert!(report("x 1.5").contains("`1.5` is not an integer"));
    }

    #[test]
    fn bad_operands() {
        assert!(report("+ 2y").contains("`2y` is not a valid operand"));
        assert!(report("* 1/0").contains("cannot divide by zero"));
        assert!(report("+").contains("missing argument to `+`"));
        assert_eq!(parse("/ 3/0x").unwrap_err().spans, vec![2..6]);
    }
}
