//! Universal operations: an operator and an operand applied to both sides of the equation.

use crate::config::EngineConfig;
use crate::error::{UnknownOperator, UnsupportedReason};
use crate::term::Term;
use std::{fmt::{self, Display, Formatter}, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
}

impl Operator {
    /// All operators, in the order they are usually offered.
    pub const ALL: [Operator; 4] = [Operator::Plus, Operator::Minus, Operator::Times, Operator::Divide];

    /// The symbol used to display the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "×",
            Operator::Divide => "÷",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Plus),
            "-" | "−" => Ok(Operator::Minus),
            "*" | "x" | "×" => Ok(Operator::Times),
            "/" | "÷" => Ok(Operator::Divide),
            _ => Err(UnknownOperator { found: s.to_string() }),
        }
    }
}

/// An operation applied to every term on both sides of the equation, such as `× 2` or `- 3x`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniversalOperation {
    operator: Operator,
    operand: Term,
}

impl UniversalOperation {
    /// Creates a new operation.
    ///
    /// Panics if the operand is an object term; operands are always constant or variable terms.
    pub fn new(operator: Operator, operand: Term) -> Self {
        assert!(
            !matches!(operand, Term::Object(_)),
            "the operand of a universal operation cannot be an object term",
        );
        Self { operator, operand }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> &Term {
        &self.operand
    }
}

impl Display for UniversalOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.operand)
    }
}

/// Checks whether the operator and operand can be applied to both sides of the equation,
/// returning the reason if not.
///
/// Division by zero is never supported, and neither is multiplying or dividing by a variable
/// term. Multiplication by zero is supported only if [`EngineConfig::allow_times_zero`] is set.
pub fn check_supported(
    operator: Operator,
    operand: &Term,
    config: &EngineConfig,
) -> Result<(), UnsupportedReason> {
    match (operator, operand) {
        (Operator::Times | Operator::Divide, Term::Variable(_) | Term::Object(_)) => {
            Err(UnsupportedReason::VariableOperand)
        },
        (Operator::Divide, _) if operand.is_zero() => Err(UnsupportedReason::DivideByZero),
        (Operator::Times, _) if operand.is_zero() && !config.allow_times_zero => {
            Err(UnsupportedReason::TimesZero)
        },
        _ => Ok(()),
    }
}

/// Returns true if the operator and operand can be applied to both sides of the equation. See
/// [`check_supported`].
pub fn is_supported_operation(operator: Operator, operand: &Term, config: &EngineConfig) -> bool {
    check_supported(operator, operand, config).is_ok()
}
