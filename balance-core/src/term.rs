//! Algebraic terms.
//!
//! A [`Term`] is an immutable value: every operation on a term returns a new term. Terms carry a
//! single exact [`Fraction`], their *significant value*, which is the constant itself for a
//! constant term and the coefficient for a variable term.

use crate::error::DivisionByZero;
use crate::fmt::write_sum;
use crate::fraction::Fraction;
use crate::operation::{Operator, UniversalOperation};
use crate::variable::{ObjectVariable, Variable};
use rug::Integer;
use std::{cmp::Ordering, fmt::{self, Display, Formatter}, rc::Rc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A constant, like `3` or `-1/2`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstantTerm {
    /// The value of the constant, in reduced form.
    pub constant_value: Fraction,
}

/// A multiple of a variable, like `2x` or `-3/4x`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableTerm {
    /// The coefficient of the variable, in reduced form.
    pub coefficient: Fraction,

    /// The variable this term is bound to.
    pub variable: Rc<Variable>,
}

impl PartialEq for VariableTerm {
    fn eq(&self, other: &Self) -> bool {
        self.coefficient == other.coefficient && Variable::same(&self.variable, &other.variable)
    }
}

impl Eq for VariableTerm {}

/// A single real-world object, such as one sphere on the scale.
///
/// This is a variable term whose coefficient is always 1. Object terms never take part in
/// universal operations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectTerm {
    /// The object this term stands for.
    pub object: Rc<ObjectVariable>,
}

impl PartialEq for ObjectTerm {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.object, &other.object)
    }
}

impl Eq for ObjectTerm {}

/// An algebraic term.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    /// A constant term.
    Constant(ConstantTerm),

    /// A term with a coefficient bound to a variable.
    Variable(VariableTerm),

    /// A term bound to an object variable, with an implicit coefficient of 1.
    Object(ObjectTerm),
}

impl Term {
    /// Creates a constant term. The value is reduced.
    pub fn constant(value: impl Into<Fraction>) -> Self {
        Term::Constant(ConstantTerm { constant_value: value.into().reduce() })
    }

    /// Creates a variable term. The coefficient is reduced.
    pub fn variable(coefficient: impl Into<Fraction>, variable: &Rc<Variable>) -> Self {
        Term::Variable(VariableTerm {
            coefficient: coefficient.into().reduce(),
            variable: Rc::clone(variable),
        })
    }

    /// Creates an object term.
    pub fn object(object: &Rc<ObjectVariable>) -> Self {
        Term::Object(ObjectTerm { object: Rc::clone(object) })
    }

    /// The constant term `0`.
    pub fn zero_constant() -> Self {
        Self::constant(Fraction::zero())
    }

    /// The variable term `0x`.
    pub fn zero_variable(variable: &Rc<Variable>) -> Self {
        Self::variable(Fraction::zero(), variable)
    }

    /// Returns the typename of this term.
    pub fn typename(&self) -> &'static str {
        match self {
            Term::Constant(_) => "ConstantTerm",
            Term::Variable(_) => "VariableTerm",
            Term::Object(_) => "ObjectTerm",
        }
    }

    /// The constant value of a constant term, or the coefficient of a variable-bound term.
    pub fn significant_value(&self) -> Fraction {
        match self {
            Term::Constant(term) => term.constant_value.reduce(),
            Term::Variable(term) => term.coefficient.reduce(),
            Term::Object(_) => Fraction::one(),
        }
    }

    /// The sign of the significant value.
    pub fn sign(&self) -> Ordering {
        self.significant_value().sign()
    }

    /// Returns true if the significant value is zero.
    pub fn is_zero(&self) -> bool {
        self.significant_value().is_zero()
    }

    /// The variable this term is bound to, if any. For an object term, this is the object's
    /// underlying variable.
    pub fn bound_variable(&self) -> Option<&Rc<Variable>> {
        match self {
            Term::Constant(_) => None,
            Term::Variable(term) => Some(&term.variable),
            Term::Object(term) => Some(&term.object.variable),
        }
    }

    /// Returns true if the terms can be combined: both are constants, or both are bound to the
    /// same variable.
    pub fn is_like_term(&self, other: &Term) -> bool {
        match (self.bound_variable(), other.bound_variable()) {
            (None, None) => true,
            (Some(a), Some(b)) => Variable::same(a, b),
            _ => false,
        }
    }

    /// Returns true if the terms are like terms whose significant values sum to zero.
    pub fn is_inverse_term(&self, other: &Term) -> bool {
        self.is_like_term(other)
            && self.significant_value().plus(&other.significant_value()).is_zero()
    }

    /// Returns true if the terms are like terms with equal significant values.
    pub fn is_equivalent_term(&self, other: &Term) -> bool {
        self.is_like_term(other) && self.significant_value() == other.significant_value()
    }

    /// The weight this term puts on the scale: the constant value, or the coefficient multiplied
    /// by the current value of the variable.
    pub fn weight(&self) -> Fraction {
        match self.bound_variable() {
            None => self.significant_value(),
            Some(variable) => self.significant_value().times(&Fraction::from(variable.value())),
        }
    }

    /// Returns true if the numerator or denominator of the significant value is larger in
    /// magnitude than `limit`.
    pub fn max_integer_exceeded(&self, limit: &Integer) -> bool {
        self.significant_value().exceeds(limit)
    }

    /// Creates a term of the same shape as this one with the given significant value. Object
    /// terms become variable terms, since their coefficient is fixed.
    fn with_significant_value(&self, value: Fraction) -> Term {
        match self {
            Term::Constant(_) => Term::constant(value),
            Term::Variable(term) => Term::variable(value, &term.variable),
            Term::Object(term) => Term::variable(value, &term.object.variable),
        }
    }

    /// `-self`
    pub fn negate(&self) -> Term {
        self.with_significant_value(self.significant_value().negate())
    }

    /// Adds a like term.
    ///
    /// Panics if the terms are not like terms.
    pub fn plus(&self, other: &Term) -> Term {
        assert!(self.is_like_term(other), "cannot add `{}` and `{}`, they are not like terms", self, other);
        self.with_significant_value(self.significant_value().plus(&other.significant_value()))
    }

    /// Subtracts a like term.
    ///
    /// Panics if the terms are not like terms.
    pub fn minus(&self, other: &Term) -> Term {
        assert!(self.is_like_term(other), "cannot subtract `{}` from `{}`, they are not like terms", other, self);
        self.with_significant_value(self.significant_value().minus(&other.significant_value()))
    }

    /// Returns the constant value of `operand`, panicking if it is not a constant term or if this
    /// term is an object term.
    fn scalar_operand<'a>(&self, operand: &'a Term, verb: &str) -> &'a Fraction {
        if let Term::Object(_) = self {
            panic!("cannot {} the object term `{}`", verb, self);
        }
        match operand {
            Term::Constant(constant) => &constant.constant_value,
            _ => panic!("cannot {} `{}` by the {} `{}`", verb, self, operand.typename(), operand),
        }
    }

    /// Multiplies by a constant term.
    ///
    /// Panics if `operand` is not a constant term, or if this is an object term.
    pub fn times(&self, operand: &Term) -> Term {
        let value = self.scalar_operand(operand, "multiply");
        self.with_significant_value(self.significant_value().times(value))
    }

    /// Divides by a constant term. Returns [`Err`] if the constant is zero.
    ///
    /// Panics if `operand` is not a constant term, or if this is an object term.
    pub fn divided(&self, operand: &Term) -> Result<Term, DivisionByZero> {
        let value = self.scalar_operand(operand, "divide");
        Ok(self.with_significant_value(self.significant_value().divided(value)?))
    }

    /// Applies a universal operation to this term.
    ///
    /// Returns `Ok(None)` if the operation does not apply to this kind of term. Adding or
    /// subtracting applies only to like terms, and multiplying or dividing applies only when the
    /// operand is a constant. Object terms never take part in universal operations.
    pub fn apply_operation(&self, operation: &UniversalOperation) -> Result<Option<Term>, DivisionByZero> {
        let operand = operation.operand();
        match (self, operation.operator(), operand) {
            (Term::Object(_), _, _) => Ok(None),
            (_, Operator::Plus, _) if self.is_like_term(operand) => Ok(Some(self.plus(operand))),
            (_, Operator::Minus, _) if self.is_like_term(operand) => Ok(Some(self.minus(operand))),
            (_, Operator::Times, Term::Constant(_)) => Ok(Some(self.times(operand))),
            (_, Operator::Divide, Term::Constant(_)) => self.divided(operand).map(Some),
            _ => Ok(None),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Object(term) => f.write_str(term.object.variable.symbol()),
            _ => {
                let value = self.significant_value();
                let symbol = self.bound_variable().map(|variable| variable.symbol());
                if value.is_zero() {
                    // keep the symbol visible for a zero variable term
                    match symbol {
                        Some(symbol) => write!(f, "0{}", symbol),
                        None => f.write_str("0"),
                    }
                } else {
                    write_sum(f, [(&value, symbol)])
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::{frac, int};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn like_terms() {
        let x = Variable::new("x", 2);
        let y = Variable::new("y", 3);
        assert!(Term::constant(3).is_like_term(&Term::constant(frac(-1, 2))));
        assert!(Term::variable(2, &x).is_like_term(&Term::variable(5, &x)));
        assert!(!Term::variable(2, &x).is_like_term(&Term::variable(2, &y)));
        assert!(!Term::variable(2, &x).is_like_term(&Term::constant(2)));
        assert!(!Term::constant(2).is_like_term(&Term::variable(2, &x)));
    }

    #[test]
    fn inverse_and_equivalent() {
        let x = Variable::new("x", 2);
        let y = Variable::new("y", 2);
        let two_x = Term::variable(2, &x);
        assert!(two_x.is_like_term(&Term::variable(-2, &x)));
        assert!(two_x.is_inverse_term(&Term::variable(-2, &x)));
        assert!(!two_x.is_like_term(&Term::variable(2, &y)));
        assert!(!two_x.is_inverse_term(&Term::variable(-2, &y)));
        assert!(two_x.is_equivalent_term(&Term::variable(Fraction::new(4, 2), &x)));
        assert!(!two_x.is_equivalent_term(&Term::variable(2, &y)));
    }

    #[test]
    fn object_terms_are_like_their_variable() {
        let x = Variable::new("x", 4);
        let sphere = ObjectVariable::new(Rc::clone(&x), "sphere.png", "sphere-shadow.png");
        let object = Term::object(&sphere);
        assert!(object.is_like_term(&Term::variable(3, &x)));
        assert_eq!(object.significant_value(), Fraction::one());
        assert_eq!(object.weight(), Fraction::from(4));

        let combined = object.plus(&Term::object(&sphere));
        assert_eq!(combined, Term::variable(2, &x));
    }

    #[test]
    fn weight() {
        let x = Variable::new("x", 6);
        assert_eq!(Term::variable(frac(-7, 2), &x).weight(), Fraction::from(-21));
        assert_eq!(Term::constant(frac(4, 3)).weight(), frac(4, 3));
        x.set_value(-2).unwrap();
        assert_eq!(Term::variable(frac(-7, 2), &x).weight(), Fraction::from(7));
    }

    #[test]
    fn arithmetic() {
        let x = Variable::new("x", 1);
        assert_eq!(Term::variable(5, &x).minus(&Term::variable(7, &x)), Term::variable(-2, &x));
        assert_eq!(Term::constant(3).plus(&Term::constant(frac(1, 2))), Term::constant(frac(7, 2)));
        assert_eq!(Term::variable(3, &x).times(&Term::constant(frac(2, 3))), Term::variable(2, &x));
        assert_eq!(Term::constant(3).divided(&Term::constant(-6)).unwrap(), Term::constant(frac(-1, 2)));
        assert_eq!(Term::variable(3, &x).divided(&Term::constant(0)), Err(DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "not like terms")]
    fn plus_non_like_terms() {
        let x = Variable::new("x", 1);
        Term::variable(1, &x).plus(&Term::constant(1));
    }

    #[test]
    #[should_panic(expected = "by the VariableTerm")]
    fn times_variable_operand() {
        let x = Variable::new("x", 1);
        Term::variable(1, &x).times(&Term::variable(2, &x));
    }

    #[test]
    fn apply_operation() {
        let x = Variable::new("x", 1);
        let y = Variable::new("y", 1);
        let constant = Term::constant(4);
        let variable = Term::variable(2, &x);

        let plus_three = UniversalOperation::new(Operator::Plus, Term::constant(3));
        assert_eq!(constant.apply_operation(&plus_three), Ok(Some(Term::constant(7))));
        assert_eq!(variable.apply_operation(&plus_three), Ok(None));

        let minus_x = UniversalOperation::new(Operator::Minus, Term::variable(1, &x));
        assert_eq!(constant.apply_operation(&minus_x), Ok(None));
        assert_eq!(variable.apply_operation(&minus_x), Ok(Some(Term::variable(1, &x))));

        let plus_y = UniversalOperation::new(Operator::Plus, Term::variable(1, &y));
        assert_eq!(variable.apply_operation(&plus_y), Ok(None));

        let times_half = UniversalOperation::new(Operator::Times, Term::constant(frac(1, 2)));
        assert_eq!(constant.apply_operation(&times_half), Ok(Some(Term::constant(2))));
        assert_eq!(variable.apply_operation(&times_half), Ok(Some(Term::variable(1, &x))));

        let times_x = UniversalOperation::new(Operator::Times, Term::variable(1, &x));
        assert_eq!(variable.apply_operation(&times_x), Ok(None));

        let divide_zero = UniversalOperation::new(Operator::Divide, Term::constant(0));
        assert_eq!(constant.apply_operation(&divide_zero), Err(DivisionByZero));
    }

    #[test]
    fn object_terms_never_apply() {
        let x = Variable::new("x", 1);
        let sphere = ObjectVariable::new(Rc::clone(&x), "sphere.png", "sphere-shadow.png");
        let plus_x = UniversalOperation::new(Operator::Plus, Term::variable(1, &x));
        assert_eq!(Term::object(&sphere).apply_operation(&plus_x), Ok(None));
    }

    #[test]
    fn max_integer_exceeded() {
        let limit = int(1_000_000_000);
        assert!(!Term::constant(999_999_999).max_integer_exceeded(&limit));
        assert!(Term::constant(Fraction::new(1, 1_000_000_001)).max_integer_exceeded(&limit));
    }

    #[test]
    fn display() {
        let x = Variable::new("x", 1);
        assert_eq!(Term::variable(1, &x).to_string(), "x");
        assert_eq!(Term::variable(-1, &x).to_string(), "-x");
        assert_eq!(Term::variable(frac(3, 4), &x).to_string(), "3/4x");
        assert_eq!(Term::variable(0, &x).to_string(), "0x");
        assert_eq!(Term::constant(frac(-1, 2)).to_string(), "-1/2");
    }
}
