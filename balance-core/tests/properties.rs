//! Property-based invariant tests for fractions, terms and the operation engine.
//!
//! 1. Reduction is idempotent and produces a positive, coprime denominator.
//! 2. Arithmetic results are reduced and agree with cross-multiplication.
//! 3. Like-term checks are symmetric.
//! 4. Applying a supported operation to a balanced scale keeps it balanced, or reports overflow
//!    and leaves the scale untouched.
//! 5. Unsupported operations never change the scale.

use balance_core::{
    ApplyError,
    Engine,
    EngineConfigBuilder,
    Fraction,
    Operator,
    Scale,
    Side,
    Term,
    UniversalOperation,
    Variable,
};
use proptest::prelude::*;
use rug::Integer;
use std::{cmp::Ordering, rc::Rc};

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

fn fraction_strategy() -> impl Strategy<Value = (i64, i64)> {
    (-10_000i64..=10_000, (-500i64..=500).prop_filter("non-zero denominator", |d| *d != 0))
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Plus),
        Just(Operator::Minus),
        Just(Operator::Times),
        Just(Operator::Divide),
    ]
}

/// A balanced equation `ax + b = mx + n` at the given `x`, described by `(x, a, b, m)`; `n` is
/// derived.
fn equation_strategy() -> impl Strategy<Value = (i64, i64, i64, i64)> {
    (-40i64..=40, -10i64..=10, -10i64..=10, -10i64..=10)
}

fn build_engine(x: &Rc<Variable>, a: i64, b: i64, m: i64, max_integer: i64) -> Engine {
    let n = (a - m) * x.value() + b;
    let mut scale = Scale::new(x);
    scale.plate_mut(Side::Left).add_term(Term::variable(a, x));
    scale.plate_mut(Side::Left).add_term(Term::constant(b));
    scale.plate_mut(Side::Right).add_term(Term::variable(m, x));
    scale.plate_mut(Side::Right).add_term(Term::constant(n));
    Engine::new(scale, EngineConfigBuilder::new().max_integer(max_integer).build())
}

proptest! {
    #[test]
    fn reduction_is_idempotent((p, q) in fraction_strategy()) {
        let once = Fraction::new(p, q).reduce();
        let twice = once.reduce();
        prop_assert_eq!(once.numerator(), twice.numerator());
        prop_assert_eq!(once.denominator(), twice.denominator());
        prop_assert!(once.denominator().cmp0() == Ordering::Greater);
        prop_assert_eq!(
            Integer::from(once.numerator().gcd_ref(once.denominator())),
            Integer::from(1)
        );

        let g = gcd(p, q);
        prop_assert_eq!(once.numerator().to_i64(), Some(p / g * q.signum()));
        prop_assert_eq!(once.denominator().to_i64(), Some(q.abs() / g));
    }

    #[test]
    fn arithmetic_is_reduced_and_exact((p, q) in fraction_strategy(), (r, s) in fraction_strategy()) {
        let (a, b) = (Fraction::new(p, q), Fraction::new(r, s));
        for result in [a.plus(&b), a.minus(&b), a.times(&b)] {
            prop_assert!(result.is_reduced());
        }
        prop_assert_eq!(a.plus(&b), Fraction::new(p * s + r * q, q * s));
        prop_assert_eq!(a.minus(&b), Fraction::new(p * s - r * q, q * s));
        prop_assert_eq!(a.times(&b), Fraction::new(p * r, q * s));
        if r != 0 {
            prop_assert_eq!(a.divided(&b).unwrap(), Fraction::new(p * s, q * r));
        } else {
            prop_assert!(a.divided(&b).is_err());
        }
    }

    #[test]
    fn like_terms_are_symmetric(
        kinds in proptest::collection::vec(0usize..4, 2),
        coefficients in proptest::collection::vec(-20i64..=20, 2),
    ) {
        let x = Variable::new("x", 1);
        let y = Variable::new("y", 1);
        let make = |kind: usize, c: i64| match kind {
            0 => Term::constant(c),
            1 => Term::variable(c, &x),
            2 => Term::variable(c, &y),
            _ => Term::variable(c, &Variable::new("x", 1)),
        };
        let a = make(kinds[0], coefficients[0]);
        let b = make(kinds[1], coefficients[1]);
        prop_assert_eq!(a.is_like_term(&b), b.is_like_term(&a));
        prop_assert_eq!(a.is_inverse_term(&b), b.is_inverse_term(&a));
        prop_assert_eq!(a.is_like_term(&b), kinds[0] == kinds[1] && kinds[0] != 3);
    }

    #[test]
    fn apply_preserves_balance(
        (x_value, a, b, m) in equation_strategy(),
        operator in operator_strategy(),
        operand in -12i64..=12,
        variable_operand in any::<bool>(),
        max_integer in prop_oneof![Just(1_000_000_000i64), Just(50i64)],
    ) {
        let x = Variable::new("x", x_value);
        let mut engine = build_engine(&x, a, b, m, max_integer);
        prop_assume!(engine.scale().is_balanced());

        let operand = if variable_operand { Term::variable(operand, &x) } else { Term::constant(operand) };
        let operation = UniversalOperation::new(operator, operand);
        let before = engine.scale().snapshot();
        let supported = engine.is_supported(&operation);

        match engine.apply(operation, &mut ()) {
            Ok(_) => {
                prop_assert!(supported);
                prop_assert!(engine.scale().is_balanced(), "unbalanced: {}", engine.scale());
            },
            Err(ApplyError::Overflow(_)) => {
                prop_assert!(supported);
                prop_assert_eq!(engine.scale().snapshot(), before);
            },
            Err(ApplyError::Unsupported(_)) => {
                prop_assert!(!supported);
                prop_assert_eq!(engine.scale().snapshot(), before);
            },
            Err(ApplyError::DivisionByZero(_)) => prop_assert!(false, "division by zero reached a creator"),
        }
    }
}
