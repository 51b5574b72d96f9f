//! Term creators: the per-side, per-type slots that hold the combined term of one type.

use crate::error::DivisionByZero;
use crate::fraction::Fraction;
use crate::operation::UniversalOperation;
use crate::term::Term;
use crate::variable::Variable;
use rug::Integer;
use std::{fmt::{self, Display, Formatter}, rc::Rc};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A side of the equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Identifies a term creator on the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreatorId {
    /// The side of the scale the creator belongs to.
    pub side: Side,

    /// The position of the creator on its plate.
    pub index: usize,
}

/// The type of term a creator holds.
#[derive(Debug, Clone)]
pub enum CreatorKind {
    /// Constant terms.
    Constant,

    /// Terms bound to the given variable.
    Variable(Rc<Variable>),
}

impl PartialEq for CreatorKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CreatorKind::Constant, CreatorKind::Constant) => true,
            (CreatorKind::Variable(a), CreatorKind::Variable(b)) => Variable::same(a, b),
            _ => false,
        }
    }
}

/// What happened to a creator's slot when an operation was applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CreatorOutcome {
    /// Whether the contents of the slot changed.
    pub changed: bool,

    /// Whether the term in the slot summed to zero and was removed.
    pub summed_to_zero: bool,
}

/// Owns the single like-terms slot of one term type on one side of the equation.
///
/// Terms of the creator's type are never kept as separate pieces: putting a term on the plate
/// combines it with whatever term already occupies the slot.
#[derive(Debug, Clone)]
pub struct TermCreator {
    id: CreatorId,
    kind: CreatorKind,

    /// The cell of the plate where the combined term is drawn.
    like_terms_cell: usize,

    slot: Option<Term>,
}

impl TermCreator {
    /// Creates a creator with an empty slot.
    pub fn new(id: CreatorId, kind: CreatorKind, like_terms_cell: usize) -> Self {
        Self { id, kind, like_terms_cell, slot: None }
    }

    pub fn id(&self) -> CreatorId {
        self.id
    }

    pub fn kind(&self) -> &CreatorKind {
        &self.kind
    }

    pub fn like_terms_cell(&self) -> usize {
        self.like_terms_cell
    }

    /// The term currently in the slot, if any.
    pub fn slot(&self) -> Option<&Term> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Empties the slot.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Replaces the contents of the slot verbatim. Used to restore snapshots.
    pub(crate) fn set_slot(&mut self, slot: Option<Term>) {
        self.slot = slot;
    }

    /// A term of this creator's type with a zero significant value.
    pub fn zero_term(&self) -> Term {
        match &self.kind {
            CreatorKind::Constant => Term::zero_constant(),
            CreatorKind::Variable(variable) => Term::zero_variable(variable),
        }
    }

    /// Returns true if this creator holds terms like the given term.
    pub fn accepts(&self, term: &Term) -> bool {
        self.zero_term().is_like_term(term)
    }

    /// Puts a term on the plate, combining it with the term in the slot. Returns true if the
    /// combined term summed to zero and was removed.
    ///
    /// The slot always holds a term of this creator's own type: an object term is stored as a
    /// variable term over the object's variable, so later operations act on it.
    ///
    /// Panics if the term is not of this creator's type.
    pub fn add_term(&mut self, term: Term) -> bool {
        assert!(self.accepts(&term), "the {} creator {:?} cannot hold `{}`", self.id.side, self.kind, term);
        let existing = self.slot.take();
        let occupied = existing.is_some();
        let combined = existing.unwrap_or_else(|| self.zero_term()).plus(&term);

        if combined.is_zero() {
            if occupied {
                trace!(side = %self.id.side, index = self.id.index, "like terms summed to zero");
            }
            return occupied;
        }
        self.slot = Some(combined);
        false
    }

    /// Applies a universal operation to the term in the slot.
    ///
    /// An empty slot is treated as holding a zero term of this creator's type, so `+ 3` puts a
    /// `3` into an empty constant slot. If the operation does not apply to this type of term, the
    /// slot is left unchanged. A result that is exactly zero clears the slot; the outcome reports
    /// [`summed_to_zero`] if the slot held a term before.
    ///
    /// [`summed_to_zero`]: CreatorOutcome::summed_to_zero
    pub fn apply_operation(&mut self, operation: &UniversalOperation) -> Result<CreatorOutcome, DivisionByZero> {
        let current = self.slot.clone().unwrap_or_else(|| self.zero_term());
        let Some(result) = current.apply_operation(operation)? else {
            trace!(side = %self.id.side, index = self.id.index, %operation, "operation not applicable");
            return Ok(CreatorOutcome::default());
        };

        let outcome = if result.is_zero() {
            let summed_to_zero = self.slot.take().is_some();
            CreatorOutcome { changed: summed_to_zero, summed_to_zero }
        } else {
            let changed = self.slot.as_ref() != Some(&result);
            self.slot = Some(result);
            CreatorOutcome { changed, summed_to_zero: false }
        };
        trace!(side = %self.id.side, index = self.id.index, %operation, ?outcome, "operation applied");
        Ok(outcome)
    }

    /// The significant value of the term in the slot, or zero if the slot is empty.
    pub fn sum_on_plate(&self) -> Fraction {
        self.slot.as_ref()
            .map(Term::significant_value)
            .unwrap_or_default()
    }

    /// The weight of the term in the slot, or zero if the slot is empty.
    pub fn weight_on_plate(&self) -> Fraction {
        self.slot.as_ref()
            .map(Term::weight)
            .unwrap_or_default()
    }

    /// Returns true if the term in the slot exceeds the given limit. See
    /// [`Term::max_integer_exceeded`].
    pub fn max_integer_exceeded(&self, limit: &Integer) -> bool {
        self.slot.as_ref()
            .map(|term| term.max_integer_exceeded(limit))
            .unwrap_or(false)
    }
}
