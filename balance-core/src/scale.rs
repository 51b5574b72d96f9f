//! The two plates of the balance scale and the term creators on them.

use crate::creator::{CreatorId, CreatorKind, Side, TermCreator};
use crate::fmt::write_sum;
use crate::fraction::Fraction;
use crate::snapshot::Snapshot;
use crate::term::Term;
use crate::variable::Variable;
use std::{cmp::Ordering, fmt::{self, Display, Formatter}, rc::Rc};

/// Index of the variable-term creator on a plate.
pub const VARIABLE_CREATOR: usize = 0;

/// Index of the constant-term creator on a plate.
pub const CONSTANT_CREATOR: usize = 1;

/// One plate of the scale: one side of the equation.
#[derive(Debug, Clone)]
pub struct Plate {
    side: Side,
    creators: Vec<TermCreator>,
}

impl Plate {
    /// Creates an empty plate with a creator for terms of `variable`, followed by a creator for
    /// constant terms.
    pub fn new(side: Side, variable: &Rc<Variable>) -> Self {
        let creators = vec![
            TermCreator::new(
                CreatorId { side, index: VARIABLE_CREATOR },
                CreatorKind::Variable(Rc::clone(variable)),
                VARIABLE_CREATOR,
            ),
            TermCreator::new(
                CreatorId { side, index: CONSTANT_CREATOR },
                CreatorKind::Constant,
                CONSTANT_CREATOR,
            ),
        ];
        Self { side, creators }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn creators(&self) -> &[TermCreator] {
        &self.creators
    }

    pub fn creators_mut(&mut self) -> &mut [TermCreator] {
        &mut self.creators
    }

    pub fn variable_creator(&self) -> &TermCreator {
        &self.creators[VARIABLE_CREATOR]
    }

    pub fn variable_creator_mut(&mut self) -> &mut TermCreator {
        &mut self.creators[VARIABLE_CREATOR]
    }

    pub fn constant_creator(&self) -> &TermCreator {
        &self.creators[CONSTANT_CREATOR]
    }

    pub fn constant_creator_mut(&mut self) -> &mut TermCreator {
        &mut self.creators[CONSTANT_CREATOR]
    }

    /// Returns the creator that holds terms like `term`, if there is one.
    pub fn creator_for(&mut self, term: &Term) -> Option<&mut TermCreator> {
        self.creators.iter_mut().find(|creator| creator.accepts(term))
    }

    /// Puts a term on the plate, combining it with the like term already there. Returns true if
    /// the terms summed to zero.
    ///
    /// Panics if no creator on this plate holds terms like `term`.
    pub fn add_term(&mut self, term: Term) -> bool {
        let side = self.side;
        match self.creator_for(&term) {
            Some(creator) => creator.add_term(term),
            None => panic!("the {} plate has no creator for `{}`", side, term),
        }
    }

    /// The terms on the plate, in creator order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.creators.iter().filter_map(TermCreator::slot)
    }

    pub fn is_empty(&self) -> bool {
        self.creators.iter().all(TermCreator::is_empty)
    }

    /// The total weight of the terms on the plate.
    pub fn weight(&self) -> Fraction {
        self.creators.iter()
            .map(TermCreator::weight_on_plate)
            .fold(Fraction::zero(), |acc, weight| acc + weight)
    }

    /// Empties every slot on the plate.
    pub fn clear(&mut self) {
        self.creators.iter_mut().for_each(TermCreator::clear);
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let terms = self.terms()
            .map(|term| (term.significant_value(), term.bound_variable().map(|v| v.symbol())))
            .collect::<Vec<_>>();
        write_sum(f, terms.iter().map(|(value, symbol)| (value, *symbol)))
    }
}

/// A balance scale holding an equation in one variable.
///
/// The scale has four term creators: the variable and constant creators of the left plate,
/// followed by the variable and constant creators of the right plate. Operations visit them in
/// that order.
#[derive(Debug, Clone)]
pub struct Scale {
    variable: Rc<Variable>,
    left: Plate,
    right: Plate,
}

impl Scale {
    /// Creates an empty scale for equations in `variable`.
    pub fn new(variable: &Rc<Variable>) -> Self {
        Self {
            variable: Rc::clone(variable),
            left: Plate::new(Side::Left, variable),
            right: Plate::new(Side::Right, variable),
        }
    }

    pub fn variable(&self) -> &Rc<Variable> {
        &self.variable
    }

    pub fn left(&self) -> &Plate {
        &self.left
    }

    pub fn right(&self) -> &Plate {
        &self.right
    }

    pub fn plate(&self, side: Side) -> &Plate {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn plate_mut(&mut self, side: Side) -> &mut Plate {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Iterates over all four creators: left variable, left constant, right variable, right
    /// constant.
    pub fn creators(&self) -> impl Iterator<Item = &TermCreator> {
        self.left.creators().iter().chain(self.right.creators())
    }

    /// Mutable version of [`Scale::creators`], in the same order.
    pub fn creators_mut(&mut self) -> impl Iterator<Item = &mut TermCreator> {
        self.left.creators_mut().iter_mut().chain(self.right.creators_mut().iter_mut())
    }

    pub fn creator(&self, id: CreatorId) -> Option<&TermCreator> {
        self.plate(id.side).creators().get(id.index)
    }

    pub fn creator_mut(&mut self, id: CreatorId) -> Option<&mut TermCreator> {
        self.plate_mut(id.side).creators_mut().get_mut(id.index)
    }

    /// Compares the weight of the left plate to the weight of the right plate.
    ///
    /// This only describes which way the scale tilts; it never prevents an operation.
    pub fn balance(&self) -> Ordering {
        self.left.weight().cmp(&self.right.weight())
    }

    pub fn is_balanced(&self) -> bool {
        self.balance() == Ordering::Equal
    }

    /// If the equation has been solved, that is, one side is exactly the variable with a
    /// coefficient of 1 and the other side is a constant (or empty), returns the constant.
    pub fn solution(&self) -> Option<Fraction> {
        /// Returns true if the plate holds exactly `1x`.
        fn is_lone_variable(plate: &Plate) -> bool {
            plate.constant_creator().is_empty()
                && plate.variable_creator().slot()
                    .map(|term| term.significant_value() == Fraction::one())
                    .unwrap_or(false)
        }

        /// Returns true if the plate holds no variable term.
        fn is_constant(plate: &Plate) -> bool {
            plate.variable_creator().is_empty()
        }

        if is_lone_variable(&self.left) && is_constant(&self.right) {
            Some(self.right.constant_creator().sum_on_plate())
        } else if is_lone_variable(&self.right) && is_constant(&self.left) {
            Some(self.left.constant_creator().sum_on_plate())
        } else {
            None
        }
    }

    /// Empties every slot on both plates.
    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    /// Empties every slot and resets the variable to its initial value.
    pub fn reset(&mut self) {
        self.clear();
        self.variable.reset();
    }

    /// Captures the contents of every slot and the value of the variable.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.creators()
                .map(|creator| (creator.id(), creator.slot().cloned()))
                .collect(),
            self.variable.value(),
        )
    }

    /// Restores the slots and variable value captured in `snapshot`.
    ///
    /// Creators that are not mentioned in the snapshot are left untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        for (id, slot) in snapshot.slots() {
            if let Some(creator) = self.creator_mut(*id) {
                creator.set_slot(slot.clone());
            }
        }
        self.variable.restore_value(snapshot.variable_value());
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::frac;
    use pretty_assertions::assert_eq;
    use super::*;

    fn scale_with(x: &Rc<Variable>, terms: [(Side, Term); 4]) -> Scale {
        let mut scale = Scale::new(x);
        for (side, term) in terms {
            scale.plate_mut(side).add_term(term);
        }
        scale
    }

    #[test]
    fn creator_order() {
        let x = Variable::new("x", 1);
        let scale = Scale::new(&x);
        let ids = scale.creators().map(TermCreator::id).collect::<Vec<_>>();
        assert_eq!(ids, vec![
            CreatorId { side: Side::Left, index: VARIABLE_CREATOR },
            CreatorId { side: Side::Left, index: CONSTANT_CREATOR },
            CreatorId { side: Side::Right, index: VARIABLE_CREATOR },
            CreatorId { side: Side::Right, index: CONSTANT_CREATOR },
        ]);
    }

    #[test]
    fn balance_and_display() {
        let x = Variable::new("x", 6);
        let scale = scale_with(&x, [
            (Side::Left, Term::variable(frac(-7, 2), &x)),
            (Side::Left, Term::constant(4)),
            (Side::Right, Term::constant(-17)),
            (Side::Right, Term::constant(0)),
        ]);
        assert_eq!(scale.left().weight(), Fraction::from(-17));
        assert!(scale.is_balanced());
        assert_eq!(scale.to_string(), "-7/2x + 4 = -17");

        x.set_value(0).unwrap();
        assert_eq!(scale.balance(), Ordering::Greater);
    }

    #[test]
    fn empty_plate_displays_zero() {
        let x = Variable::new("x", 1);
        let mut scale = Scale::new(&x);
        scale.plate_mut(Side::Left).add_term(Term::variable(1, &x));
        assert_eq!(scale.to_string(), "x = 0");
        assert_eq!(scale.solution(), Some(Fraction::zero()));
    }

    #[test]
    fn solution() {
        let x = Variable::new("x", 6);
        let scale = scale_with(&x, [
            (Side::Right, Term::variable(1, &x)),
            (Side::Left, Term::constant(6)),
            (Side::Left, Term::constant(0)),
            (Side::Right, Term::constant(0)),
        ]);
        assert_eq!(scale.solution(), Some(Fraction::from(6)));

        let scale = scale_with(&x, [
            (Side::Left, Term::variable(2, &x)),
            (Side::Right, Term::constant(12)),
            (Side::Left, Term::constant(0)),
            (Side::Right, Term::constant(0)),
        ]);
        assert_eq!(scale.solution(), None);
    }

    #[test]
    fn snapshot_round_trip() {
        let x = Variable::new("x", 2);
        let mut scale = scale_with(&x, [
            (Side::Left, Term::variable(3, &x)),
            (Side::Left, Term::constant(1)),
            (Side::Right, Term::constant(7)),
            (Side::Right, Term::constant(0)),
        ]);
        let snapshot = scale.snapshot();
        scale.clear();
        x.set_value(9).unwrap();
        assert!(scale.left().is_empty());

        scale.restore(&snapshot);
        assert_eq!(scale.to_string(), "3x + 1 = 7");
        assert_eq!(x.value(), 2);
        assert_eq!(scale.snapshot(), snapshot);
    }

    #[test]
    fn reset_restores_variable() {
        let x = Variable::new("x", 2);
        let mut scale = Scale::new(&x);
        scale.plate_mut(Side::Left).add_term(Term::constant(5));
        x.set_value(4).unwrap();
        scale.reset();
        assert!(scale.left().is_empty());
        assert_eq!(x.value(), 2);
    }
}
