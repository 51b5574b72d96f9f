//! Named integer quantities referenced by variable terms.

use crate::error::OutOfRange;
use std::{cell::Cell, ops::RangeInclusive, rc::Rc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named integer-valued quantity, such as `x`.
///
/// Variables are shared between every term that refers to them, so they are always handled
/// through an [`Rc`]. Two terms refer to the same variable only if they hold the same [`Rc`]; two
/// separately created variables named `x` are different variables.
///
/// The value can be changed through a shared reference, since the host changes it while terms
/// still point at the variable.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// The symbol used to display the variable.
    symbol: String,

    /// The current value.
    value: Cell<i64>,

    /// The value restored by [`Variable::reset`].
    initial_value: i64,

    /// The allowed values, if restricted.
    range: Option<RangeInclusive<i64>>,
}

impl Variable {
    /// Creates an unrestricted variable.
    pub fn new(symbol: impl Into<String>, initial_value: i64) -> Rc<Self> {
        Rc::new(Self {
            symbol: symbol.into(),
            value: Cell::new(initial_value),
            initial_value,
            range: None,
        })
    }

    /// Creates a variable whose value must stay within `range`.
    ///
    /// Panics if the initial value is outside the range.
    pub fn with_range(
        symbol: impl Into<String>,
        initial_value: i64,
        range: RangeInclusive<i64>,
    ) -> Rc<Self> {
        assert!(
            range.contains(&initial_value),
            "initial value {} is outside of {:?}",
            initial_value,
            range,
        );
        Rc::new(Self {
            symbol: symbol.into(),
            value: Cell::new(initial_value),
            initial_value,
            range: Some(range),
        })
    }

    /// Returns true if both references point at the same variable.
    pub fn same(a: &Rc<Self>, b: &Rc<Self>) -> bool {
        Rc::ptr_eq(a, b)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn value(&self) -> i64 {
        self.value.get()
    }

    pub fn initial_value(&self) -> i64 {
        self.initial_value
    }

    pub fn range(&self) -> Option<&RangeInclusive<i64>> {
        self.range.as_ref()
    }

    /// Sets the value of the variable. Returns [`Err`] if the value is outside the range of the
    /// variable.
    pub fn set_value(&self, value: i64) -> Result<(), OutOfRange> {
        if let Some(range) = &self.range {
            if !range.contains(&value) {
                return Err(OutOfRange {
                    symbol: self.symbol.clone(),
                    value,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        self.value.set(value);
        Ok(())
    }

    /// Restores a value that was previously read from this variable.
    pub(crate) fn restore_value(&self, value: i64) {
        self.value.set(value);
    }

    /// Restores the initial value.
    pub fn reset(&self) {
        self.value.set(self.initial_value);
    }
}

/// A variable standing for a real-world object, like a sphere or a dog.
///
/// The image names are only used by whatever draws the object; to the engine, an object variable
/// is its underlying [`Variable`].
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectVariable {
    /// The underlying variable.
    pub variable: Rc<Variable>,

    /// Name of the image drawn for a term of this object.
    pub image: String,

    /// Name of the shadow image drawn while the term is dragged.
    pub shadow: String,
}

impl ObjectVariable {
    pub fn new(
        variable: Rc<Variable>,
        image: impl Into<String>,
        shadow: impl Into<String>,
    ) -> Rc<Self> {
        Rc::new(Self { variable, image: image.into(), shadow: shadow.into() })
    }
}
