//! The universal-operation engine.
//!
//! [`Engine::apply`] applies one operation to every term creator on both sides of the scale as a
//! single transaction. Either every creator is updated (or skipped, if the operation does not
//! apply to it), or the scale is restored to exactly the state it was in before the call.

use balance_error::Error;
use crate::config::EngineConfig;
use crate::creator::CreatorId;
use crate::error::{DivisionByZero, Overflow, UnsupportedOperation};
use crate::fraction::Fraction;
use crate::operation::{check_supported, UniversalOperation};
use crate::scale::Scale;
use crate::snapshot::{Snapshot, SnapshotCollection};
use std::{cmp::Ordering, ops::Range};
use tracing::{debug, warn};

/// A type that collects the events emitted by the engine.
///
/// [`EventCollector`] is also implemented for the unit type `()`, for callers that only need the
/// return value of [`Engine::apply`].
pub trait EventCollector<E> {
    /// Adds an event to the collector.
    fn push(&mut self, event: E);
}

impl<E> EventCollector<E> for () {
    #[inline]
    fn push(&mut self, _: E) {}
}

impl<E> EventCollector<E> for Vec<E> {
    #[inline]
    fn push(&mut self, event: E) {
        self.push(event);
    }
}

/// Events emitted when an operation commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The terms held by these creators summed to zero and were removed.
    SummedToZero(Vec<CreatorId>),

    /// The operation was applied to both sides.
    OperationCompleted(UniversalOperation),
}

/// The result of an operation that committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The operation that was applied.
    pub operation: UniversalOperation,

    /// The creators whose terms summed to zero, in creator order.
    pub summed_to_zero: Vec<CreatorId>,
}

/// Reasons an operation was not applied. In every case, the scale is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// The operation is not supported; see [`check_supported`].
    Unsupported(UnsupportedOperation),

    /// A term was divided by zero.
    DivisionByZero(DivisionByZero),

    /// A resulting term exceeded the configured limit.
    Overflow(Overflow),
}

impl ApplyError {
    /// Packages this error with the regions of the input that described the operation.
    pub fn into_error(self, spans: Vec<Range<usize>>) -> Error {
        match self {
            Self::Unsupported(kind) => Error::new(spans, kind),
            Self::DivisionByZero(kind) => Error::new(spans, kind),
            Self::Overflow(kind) => Error::new(spans, kind),
        }
    }
}

impl From<UnsupportedOperation> for ApplyError {
    fn from(err: UnsupportedOperation) -> Self {
        Self::Unsupported(err)
    }
}

impl From<DivisionByZero> for ApplyError {
    fn from(err: DivisionByZero) -> Self {
        Self::DivisionByZero(err)
    }
}

impl From<Overflow> for ApplyError {
    fn from(err: Overflow) -> Self {
        Self::Overflow(err)
    }
}

/// Applies universal operations to a [`Scale`], and keeps the history of applied operations and
/// the snapshots saved by the user.
#[derive(Debug, Clone)]
pub struct Engine {
    scale: Scale,
    config: EngineConfig,
    history: Vec<UniversalOperation>,
    snapshots: SnapshotCollection,
}

impl Engine {
    pub fn new(scale: Scale, config: EngineConfig) -> Self {
        Self {
            scale,
            config,
            history: Vec::new(),
            snapshots: SnapshotCollection::default(),
        }
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Mutable access to the scale, for putting terms on it directly.
    pub fn scale_mut(&mut self) -> &mut Scale {
        &mut self.scale
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The operations that committed, oldest first.
    pub fn history(&self) -> &[UniversalOperation] {
        &self.history
    }

    pub fn snapshots(&self) -> &SnapshotCollection {
        &self.snapshots
    }

    /// Returns true if the operation can be applied to both sides.
    pub fn is_supported(&self, operation: &UniversalOperation) -> bool {
        check_supported(operation.operator(), operation.operand(), &self.config).is_ok()
    }

    /// Applies the operation to every term creator on both sides of the scale.
    ///
    /// On success, the operation is added to the history and the engine emits
    /// [`EngineEvent::SummedToZero`] (if any term summed to zero) followed by
    /// [`EngineEvent::OperationCompleted`]. On failure, nothing is emitted and the scale is left
    /// exactly as it was.
    pub fn apply(
        &mut self,
        operation: UniversalOperation,
        events: &mut dyn EventCollector<EngineEvent>,
    ) -> Result<Applied, ApplyError> {
        if let Err(reason) = check_supported(operation.operator(), operation.operand(), &self.config) {
            return Err(UnsupportedOperation { operation: operation.to_string(), reason }.into());
        }

        let snapshot = self.scale.snapshot();
        let mut summed_to_zero = Vec::new();
        let applied = self.scale.creators_mut().try_for_each(|creator| {
            let outcome = creator.apply_operation(&operation)?;
            if outcome.summed_to_zero {
                summed_to_zero.push(creator.id());
            }
            Ok::<_, DivisionByZero>(())
        });
        if let Err(err) = applied {
            self.rollback(&snapshot);
            return Err(err.into());
        }

        let exceeded = self.scale.creators()
            .filter(|creator| creator.max_integer_exceeded(&self.config.max_integer))
            .map(|creator| creator.id())
            .collect::<Vec<_>>();
        if !exceeded.is_empty() {
            warn!(%operation, ?exceeded, max_integer = %self.config.max_integer, "operation overflowed, rolling back");
            self.rollback(&snapshot);
            return Err(Overflow {
                operation: operation.to_string(),
                max_integer: self.config.max_integer.clone(),
            }.into());
        }

        debug!(%operation, summed_to_zero = summed_to_zero.len(), scale = %self.scale, "operation committed");
        self.history.push(operation.clone());
        if !summed_to_zero.is_empty() {
            events.push(EngineEvent::SummedToZero(summed_to_zero.clone()));
        }
        events.push(EngineEvent::OperationCompleted(operation.clone()));
        Ok(Applied { operation, summed_to_zero })
    }

    fn rollback(&mut self, snapshot: &Snapshot) {
        self.scale.restore(snapshot);
    }

    /// The total weight of the left plate.
    pub fn left_weight(&self) -> Fraction {
        self.scale.left().weight()
    }

    /// The total weight of the right plate.
    pub fn right_weight(&self) -> Fraction {
        self.scale.right().weight()
    }

    /// Which way the scale tilts. See [`Scale::balance`].
    pub fn balance(&self) -> Ordering {
        self.scale.balance()
    }

    /// Saves the current state of the scale. Returns the index it was saved at, or [`None`] if
    /// every place is taken.
    pub fn save_snapshot(&mut self) -> Option<usize> {
        let index = self.snapshots.save(self.scale.snapshot());
        debug!(?index, "saved snapshot");
        index
    }

    /// Restores the snapshot saved at `index` and selects it. Returns false if there is no
    /// snapshot there.
    pub fn restore_snapshot(&mut self, index: usize) -> bool {
        let Some(snapshot) = self.snapshots.get(index).cloned() else {
            return false;
        };
        self.scale.restore(&snapshot);
        self.snapshots.select(index)
    }

    /// Removes the snapshot saved at `index`.
    pub fn remove_snapshot(&mut self, index: usize) -> Option<Snapshot> {
        self.snapshots.remove(index)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Empties the scale, forgets the history and the saved snapshots, and resets the variable.
    pub fn reset(&mut self) {
        self.scale.reset();
        self.history.clear();
        self.snapshots.clear();
    }
}
