//! Snapshots of the scale, used to undo rejected operations and to let the user save and restore
//! equations.

use crate::creator::CreatorId;
use crate::term::Term;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of snapshots a [`SnapshotCollection`] holds by default.
pub const DEFAULT_SNAPSHOT_CAPACITY: usize = 5;

/// A copy of the contents of every slot on the scale, together with the value of the variable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    slots: Vec<(CreatorId, Option<Term>)>,
    variable_value: i64,
}

impl Snapshot {
    pub fn new(slots: Vec<(CreatorId, Option<Term>)>, variable_value: i64) -> Self {
        Self { slots, variable_value }
    }

    /// The captured contents of each creator's slot.
    pub fn slots(&self) -> &[(CreatorId, Option<Term>)] {
        &self.slots
    }

    pub fn variable_value(&self) -> i64 {
        self.variable_value
    }
}

/// A fixed number of places to save snapshots in, one of which may be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotCollection {
    snapshots: Vec<Option<Snapshot>>,
    selected: Option<usize>,
}

impl Default for SnapshotCollection {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_CAPACITY)
    }
}

impl SnapshotCollection {
    /// Creates a collection with room for `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        Self { snapshots: vec![None; capacity], selected: None }
    }

    pub fn capacity(&self) -> usize {
        self.snapshots.len()
    }

    /// The number of saved snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.snapshots.iter().all(Option::is_some)
    }

    /// Saves the snapshot in the first free place and selects it. Returns the index of the place,
    /// or [`None`] if the collection is full.
    pub fn save(&mut self, snapshot: Snapshot) -> Option<usize> {
        let index = self.snapshots.iter().position(Option::is_none)?;
        self.snapshots[index] = Some(snapshot);
        self.selected = Some(index);
        Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)?.as_ref()
    }

    /// Removes and returns the snapshot at `index`. The selection is cleared if it pointed there.
    pub fn remove(&mut self, index: usize) -> Option<Snapshot> {
        let snapshot = self.snapshots.get_mut(index)?.take();
        if self.selected == Some(index) {
            self.selected = None;
        }
        snapshot
    }

    /// Selects the snapshot at `index`. Returns false, leaving the selection unchanged, if there
    /// is no snapshot there.
    pub fn select(&mut self, index: usize) -> bool {
        if self.get(index).is_some() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// The selected snapshot, if any.
    pub fn selected(&self) -> Option<(usize, &Snapshot)> {
        let index = self.selected?;
        self.get(index).map(|snapshot| (index, snapshot))
    }

    /// Iterates over saved snapshots and their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Snapshot)> {
        self.snapshots.iter()
            .enumerate()
            .filter_map(|(i, snapshot)| snapshot.as_ref().map(|s| (i, s)))
    }

    /// Removes every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.iter_mut().for_each(|snapshot| *snapshot = None);
        self.selected = None;
    }
}
