//! `Beliefs` — the coordinator's aggregated picture of the world.
//!
//! # Ordering
//!
//! Confirmed resources and marked structures are FIFO queues: the earliest
//! report is handed out first.  The explored set is membership-only and is
//! never iterated where order would matter.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use pf_behavior::{Observation, ObservationKind};
use pf_core::GridPos;

/// Second-hand observations merged from agent reports.
#[derive(Debug, Default, Clone)]
pub struct Beliefs {
    explored:            FxHashSet<GridPos>,
    confirmed_resources: VecDeque<Observation>,
    marked_structures:   VecDeque<Observation>,
}

impl Beliefs {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn explored(&self) -> &FxHashSet<GridPos> {
        &self.explored
    }

    /// Confirmed resource sightings, oldest first.
    pub fn confirmed_resources(&self) -> impl ExactSizeIterator<Item = &Observation> + '_ {
        self.confirmed_resources.iter()
    }

    /// Marked structure sightings, oldest first.
    pub fn marked_structures(&self) -> impl ExactSizeIterator<Item = &Observation> + '_ {
        self.marked_structures.iter()
    }

    pub fn has_confirmed_resources(&self) -> bool {
        !self.confirmed_resources.is_empty()
    }

    /// `true` if a structure has been reported on `pos`.
    pub fn is_marked(&self, pos: GridPos) -> bool {
        self.marked_structures.iter().any(|s| s.position == pos)
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Merge one entry unless an identical one is already held.
    ///
    /// Returns `true` if the beliefs changed.
    pub fn merge(&mut self, entry: Observation) -> bool {
        match entry.kind {
            ObservationKind::Explored => self.explored.insert(entry.position),
            ObservationKind::Structure => push_unique(&mut self.marked_structures, entry),
            ObservationKind::Resource(_) => push_unique(&mut self.confirmed_resources, entry),
        }
    }

    /// Append one entry even if an identical one is already held.
    pub fn append(&mut self, entry: Observation) {
        match entry.kind {
            ObservationKind::Explored => {
                self.explored.insert(entry.position);
            }
            ObservationKind::Structure => self.marked_structures.push_back(entry),
            ObservationKind::Resource(_) => self.confirmed_resources.push_back(entry),
        }
    }

    /// Remove and return the oldest confirmed resource.
    pub fn pop_confirmed(&mut self) -> Option<Observation> {
        self.confirmed_resources.pop_front()
    }
}

fn push_unique(queue: &mut VecDeque<Observation>, entry: Observation) -> bool {
    if queue.contains(&entry) {
        return false;
    }
    queue.push_back(entry);
    true
}
