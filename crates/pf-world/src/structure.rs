//! Heavy structures that need several carriers.
//!
//! Carrier bookkeeping is tracked, but nothing ever relocates a structure:
//! cooperative transport is intentionally unfinished.

use std::collections::BTreeSet;

use pf_core::{AgentId, GridPos, StructureId};

/// A structure fixed to one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Structure {
    pub id:        StructureId,
    pub position:  GridPos,
    carriers:      BTreeSet<AgentId>,
    being_carried: bool,
}

impl Structure {
    /// Minimum number of distinct carriers before a structure counts as
    /// being carried.
    pub const CARRIERS_REQUIRED: usize = 2;

    pub fn new(id: StructureId, position: GridPos) -> Self {
        Self { id, position, carriers: BTreeSet::new(), being_carried: false }
    }

    /// Register `agent` as a carrier.  Returns `false` if it already was one.
    pub fn add_carrier(&mut self, agent: AgentId) -> bool {
        let added = self.carriers.insert(agent);
        self.being_carried = self.carriers.len() >= Self::CARRIERS_REQUIRED;
        added
    }

    pub fn carriers(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.carriers.iter().copied()
    }

    pub fn carrier_count(&self) -> usize {
        self.carriers.len()
    }

    #[inline]
    pub fn is_being_carried(&self) -> bool {
        self.being_carried
    }
}
