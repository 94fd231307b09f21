//! The delivery base and its ledger.

use pf_core::GridPos;
use pf_grid::{Grid, Occupant};

use crate::{Resource, ResourceKind};

/// One immutable entry in the base's delivery ledger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryRecord {
    pub kind:     ResourceKind,
    pub utility:  u32,
    /// Where the resource was originally found.
    pub position: GridPos,
}

/// The fixed delivery point at the grid centre.
///
/// The base never credits agent scores; whoever hands over the resource
/// credits itself with the utility.
#[derive(Debug, Clone)]
pub struct Base {
    position: GridPos,
    records:  Vec<DeliveryRecord>,
}

impl Base {
    pub fn new(position: GridPos) -> Self {
        Self { position, records: Vec::new() }
    }

    #[inline]
    pub fn position(&self) -> GridPos {
        self.position
    }

    /// Accept `resource` into the ledger and discard it.
    ///
    /// A resource already marked delivered is ignored and `None` returned.
    /// Otherwise the record is appended, the resource is taken off the grid
    /// if it is still there, and the new record is returned.
    pub fn deliver(&mut self, mut resource: Resource, grid: &mut Grid) -> Option<DeliveryRecord> {
        if resource.is_delivered() {
            return None;
        }
        let record = DeliveryRecord {
            kind:     resource.kind,
            utility:  resource.utility,
            position: resource.position,
        };
        self.records.push(record);
        grid.remove(Occupant::Resource(resource.id));
        resource.mark_delivered();
        Some(record)
    }

    /// Delivery ledger in arrival order.
    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    /// Sum of all delivered utility.
    pub fn utility_total(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.utility)).sum()
    }
}
