//! Second-hand observations agents log and report to the coordinator.

use pf_core::GridPos;
use pf_world::ResourceKind;

/// What an agent saw on a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObservationKind {
    /// A heavy structure.
    Structure,
    /// An unclaimed resource of the given kind.
    Resource(ResourceKind),
    /// A cell the agent has walked over (cooperative agents only).
    Explored,
}

/// One log entry: a kind and the cell it was seen on.
///
/// Equality is exact on both fields; two sightings of different kinds on the
/// same cell are distinct entries.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    pub kind:     ObservationKind,
    pub position: GridPos,
}

impl Observation {
    #[inline]
    pub fn structure(position: GridPos) -> Self {
        Self { kind: ObservationKind::Structure, position }
    }

    #[inline]
    pub fn resource(kind: ResourceKind, position: GridPos) -> Self {
        Self { kind: ObservationKind::Resource(kind), position }
    }

    #[inline]
    pub fn explored(position: GridPos) -> Self {
        Self { kind: ObservationKind::Explored, position }
    }

    #[inline]
    pub fn is_structure(&self) -> bool {
        self.kind == ObservationKind::Structure
    }

    #[inline]
    pub fn is_resource(&self) -> bool {
        matches!(self.kind, ObservationKind::Resource(_))
    }

    #[inline]
    pub fn is_explored(&self) -> bool {
        self.kind == ObservationKind::Explored
    }
}
