//! The tagged union stored in grid cells.

use pf_core::{AgentId, ResourceId, StructureId};

/// Anything that can stand on a grid cell.
///
/// The grid stores only these handles; the entity data itself lives in the
/// world's arenas (resources, structures) or in the simulation's agent list.
/// Callers distinguish cell contents by pattern matching on the variant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    /// The delivery base.  Exactly one per world.
    Base,
    /// The shared BDI coordinator, stationed on the base cell.
    Coordinator,
    /// A foraging agent.
    Agent(AgentId),
    /// An unclaimed resource.  Claimed resources are removed from the grid.
    Resource(ResourceId),
    /// A heavy structure.  Never moved.
    Structure(StructureId),
}

impl Occupant {
    #[inline]
    pub fn is_structure(self) -> bool {
        matches!(self, Occupant::Structure(_))
    }

    /// The resource handle, if this occupant is one.
    #[inline]
    pub fn as_resource(self) -> Option<ResourceId> {
        match self {
            Occupant::Resource(id) => Some(id),
            _ => None,
        }
    }

    /// The structure handle, if this occupant is one.
    #[inline]
    pub fn as_structure(self) -> Option<StructureId> {
        match self {
            Occupant::Structure(id) => Some(id),
            _ => None,
        }
    }

    /// Short label for snapshots and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Occupant::Base        => "base",
            Occupant::Coordinator => "coordinator",
            Occupant::Agent(_)    => "agent",
            Occupant::Resource(_) => "resource",
            Occupant::Structure(_) => "structure",
        }
    }
}

impl std::fmt::Display for Occupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Occupant::Agent(id)     => write!(f, "{id}"),
            Occupant::Resource(id)  => write!(f, "{id}"),
            Occupant::Structure(id) => write!(f, "{id}"),
            other                   => f.write_str(other.as_str()),
        }
    }
}
