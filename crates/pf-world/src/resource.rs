//! Collectable resources.

use pf_core::{GridPos, ResourceId};

/// The two light resource kinds agents can carry alone.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    Crystal,
    Metal,
}

impl ResourceKind {
    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Crystal => "crystal",
            ResourceKind::Metal   => "metal",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource lying on the grid or carried by an agent.
///
/// `claimed` moves from `false` to `true` exactly once, when an agent picks
/// the resource up; there is no way to clear it.  `delivered` is set by the
/// base when the resource is recorded in the ledger.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    pub id:       ResourceId,
    pub kind:     ResourceKind,
    pub utility:  u32,
    /// Cell the resource was placed on.  Kept after pickup so the delivery
    /// record can report where it came from.
    pub position: GridPos,
    claimed:      bool,
    delivered:    bool,
}

impl Resource {
    pub fn new(id: ResourceId, kind: ResourceKind, utility: u32, position: GridPos) -> Self {
        Self { id, kind, utility, position, claimed: false, delivered: false }
    }

    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.delivered
    }

    /// Flip `claimed` to `true`.  Returns `false` if it already was.
    pub(crate) fn mark_claimed(&mut self) -> bool {
        !std::mem::replace(&mut self.claimed, true)
    }

    pub(crate) fn mark_delivered(&mut self) {
        self.delivered = true;
    }
}
