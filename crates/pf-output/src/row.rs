//! Plain data row types written by output backends.

use pf_behavior::Archetype;
use pf_world::ResourceKind;

/// Score-board totals at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRow {
    pub tick:        u64,
    pub reactive:    u64,
    pub state_based: u64,
    pub goal_based:  u64,
    pub cooperative: u64,
}

/// One resource recorded by the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryRow {
    pub tick:    u64,
    pub kind:    ResourceKind,
    pub utility: u32,
    /// Where the resource was found.
    pub x:       i32,
    pub y:       i32,
}

/// One agent's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id:  u32,
    pub archetype: Archetype,
    pub tick:      u64,
    /// `None` for an agent that is not on the grid.
    pub x:         Option<i32>,
    pub y:         Option<i32>,
    pub carrying:  Option<ResourceKind>,
}
