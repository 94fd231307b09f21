//! The narrow interfaces between foraging agents and the coordinator.
//!
//! The simulation loop owns the coordinator and lends it to each agent's
//! step as `&mut dyn Coordination`; the coordinator in turn steers agents
//! through `Directable`.  Neither side sees the other's concrete type.

use pf_core::{AgentId, GridPos};

use crate::Observation;

/// What an agent may ask of the coordinator during its step.
pub trait Coordination {
    /// Merge an agent's observation log into the shared beliefs.
    ///
    /// Entries already present (by exact equality) are skipped.
    fn receive_info(&mut self, agent: AgentId, log: &[Observation]);

    /// The destination currently assigned to `agent`, if any.
    fn query_intention(&self, agent: AgentId) -> Option<GridPos>;

    /// Append observations to the beliefs without deduplication.
    ///
    /// Cooperative agents flush their log this way on delivery.
    fn absorb(&mut self, agent: AgentId, observations: &[Observation]);
}

/// An agent the coordinator can redirect.
pub trait Directable {
    fn agent_id(&self) -> AgentId;

    /// Adopt `destination` and start seeking it.
    fn set_destination(&mut self, destination: GridPos);

    /// Drop back to exploring.  A stale destination may be kept but is not
    /// followed.
    fn force_explore(&mut self);
}

/// A [`Coordination`] that knows nothing and records nothing.
///
/// Useful in tests and for populations without a coordinator.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCoordination;

impl Coordination for NoCoordination {
    fn receive_info(&mut self, _agent: AgentId, _log: &[Observation]) {}

    fn query_intention(&self, _agent: AgentId) -> Option<GridPos> {
        None
    }

    fn absorb(&mut self, _agent: AgentId, _observations: &[Observation]) {}
}
