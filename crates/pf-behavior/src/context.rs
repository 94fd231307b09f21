//! Mutable simulation state lent to one agent for the duration of its step.

use pf_core::{AgentRng, Tick};
use pf_world::World;

use crate::Coordination;

/// Everything an agent may touch while it acts.
///
/// Built fresh by the simulation loop for each agent; agents act strictly one
/// after another, so the exclusive borrows never overlap.
pub struct StepContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Grid, resources, structures, and the base.
    pub world: &'a mut World,

    /// The shared coordinator, seen only through its narrow interface.
    pub coordinator: &'a mut dyn Coordination,

    /// This agent's private RNG.
    pub rng: &'a mut AgentRng,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(
        tick:        Tick,
        world:       &'a mut World,
        coordinator: &'a mut dyn Coordination,
        rng:         &'a mut AgentRng,
    ) -> Self {
        Self { tick, world, coordinator, rng }
    }
}
