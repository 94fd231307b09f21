//! `Forager` — the tagged variant the simulation loop steps.

use pf_core::{AgentId, GridPos};
use pf_world::Resource;

use crate::{
    AgentCore, CooperativeAgent, Directable, GoalBasedAgent, Observation, ReactiveAgent,
    StateBasedAgent, StepContext,
};

/// The four decision strategies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Archetype {
    Reactive,
    StateBased,
    GoalBased,
    Cooperative,
}

impl Archetype {
    /// All archetypes in stepping order.
    pub const ALL: [Archetype; 4] = [
        Archetype::Reactive,
        Archetype::StateBased,
        Archetype::GoalBased,
        Archetype::Cooperative,
    ];

    /// Position in [`Archetype::ALL`]; also the group's stepping rank.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::Reactive    => "reactive",
            Archetype::StateBased  => "state_based",
            Archetype::GoalBased   => "goal_based",
            Archetype::Cooperative => "cooperative",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One foraging agent of any strategy.
#[derive(Debug, Clone)]
pub enum Forager {
    Reactive(ReactiveAgent),
    StateBased(StateBasedAgent),
    GoalBased(GoalBasedAgent),
    Cooperative(CooperativeAgent),
}

impl Forager {
    pub fn new(archetype: Archetype, id: AgentId, base_position: GridPos) -> Self {
        match archetype {
            Archetype::Reactive    => Forager::Reactive(ReactiveAgent::new(id, base_position)),
            Archetype::StateBased  => Forager::StateBased(StateBasedAgent::new(id, base_position)),
            Archetype::GoalBased   => Forager::GoalBased(GoalBasedAgent::new(id, base_position)),
            Archetype::Cooperative => Forager::Cooperative(CooperativeAgent::new(id, base_position)),
        }
    }

    /// Run one tick of this agent's strategy.
    pub fn step(&mut self, ctx: &mut StepContext<'_>) {
        match self {
            Forager::Reactive(a)    => a.step(ctx),
            Forager::StateBased(a)  => a.step(ctx),
            Forager::GoalBased(a)   => a.step(ctx),
            Forager::Cooperative(a) => a.step(ctx),
        }
    }

    pub fn archetype(&self) -> Archetype {
        match self {
            Forager::Reactive(_)    => Archetype::Reactive,
            Forager::StateBased(_)  => Archetype::StateBased,
            Forager::GoalBased(_)   => Archetype::GoalBased,
            Forager::Cooperative(_) => Archetype::Cooperative,
        }
    }

    pub fn core(&self) -> &AgentCore {
        match self {
            Forager::Reactive(a)    => &a.core,
            Forager::StateBased(a)  => &a.core,
            Forager::GoalBased(a)   => &a.core,
            Forager::Cooperative(a) => &a.core,
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.core().id
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.core().score
    }

    #[inline]
    pub fn carried(&self) -> Option<&Resource> {
        self.core().carried.as_ref()
    }

    /// The agent's observation log.  Reactive agents keep none.
    pub fn observation_log(&self) -> Option<&[Observation]> {
        match self {
            Forager::Reactive(_)    => None,
            Forager::StateBased(a)  => Some(a.log()),
            Forager::GoalBased(a)   => Some(a.log()),
            Forager::Cooperative(a) => Some(a.log()),
        }
    }

    /// Current destination, for the strategies that have one.
    pub fn destination(&self) -> Option<GridPos> {
        match self {
            Forager::Reactive(_)    => None,
            Forager::StateBased(a)  => a.destination,
            Forager::GoalBased(a)   => a.destination,
            Forager::Cooperative(a) => a.destination,
        }
    }

    /// The coordinator-facing handle.  Only state-based and goal-based agents
    /// take direction; cooperative agents coordinate through the beliefs.
    pub fn as_directable_mut(&mut self) -> Option<&mut dyn Directable> {
        match self {
            Forager::StateBased(a) => Some(a),
            Forager::GoalBased(a)  => Some(a),
            Forager::Reactive(_) | Forager::Cooperative(_) => None,
        }
    }
}
