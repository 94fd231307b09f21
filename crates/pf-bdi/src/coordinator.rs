//! `Coordinator` — the single BDI agent stationed at the base.
//!
//! # Tick protocol
//!
//! ```text
//! during agent steps   receive_info / absorb   (reports from agents at base)
//!                      query_intention         (agents adopting a target)
//! after agent steps    step()                  (force explore if no beliefs,
//!                                               then direct_agents)
//! ```
//!
//! Redirection therefore lags a report by one tick.

use std::collections::BTreeMap;

use pf_behavior::{Coordination, Forager, Observation};
use pf_core::{AgentId, GridPos};

use crate::Beliefs;

/// Holds the aggregated beliefs and the per-agent intentions.
///
/// The coordinator never leaves the base: its only grid presence is the
/// `Occupant::Coordinator` placed on the base cell at build time, so every
/// report it receives is processed.
#[derive(Debug, Clone)]
pub struct Coordinator {
    base:       GridPos,
    beliefs:    Beliefs,
    intentions: BTreeMap<AgentId, GridPos>,
}

impl Coordinator {
    /// A coordinator stationed on the base at `base`.
    pub fn new(base: GridPos) -> Self {
        Self {
            base,
            beliefs:    Beliefs::new(),
            intentions: BTreeMap::new(),
        }
    }

    /// The cell the coordinator occupies, which is always the base.
    #[inline]
    pub fn position(&self) -> GridPos {
        self.base
    }

    pub fn beliefs(&self) -> &Beliefs {
        &self.beliefs
    }

    pub fn beliefs_mut(&mut self) -> &mut Beliefs {
        &mut self.beliefs
    }

    /// Current intentions in agent id order.
    pub fn intentions(&self) -> &BTreeMap<AgentId, GridPos> {
        &self.intentions
    }

    /// Assign a destination to every state-based and goal-based agent.
    ///
    /// Each agent takes the oldest confirmed resource, if any remain;
    /// otherwise it is told to explore.  A confirmed resource lying on a
    /// marked structure is discarded rather than assigned.  Cooperative and
    /// reactive agents are never directed.
    pub fn direct_agents(&mut self, agents: &mut [Forager]) {
        for forager in agents.iter_mut() {
            let Some(agent) = forager.as_directable_mut() else { continue };
            match self.next_target() {
                Some(target) => {
                    let id = agent.agent_id();
                    self.intentions.insert(id, target);
                    agent.set_destination(target);
                    tracing::debug!(agent = %id, %target, "intention assigned");
                }
                None => agent.force_explore(),
            }
        }
    }

    /// The coordinator's once-per-tick step, run after every agent has acted.
    pub fn step(&mut self, agents: &mut [Forager]) {
        if !self.beliefs.has_confirmed_resources() {
            for agent in agents.iter_mut().filter_map(Forager::as_directable_mut) {
                agent.force_explore();
            }
        }
        self.direct_agents(agents);

        let beliefs = &self.beliefs;
        self.intentions.retain(|_, target| !beliefs.is_marked(*target));
    }

    fn next_target(&mut self) -> Option<GridPos> {
        while let Some(entry) = self.beliefs.pop_confirmed() {
            if self.beliefs.is_marked(entry.position) {
                tracing::debug!(at = %entry.position, "confirmed resource on a marked structure; discarded");
                continue;
            }
            return Some(entry.position);
        }
        None
    }
}

impl Coordination for Coordinator {
    fn receive_info(&mut self, agent: AgentId, log: &[Observation]) {
        let mut merged = 0usize;
        for &entry in log {
            if self.beliefs.merge(entry) {
                merged += 1;
            }
        }
        if merged > 0 {
            tracing::debug!(%agent, merged, "beliefs updated");
        }
    }

    fn query_intention(&self, agent: AgentId) -> Option<GridPos> {
        self.intentions.get(&agent).copied()
    }

    fn absorb(&mut self, agent: AgentId, observations: &[Observation]) {
        for &entry in observations {
            self.beliefs.append(entry);
        }
        tracing::debug!(%agent, count = observations.len(), "observations absorbed");
    }
}
