//! Fields every foraging agent shares, and the goal enum the planning
//! agents cycle through.

use pf_core::{AgentId, GridPos, ResourceId};
use pf_world::{DeliveryRecord, Resource, World};

/// The common record embedded in every strategy.
#[derive(Debug, Clone)]
pub struct AgentCore {
    pub id:            AgentId,
    pub base_position: GridPos,
    /// The resource currently carried.  Owned exclusively by this agent from
    /// claim until delivery.
    pub carried:       Option<Resource>,
    /// Accumulated delivered utility.
    pub score:         u64,
}

impl AgentCore {
    pub fn new(id: AgentId, base_position: GridPos) -> Self {
        Self { id, base_position, carried: None, score: 0 }
    }

    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.carried.is_some()
    }

    /// Claim resource `id` from the world and start carrying it.
    ///
    /// Returns `false` if someone else got there first.
    pub fn pick_up(&mut self, world: &mut World, id: ResourceId) -> bool {
        match world.claim(id) {
            Some(resource) => {
                self.carried = Some(resource);
                true
            }
            None => false,
        }
    }

    /// Claim the first unclaimed resource on `position`.
    pub fn pick_up_first_at(&mut self, world: &mut World, position: GridPos) -> bool {
        match world.claim_first_at(position) {
            Some(resource) => {
                self.carried = Some(resource);
                true
            }
            None => false,
        }
    }

    /// Hand the carried resource to the base and credit its utility.
    ///
    /// The carried slot is cleared whether or not the base recorded it.
    pub fn deliver(&mut self, world: &mut World) -> Option<DeliveryRecord> {
        let resource = self.carried.take()?;
        let record = world.deliver(resource)?;
        self.score += u64::from(record.utility);
        tracing::debug!(agent = %self.id, score = self.score, "delivery credited");
        Some(record)
    }
}

/// Goal of a state-based or goal-based agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    #[default]
    Explore,
    SeekResource,
    Collect,
    Transport,
}

impl Goal {
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Explore      => "explore",
            Goal::SeekResource => "seek_resource",
            Goal::Collect      => "collect",
            Goal::Transport    => "transport",
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
