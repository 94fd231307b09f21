//! The state-based agent: remembers where it has been and relies on the
//! coordinator for targets.

use rustc_hash::FxHashSet;

use pf_core::{AgentId, GridPos};
use pf_grid::Occupant;

use crate::movement::{locate, step_closest, wander};
use crate::{AgentCore, Directable, Goal, Observation, StepContext};

/// Explores preferring unvisited cells, logs what it sees, and follows
/// destinations handed down by the coordinator.
///
/// It has no global knowledge of where resources are: when a destination
/// turns out to be empty it simply goes back to exploring.
#[derive(Debug, Clone)]
pub struct StateBasedAgent {
    pub core:        AgentCore,
    pub goal:        Goal,
    pub destination: Option<GridPos>,
    visited:         FxHashSet<GridPos>,
    log:             Vec<Observation>,
}

impl StateBasedAgent {
    pub fn new(id: AgentId, base_position: GridPos) -> Self {
        Self {
            core:        AgentCore::new(id, base_position),
            goal:        Goal::Explore,
            destination: None,
            visited:     FxHashSet::default(),
            log:         Vec::new(),
        }
    }

    /// Observations gathered since the last report at base.
    pub fn log(&self) -> &[Observation] {
        &self.log
    }

    pub fn has_visited(&self, pos: GridPos) -> bool {
        self.visited.contains(&pos)
    }

    pub fn step(&mut self, ctx: &mut StepContext<'_>) {
        let Some(pos) = locate(ctx.world, self.core.id) else { return };
        if self.core.is_carrying() {
            self.goal = Goal::Transport;
        }

        match self.goal {
            Goal::Transport    => self.transport(ctx, pos),
            Goal::SeekResource => self.seek(ctx, pos),
            Goal::Collect      => self.collect(ctx, pos),
            Goal::Explore      => self.explore(ctx, pos),
        }
    }

    fn seek(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        let Some(dest) = self.destination else {
            self.explore(ctx, pos);
            return;
        };
        if pos == dest {
            self.goal = Goal::Collect;
            self.collect(ctx, pos);
            return;
        }
        if step_closest(ctx.world, self.core.id, pos, dest) == dest {
            self.goal = Goal::Collect;
        }
    }

    fn collect(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        self.destination = None;
        if self.core.pick_up_first_at(ctx.world, pos) {
            self.goal = Goal::Transport;
        } else {
            self.goal = Goal::Explore;
        }
    }

    /// Step to a random unvisited neighbour (any neighbour if all are
    /// visited).  Structures and resources on the new cell are logged, and
    /// the first unclaimed resource is picked up on the spot.
    fn explore(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        let neighbours = ctx.world.grid.neighbors(pos);
        let unvisited: Vec<GridPos> =
            neighbours.iter().copied().filter(|n| !self.visited.contains(n)).collect();
        let Some(next) = wander(ctx.world, ctx.rng, self.core.id, &unvisited, &neighbours) else {
            return;
        };
        self.visited.insert(next);

        let seen: Vec<Occupant> = ctx.world.grid.contents(next).to_vec();
        for occupant in seen {
            match occupant {
                Occupant::Structure(_) => self.log.push(Observation::structure(next)),
                Occupant::Resource(id) => {
                    let Some(kind) = ctx.world.resource(id).filter(|r| !r.is_claimed()).map(|r| r.kind)
                    else {
                        continue;
                    };
                    self.log.push(Observation::resource(kind, next));
                    if !self.core.is_carrying() && self.core.pick_up(ctx.world, id) {
                        self.goal = Goal::Transport;
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Walk home; once there, deliver, report the log, and adopt whatever
    /// the coordinator currently intends for this agent.
    fn transport(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        let base = self.core.base_position;
        if pos != base {
            step_closest(ctx.world, self.core.id, pos, base);
            return;
        }
        self.core.deliver(ctx.world);

        ctx.coordinator.receive_info(self.core.id, &self.log);
        self.log.clear();

        self.destination = ctx.coordinator.query_intention(self.core.id);
        self.goal = if self.destination.is_some() { Goal::SeekResource } else { Goal::Explore };
    }
}

impl Directable for StateBasedAgent {
    fn agent_id(&self) -> AgentId {
        self.core.id
    }

    fn set_destination(&mut self, destination: GridPos) {
        self.destination = Some(destination);
        self.goal = Goal::SeekResource;
    }

    fn force_explore(&mut self) {
        self.goal = Goal::Explore;
    }
}
