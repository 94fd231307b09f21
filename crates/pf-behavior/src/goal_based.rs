//! The goal-based agent: targets the nearest known resource directly.

use pf_core::{AgentId, GridPos};

use crate::movement::{locate, sightings, step_closest, wander};
use crate::{AgentCore, Directable, Goal, Observation, StepContext};

/// Shares the four goals of [`StateBasedAgent`](crate::StateBasedAgent) but
/// picks its own targets: whenever it needs one it queries the world for the
/// nearest unclaimed resource.
#[derive(Debug, Clone)]
pub struct GoalBasedAgent {
    pub core:        AgentCore,
    pub goal:        Goal,
    pub destination: Option<GridPos>,
    log:             Vec<Observation>,
}

impl GoalBasedAgent {
    pub fn new(id: AgentId, base_position: GridPos) -> Self {
        Self {
            core:        AgentCore::new(id, base_position),
            goal:        Goal::Explore,
            destination: None,
            log:         Vec::new(),
        }
    }

    pub fn log(&self) -> &[Observation] {
        &self.log
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

    /// Nearest unclaimed resource by Euclidean distance; ties go to the
    /// lowest resource id.
    fn nearest_resource(ctx: &StepContext<'_>, pos: GridPos) -> Option<GridPos> {
        let mut best: Option<(GridPos, f64)> = None;
        for resource in ctx.world.unclaimed_resources() {
            let d = pos.distance(resource.position);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((resource.position, d));
            }
        }
        best.map(|(p, _)| p)
    }

    fn retarget(&mut self, ctx: &StepContext<'_>, pos: GridPos) {
        match Self::nearest_resource(ctx, pos) {
            Some(target) => self.set_destination(target),
            None => {
                self.destination = None;
                self.goal = Goal::Explore;
            }
        }
    }

    fn seek(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        let Some(dest) = self.destination else {
            self.retarget(ctx, pos);
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

    /// Claim the first unclaimed resource here, or re-derive a target.
    fn collect(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        if self.core.pick_up_first_at(ctx.world, pos) {
            self.destination = None;
            self.goal = Goal::Transport;
        } else {
            self.retarget(ctx, pos);
        }
    }

    /// Pick up what lies underfoot; otherwise step to a uniformly random
    /// neighbour and log what is there.
    fn explore(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        if ctx.world.unclaimed_at(pos).next().is_some() {
            self.goal = Goal::Collect;
            self.collect(ctx, pos);
            return;
        }

        let neighbours = ctx.world.grid.neighbors(pos);
        let Some(next) = wander(ctx.world, ctx.rng, self.core.id, &neighbours, &[]) else { return };
        self.log.extend(sightings(ctx.world, next));
    }

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

impl Directable for GoalBasedAgent {
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
