//! The cooperative agent: rates resources by value for distance and shares
//! everything it has seen when it gets home.

use pf_core::{AgentId, GridPos};

use crate::movement::{locate, sightings, step_closest, wander};
use crate::{AgentCore, Observation, StepContext};

/// Self-coordinating forager.  The coordinator never assigns it intentions;
/// instead it writes its sightings straight into the shared beliefs.
///
/// ```text
/// analyze ──(worthwhile resource underfoot)──▶ seeking ──(collected)──▶ transport
///    ▲                                            │                        │
///    └─────────────(nothing left to collect)──────┘◀─────(delivered)───────┘
/// ```
#[derive(Debug, Clone)]
pub struct CooperativeAgent {
    pub core:        AgentCore,
    pub destination: Option<GridPos>,
    log:             Vec<Observation>,
}

impl CooperativeAgent {
    pub fn new(id: AgentId, base_position: GridPos) -> Self {
        Self {
            core:        AgentCore::new(id, base_position),
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
            self.transport(ctx, pos);
        } else if let Some(dest) = self.destination {
            self.seek(ctx, pos, dest);
        } else {
            self.analyze(ctx, pos);
        }
    }

    /// Value of a resource: utility over one plus its distance to base.
    fn rating(&self, utility: u32, at: GridPos) -> f64 {
        f64::from(utility) / (at.distance(self.core.base_position) + 1.0)
    }

    /// Pick the best-rated resource underfoot as destination, or explore.
    /// Either way, log what is visible on the cell the agent ends up on.
    fn analyze(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        let mut best: Option<(GridPos, f64)> = None;
        for resource in ctx.world.unclaimed_at(pos) {
            let r = self.rating(resource.utility, resource.position);
            if best.is_none_or(|(_, best_r)| r > best_r) {
                best = Some((resource.position, r));
            }
        }

        let here = match best {
            Some((target, _)) => {
                self.destination = Some(target);
                pos
            }
            None => self.explore(ctx, pos),
        };

        for seen in sightings(ctx.world, here) {
            self.record(seen);
        }
    }

    /// Step to a random neighbour not yet logged as explored.
    fn explore(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) -> GridPos {
        let neighbours = ctx.world.grid.neighbors(pos);
        let fresh: Vec<GridPos> = neighbours
            .iter()
            .copied()
            .filter(|&n| !self.log.contains(&Observation::explored(n)))
            .collect();
        match wander(ctx.world, ctx.rng, self.core.id, &fresh, &neighbours) {
            Some(next) => {
                self.record(Observation::explored(next));
                next
            }
            None => pos,
        }
    }

    /// Head for the destination; on arrival try to collect.  The destination
    /// is cleared even if someone else took the resource first.
    fn seek(&mut self, ctx: &mut StepContext<'_>, pos: GridPos, dest: GridPos) {
        if pos != dest {
            step_closest(ctx.world, self.core.id, pos, dest);
            return;
        }
        self.core.pick_up_first_at(ctx.world, pos);
        self.destination = None;
    }

    /// Walk home; once there, deliver, flush the log into the beliefs, and
    /// wander off again.
    fn transport(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        let base = self.core.base_position;
        if pos != base {
            step_closest(ctx.world, self.core.id, pos, base);
            return;
        }
        self.core.deliver(ctx.world);
        self.destination = None;
        self.flush(ctx);
        self.explore(ctx, pos);
    }

    /// Hand every sighting to the coordinator.  Structure and resource
    /// sightings leave the log; explored cells stay as the agent's own memory.
    fn flush(&mut self, ctx: &mut StepContext<'_>) {
        ctx.coordinator.absorb(self.core.id, &self.log);
        self.log.retain(Observation::is_explored);
    }

    fn record(&mut self, seen: Observation) {
        if !self.log.contains(&seen) {
            self.log.push(seen);
        }
    }
}
