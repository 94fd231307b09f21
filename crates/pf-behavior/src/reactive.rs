//! The reactive agent: random walk, grab, head home.

use pf_core::{AgentId, GridPos};

use crate::movement::{locate, step_sign, wander};
use crate::{AgentCore, StepContext};

/// No memory beyond what it carries.
///
/// ```text
/// exploring ──(claims a resource)──▶ transporting
///     ▲                                    │
///     └──────────(delivers at base)────────┘
/// ```
#[derive(Debug, Clone)]
pub struct ReactiveAgent {
    pub core: AgentCore,
}

impl ReactiveAgent {
    pub fn new(id: AgentId, base_position: GridPos) -> Self {
        Self { core: AgentCore::new(id, base_position) }
    }

    pub fn step(&mut self, ctx: &mut StepContext<'_>) {
        let Some(pos) = locate(ctx.world, self.core.id) else { return };
        if self.core.is_carrying() {
            self.transport(ctx, pos);
        } else {
            self.explore(ctx, pos);
        }
    }

    /// Step to a random neighbour free of structures; claim the first
    /// unclaimed resource found there.
    fn explore(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        let free: Vec<GridPos> = ctx
            .world
            .grid
            .neighbors(pos)
            .into_iter()
            .filter(|&n| !ctx.world.grid.has_structure(n))
            .collect();
        let Some(next) = wander(ctx.world, ctx.rng, self.core.id, &free, &[]) else { return };

        let found = ctx.world.unclaimed_at(next).next().map(|r| r.id);
        if let Some(id) = found {
            self.core.pick_up(ctx.world, id);
        }
    }

    fn transport(&mut self, ctx: &mut StepContext<'_>, pos: GridPos) {
        let base = self.core.base_position;
        if pos != base {
            step_sign(ctx.world, self.core.id, pos, base);
            return;
        }
        self.core.deliver(ctx.world);
        self.explore(ctx, pos);
    }
}
