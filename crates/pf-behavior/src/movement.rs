//! Movement and perception helpers shared by the strategies.
//!
//! Two steering rules exist:
//!
//! - **sign step**: move each axis independently by the sign of its delta
//!   (reactive agents).
//! - **closest neighbour**: among the Moore neighbours, take the one with the
//!   smallest Euclidean distance to the target.  Ties go to the first
//!   neighbour in enumeration order, never to a random one.

use pf_core::{AgentId, AgentRng, GridPos};
use pf_grid::{Grid, Occupant};
use pf_world::World;

use crate::Observation;

/// The agent's current cell, or `None` (with a warning) if it is not placed.
pub(crate) fn locate(world: &World, agent: AgentId) -> Option<GridPos> {
    let pos = world.agent_position(agent);
    if pos.is_none() {
        tracing::warn!(%agent, "agent is not on the grid; skipping its step");
    }
    pos
}

/// First neighbour of `from` minimising Euclidean distance to `target`.
///
/// `None` only when `from` has no in-bounds neighbours (a 1×1 grid).
pub fn closest_neighbour(grid: &Grid, from: GridPos, target: GridPos) -> Option<GridPos> {
    let mut best: Option<(GridPos, f64)> = None;
    for candidate in grid.neighbors(from) {
        let d = candidate.distance(target);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((candidate, d));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Move `agent` to the neighbour closest to `target`.  Returns the new cell.
pub(crate) fn step_closest(world: &mut World, agent: AgentId, from: GridPos, target: GridPos) -> GridPos {
    match closest_neighbour(&world.grid, from, target) {
        Some(next) if world.move_agent(agent, next) => next,
        _ => from,
    }
}

/// Move `agent` one sign step toward `target`.  Out-of-bounds steps are
/// silently dropped.
pub(crate) fn step_sign(world: &mut World, agent: AgentId, from: GridPos, target: GridPos) -> GridPos {
    let next = from.step_toward(target);
    if world.move_agent(agent, next) { next } else { from }
}

/// Move `agent` to a uniformly random cell among `preferred`, or among
/// `fallback` when `preferred` is empty.
///
/// Returns `None` and emits the unreachable-move diagnostic when both are
/// empty; the agent then stands still for the tick.
pub(crate) fn wander(
    world:     &mut World,
    rng:       &mut AgentRng,
    agent:     AgentId,
    preferred: &[GridPos],
    fallback:  &[GridPos],
) -> Option<GridPos> {
    let pool = if preferred.is_empty() { fallback } else { preferred };
    let Some(&next) = rng.choose(pool) else {
        tracing::warn!(%agent, "no free neighbouring cell; standing still");
        return None;
    };
    world.move_agent(agent, next).then_some(next)
}

/// Structures and unclaimed resources visible on `pos`, in cell order.
pub(crate) fn sightings(world: &World, pos: GridPos) -> Vec<Observation> {
    world
        .grid
        .contents(pos)
        .iter()
        .filter_map(|occupant| match *occupant {
            Occupant::Structure(_) => Some(Observation::structure(pos)),
            Occupant::Resource(id) => world
                .resource(id)
                .filter(|r| !r.is_claimed())
                .map(|r| Observation::resource(r.kind, pos)),
            _ => None,
        })
        .collect()
}
