//! Fluent builder and placement routine for constructing a [`Sim`].

use pf_bdi::Coordinator;
use pf_behavior::{Archetype, Forager};
use pf_core::{AgentId, AgentRng, GridPos, Population, SimConfig, SimRng, Tick};
use pf_grid::Occupant;
use pf_world::{ResourceKind, World};

use crate::{ScoreBoard, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Placement order
///
/// 1. Base and coordinator at `config.base_position()`.
/// 2. Explicitly positioned resources, structures, and agents.
/// 3. The random population: crystals, metals, structures, then agents in
///    id order.  Each random position is drawn uniformly from the cells that
///    are empty and not the base, so random entities never share a cell.
///
/// Agents are numbered in stepping order: every reactive agent, then
/// state-based, goal-based, cooperative.  Within a group, explicitly
/// positioned agents come first in the order they were added.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .population(Population { crystals: 20, reactive: 3, ..Default::default() })
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    population: Population,
    resources:  Vec<(ResourceKind, GridPos)>,
    structures: Vec<GridPos>,
    agents:     Vec<(Archetype, GridPos)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            population: Population::default(),
            resources:  Vec::new(),
            structures: Vec::new(),
            agents:     Vec::new(),
        }
    }

    /// Counts of randomly placed entities.
    pub fn population(mut self, population: Population) -> Self {
        self.population = population;
        self
    }

    /// Place a resource at a fixed position.  Utility comes from the config.
    pub fn resource(mut self, kind: ResourceKind, position: GridPos) -> Self {
        self.resources.push((kind, position));
        self
    }

    /// Place a structure at a fixed position.
    pub fn structure(mut self, position: GridPos) -> Self {
        self.structures.push(position);
        self
    }

    /// Place an agent at a fixed position.  Any cell is allowed, the base
    /// included.
    pub fn agent(mut self, archetype: Archetype, position: GridPos) -> Self {
        self.agents.push((archetype, position));
        self
    }

    /// Validate the config, place everything, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let config = self.config;
        let base = config.base_position();

        let mut world = World::new(config.width, config.height, base)?;
        world.grid.place(Occupant::Coordinator, base)?;
        let coordinator = Coordinator::new(base);

        // ── Explicit placements ───────────────────────────────────────────
        for &(kind, pos) in &self.resources {
            world.spawn_resource(kind, utility_of(&config, kind), pos)?;
        }
        for &pos in &self.structures {
            world.spawn_structure(pos)?;
        }

        // Stepping order: group rank, then explicit before random.
        let mut roster: Vec<(Archetype, Option<GridPos>)> =
            self.agents.iter().map(|&(a, p)| (a, Some(p))).collect();
        let pop = &self.population;
        for (archetype, count) in [
            (Archetype::Reactive,    pop.reactive),
            (Archetype::StateBased,  pop.state_based),
            (Archetype::GoalBased,   pop.goal_based),
            (Archetype::Cooperative, pop.cooperative),
        ] {
            roster.extend(std::iter::repeat_n((archetype, None), count));
        }
        roster.sort_by_key(|&(archetype, _)| archetype.index());

        let ids: Vec<AgentId> =
            (0..roster.len()).map(AgentId::try_from).collect::<Result<_, _>>()?;
        for (&id, &(_, pos)) in ids.iter().zip(&roster) {
            if let Some(pos) = pos {
                world.place_agent(id, pos)?;
            }
        }

        // ── Random placements ─────────────────────────────────────────────
        let mut free = FreeCells::new(&world);
        let needed = pop.total();
        if needed > free.len() {
            return Err(SimError::GridFull { needed, available: free.len() });
        }

        let mut rng = SimRng::new(config.seed);
        for _ in 0..pop.crystals {
            let pos = free.take(&mut rng)?;
            world.spawn_resource(ResourceKind::Crystal, config.crystal_utility, pos)?;
        }
        for _ in 0..pop.metals {
            let pos = free.take(&mut rng)?;
            world.spawn_resource(ResourceKind::Metal, config.metal_utility, pos)?;
        }
        for _ in 0..pop.structures {
            let pos = free.take(&mut rng)?;
            world.spawn_structure(pos)?;
        }
        for (&id, &(_, pos)) in ids.iter().zip(&roster) {
            if pos.is_none() {
                let pos = free.take(&mut rng)?;
                world.place_agent(id, pos)?;
            }
        }

        let agents: Vec<Forager> = ids
            .iter()
            .zip(&roster)
            .map(|(&id, &(archetype, _))| Forager::new(archetype, id, base))
            .collect();
        let rngs: Vec<AgentRng> = agents.iter().map(|a| AgentRng::new(config.seed, a.id())).collect();

        tracing::info!(
            width = config.width,
            height = config.height,
            agents = agents.len(),
            resources = world.resource_count(),
            structures = world.structures().len(),
            "simulation built"
        );

        Ok(Sim {
            config,
            now: Tick::ZERO,
            world,
            agents,
            rngs,
            coordinator,
            scores: ScoreBoard::new(),
        })
    }
}

fn utility_of(config: &SimConfig, kind: ResourceKind) -> u32 {
    match kind {
        ResourceKind::Crystal => config.crystal_utility,
        ResourceKind::Metal   => config.metal_utility,
    }
}

/// Cells still open to random placement: empty and not the base.
///
/// Collected once in row-major order; each draw removes its cell with
/// `swap_remove`, so the sequence depends only on the seed and the explicit
/// placements.
struct FreeCells(Vec<GridPos>);

impl FreeCells {
    fn new(world: &World) -> Self {
        let base = world.base_position();
        FreeCells(
            world
                .grid
                .positions()
                .filter(|&p| p != base && world.grid.is_cell_empty(p))
                .collect(),
        )
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn take(&mut self, rng: &mut SimRng) -> SimResult<GridPos> {
        let i = rng
            .pick_index(self.0.len())
            .ok_or(SimError::GridFull { needed: 1, available: 0 })?;
        Ok(self.0.swap_remove(i))
    }
}
