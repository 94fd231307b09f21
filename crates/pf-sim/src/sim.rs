//! The `Sim` struct and its tick loop.

use pf_bdi::Coordinator;
use pf_behavior::{Coordination, Forager, StepContext};
use pf_core::{AgentId, AgentRng, GridPos, SimConfig, Tick};
use pf_grid::Occupant;
use pf_world::{DeliveryRecord, World};

use crate::{NoopObserver, ScoreBoard, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim` owns the world, every agent, and the coordinator, and drives the
/// three-phase tick:
///
/// 1. **Bookkeeping**: every agent standing on the base reports its log to
///    the coordinator and has its score added to its archetype's total.
/// 2. **Agents**: each agent steps once, in id order (reactive, state-based,
///    goal-based, cooperative).  Every step gets exclusive access to the
///    world, so moves and claims never interleave.
/// 3. **Coordinator**: assigns intentions from the beliefs gathered so far.
///
/// A tick never fails; every branch resolves to a fallback.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (dimensions, seed, tick count, utilities).
    pub config: SimConfig,

    pub(crate) now:         Tick,
    pub(crate) world:       World,
    pub(crate) agents:      Vec<Forager>,
    pub(crate) rngs:        Vec<AgentRng>,
    pub(crate) coordinator: Coordinator,
    pub(crate) scores:      ScoreBoard,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.now < self.config.end_tick() {
            self.advance(observer);
        }
        observer.on_sim_end(self.now);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.advance(observer);
        }
        Ok(())
    }

    /// Run a single tick with no observer.
    pub fn step(&mut self) {
        self.advance(&mut NoopObserver);
    }

    // ── Read-only views ───────────────────────────────────────────────────

    /// The next tick to be processed.
    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn is_finished(&self) -> bool {
        self.now >= self.config.end_tick()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn cell_contents(&self, pos: GridPos) -> &[Occupant] {
        self.world.grid.contents(pos)
    }

    pub fn agents(&self) -> &[Forager] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Forager> {
        self.agents.get(id.index())
    }

    pub fn agent_position(&self, id: AgentId) -> Option<GridPos> {
        self.world.agent_position(id)
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// The base's delivery ledger.
    pub fn ledger(&self) -> &[DeliveryRecord] {
        self.world.base.records()
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn advance<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.now;
        observer.on_tick_start(now);

        let delivered_before = self.world.base.records().len();
        self.process_tick(now);
        for record in &self.world.base.records()[delivered_before..] {
            observer.on_delivery(now, record);
        }

        observer.on_tick_end(now, &self.scores);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.world, &self.agents);
        }

        self.now = now.next();
    }

    fn process_tick(&mut self, now: Tick) {
        let base = self.world.base_position();

        // ── Phase 1: bookkeeping for agents on the base ───────────────────
        for agent in &self.agents {
            if self.world.agent_position(agent.id()) != Some(base) {
                continue;
            }
            if let Some(log) = agent.observation_log() {
                self.coordinator.receive_info(agent.id(), log);
            }
            self.scores.add(agent.archetype(), agent.score());
        }

        // ── Phase 2: every agent steps once ───────────────────────────────
        for (agent, rng) in self.agents.iter_mut().zip(self.rngs.iter_mut()) {
            let mut ctx = StepContext::new(now, &mut self.world, &mut self.coordinator, rng);
            agent.step(&mut ctx);
        }

        // ── Phase 3: coordinator ──────────────────────────────────────────
        self.coordinator.step(&mut self.agents);

        tracing::trace!(tick = %now, delivered = self.world.base.records().len(), "tick complete");
    }
}
