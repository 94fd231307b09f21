//! Simulation observer trait for progress reporting and data collection.

use pf_behavior::Forager;
use pf_core::Tick;
use pf_world::{DeliveryRecord, World};

use crate::ScoreBoard;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers get read-only views; they never
/// mutate simulation state.
///
/// # Example — delivery printer
///
/// ```rust,ignore
/// struct DeliveryPrinter;
///
/// impl SimObserver for DeliveryPrinter {
///     fn on_delivery(&mut self, tick: Tick, record: &DeliveryRecord) {
///         println!("{tick}: {} worth {}", record.kind, record.utility);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once for every ledger entry appended during the tick, in
    /// ledger order, after all agents and the coordinator have acted.
    fn on_delivery(&mut self, _tick: Tick, _record: &DeliveryRecord) {}

    /// Called at the end of each tick with the cumulative per-archetype
    /// scores.
    fn on_tick_end(&mut self, _tick: Tick, _scores: &ScoreBoard) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to the world and every agent so output
    /// writers can record positions without the sim knowing any format.
    fn on_snapshot(&mut self, _tick: Tick, _world: &World, _agents: &[Forager]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
