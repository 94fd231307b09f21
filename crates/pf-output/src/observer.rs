//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use pf_behavior::{Archetype, Forager};
use pf_core::Tick;
use pf_sim::{ScoreBoard, SimObserver};
use pf_world::{DeliveryRecord, World};

use crate::row::{AgentSnapshotRow, DeliveryRow, ScoreRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the score series, the delivery ledger, and
/// agent snapshots to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_delivery(&mut self, tick: Tick, record: &DeliveryRecord) {
        let row = DeliveryRow {
            tick:    tick.0,
            kind:    record.kind,
            utility: record.utility,
            x:       record.position.x,
            y:       record.position.y,
        };
        let result = self.writer.write_delivery(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, scores: &ScoreBoard) {
        let row = ScoreRow {
            tick:        tick.0,
            reactive:    scores.get(Archetype::Reactive),
            state_based: scores.get(Archetype::StateBased),
            goal_based:  scores.get(Archetype::GoalBased),
            cooperative: scores.get(Archetype::Cooperative),
        };
        let result = self.writer.write_scores(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World, agents: &[Forager]) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|agent| {
                let pos = world.agent_position(agent.id());
                AgentSnapshotRow {
                    agent_id:  agent.id().0,
                    archetype: agent.archetype(),
                    tick:      tick.0,
                    x:         pos.map(|p| p.x),
                    y:         pos.map(|p| p.y),
                    carrying:  agent.carried().map(|r| r.kind),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
