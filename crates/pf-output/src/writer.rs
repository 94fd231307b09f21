//! The `OutputWriter` trait implemented by output backends.

use crate::{AgentSnapshotRow, DeliveryRow, OutputResult, ScoreRow};

/// A sink for the three output series.
///
/// Errors are returned here; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores the first one because observer hooks cannot fail.
pub trait OutputWriter {
    /// Write one row of per-archetype score totals.
    fn write_scores(&mut self, row: &ScoreRow) -> OutputResult<()>;

    /// Write one ledger entry.
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
