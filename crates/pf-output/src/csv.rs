//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `score_series.csv`
//! - `deliveries.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, DeliveryRow, OutputResult, ScoreRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    scores:     Writer<File>,
    deliveries: Writer<File>,
    snapshots:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut scores = Writer::from_path(dir.join("score_series.csv"))?;
        scores.write_record(["tick", "reactive", "state_based", "goal_based", "cooperative"])?;

        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(["tick", "kind", "utility", "x", "y"])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "archetype", "tick", "x", "y", "carrying"])?;

        Ok(Self {
            scores,
            deliveries,
            snapshots,
            finished: false,
        })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_scores(&mut self, row: &ScoreRow) -> OutputResult<()> {
        self.scores.write_record(&[
            row.tick.to_string(),
            row.reactive.to_string(),
            row.state_based.to_string(),
            row.goal_based.to_string(),
            row.cooperative.to_string(),
        ])?;
        Ok(())
    }

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        self.deliveries.write_record(&[
            row.tick.to_string(),
            row.kind.as_str().to_owned(),
            row.utility.to_string(),
            row.x.to_string(),
            row.y.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.archetype.as_str().to_owned(),
                row.tick.to_string(),
                opt(row.x),
                opt(row.y),
                opt(row.carrying),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.scores.flush()?;
        self.deliveries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
