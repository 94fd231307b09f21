//! `pf-output` — simulation output writers for the planet_forage simulation.
//!
//! | Writer        | Files created                                                   |
//! |---------------|-----------------------------------------------------------------|
//! | [`CsvWriter`] | `score_series.csv`, `deliveries.csv`, `agent_snapshots.csv`     |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `pf_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pf_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, DeliveryRow, ScoreRow};
pub use writer::OutputWriter;
