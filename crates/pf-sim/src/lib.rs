//! `pf-sim` — tick loop orchestrator for the planet_forage simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Bookkeeping — agents on the base report their logs to the
//!                   coordinator; their scores are added to the score board.
//!   ② Agents      — each agent steps once, reactive → state-based →
//!                   goal-based → cooperative, registration order within a
//!                   group.
//!   ③ Coordinator — force explore when beliefs are empty, then assign
//!                   intentions to state-based and goal-based agents.
//!   ④ Observers   — on_delivery per new ledger entry, on_tick_end,
//!                   on_snapshot every output_interval_ticks.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pf_core::{Population, SimConfig};
//! use pf_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .population(Population { crystals: 10, metals: 5, reactive: 2, ..Default::default() })
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:?}", sim.scores());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod score;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use score::ScoreBoard;
pub use sim::Sim;
