//! `pf-behavior` — the four foraging strategies and their seams.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                      |
//! |-------------------|---------------------------------------------------------------|
//! | [`agent`]         | `AgentCore` (id, base, carried resource, score), `Goal`       |
//! | [`observation`]   | `Observation`, `ObservationKind`                              |
//! | [`context`]       | `StepContext<'a>` — what an agent may touch during its step   |
//! | [`coordination`]  | `Coordination`, `Directable` traits; `NoCoordination`         |
//! | [`movement`]      | sign step, closest-neighbour step, random wander              |
//! | [`reactive`]      | `ReactiveAgent`                                               |
//! | [`state_based`]   | `StateBasedAgent`                                             |
//! | [`goal_based`]    | `GoalBasedAgent`                                              |
//! | [`cooperative`]   | `CooperativeAgent`                                            |
//! | [`forager`]       | `Forager` tagged variant, `Archetype`                         |
//!
//! # Design notes
//!
//! Agents act one at a time.  Each step receives exclusive access to the
//! world through [`StepContext`], so a move and a claim made in the same
//! step are atomic with respect to every other agent: the first agent to
//! examine a cell in stepping order wins its resource.
//!
//! The coordinator is never reached through global state.  The simulation
//! loop owns it and lends it to each step as `&mut dyn Coordination`.

pub mod agent;
pub mod context;
pub mod cooperative;
pub mod coordination;
pub mod forager;
pub mod goal_based;
pub mod movement;
pub mod observation;
pub mod reactive;
pub mod state_based;

#[cfg(test)]
mod tests;

pub use agent::{AgentCore, Goal};
pub use context::StepContext;
pub use cooperative::CooperativeAgent;
pub use coordination::{Coordination, Directable, NoCoordination};
pub use forager::{Archetype, Forager};
pub use goal_based::GoalBasedAgent;
pub use movement::closest_neighbour;
pub use observation::{Observation, ObservationKind};
pub use reactive::ReactiveAgent;
pub use state_based::StateBasedAgent;
