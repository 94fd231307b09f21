//! `pf-bdi` — the belief-desire-intention coordinator.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`beliefs`]       | `Beliefs` — explored set, confirmed resources, structures |
//! | [`coordinator`]   | `Coordinator` — receive_info, direct_agents, step         |
//!
//! # Design notes
//!
//! Structures are tracked in the beliefs but never turned into intentions;
//! cooperative carrying is not implemented.  Intentions are only ever held
//! for state-based and goal-based agents.

pub mod beliefs;
pub mod coordinator;


pub use beliefs::Beliefs;
pub use coordinator::Coordinator;
