//! `pf-core` — foundational types for the `planet_forage` simulation.
//!
//! This crate is a dependency of every other `pf-*` crate.  It has no `pf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ResourceId`, `StructureId`                |
//! | [`pos`]         | `GridPos`, Euclidean distance, sign-step              |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (placement)          |
//! | [`config`]      | `SimConfig`, `Population`                             |
//! | [`error`]       | `PfError`, `PfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_CRYSTAL_UTILITY, DEFAULT_METAL_UTILITY, Population, SimConfig};
pub use error::{PfError, PfResult};
pub use ids::{AgentId, ResourceId, StructureId};
pub use pos::GridPos;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
