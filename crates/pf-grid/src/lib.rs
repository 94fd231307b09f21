//! `pf-grid` — the bounded spatial grid every entity lives on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`grid`]     | `Grid` — neighbours, contents, place / remove / move       |
//! | [`occupant`] | `Occupant` tagged union (base, coordinator, agent, …)      |
//! | [`error`]    | `GridError`, `GridResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod occupant;


pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use occupant::Occupant;
