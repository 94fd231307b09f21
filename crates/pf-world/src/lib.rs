//! `pf-world` — entities and the claim/deliver protocol.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`resource`]    | `ResourceKind`, `Resource` (monotonic claimed flag)       |
//! | [`structure`]   | `Structure` (carrier set, being-carried flag)             |
//! | [`base`]        | `Base`, `DeliveryRecord` ledger                           |
//! | [`world`]       | `World` — grid + resource arena + structures + base       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on entity and record types. |

pub mod base;
pub mod resource;
pub mod structure;
pub mod world;


pub use base::{Base, DeliveryRecord};
pub use resource::{Resource, ResourceKind};
pub use structure::Structure;
pub use world::World;
