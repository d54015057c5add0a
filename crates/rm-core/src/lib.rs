//! `rm-core`: foundational types for the `ride_match` workspace.
//!
//! This crate is a dependency of every other `rm-*` crate.  It has no `rm-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`ids`]       | `Location`, `DriverId`                               |
//! | [`distance`]  | `Distance` (finite, non-negative, totally ordered)   |
//! | [`config`]    | `DispatchConfig`, fare arithmetic                    |
//! | [`error`]     | `CoreError`, `CoreResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod distance;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DispatchConfig;
pub use distance::Distance;
pub use error::{CoreError, CoreResult};
pub use ids::{DriverId, Location};
