//! `uav-core`: foundational types for the UAV flight simulator.
//!
//! This crate is a dependency of every other `uav-*` crate.  It has no
//! `uav-*` dependencies and minimal external ones (`thiserror` and `tracing`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `UavId`                                               |
//! | [`geo`]         | `Vec2`, distance / dot / signed angle helpers         |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig`, `key=value` loader                       |
//! | [`error`]       | `CoreError`, `CoreResult`, `ConfigWarning`            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, load_config, load_config_reader};
pub use error::{ConfigWarning, CoreError, CoreResult};
pub use geo::Vec2;
pub use ids::UavId;
pub use time::{SimClock, Tick};
