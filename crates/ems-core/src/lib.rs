//! `ems-core` — foundational types for the `rust_ems` dispatch planner.
//!
//! This crate is a dependency of every other `ems-*` crate.  It intentionally
//! has no `ems-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `VertexId`, `EdgeId`                                   |
//! | [`units`]  | `Ambulance`, `Hospital`, `Incident`, `AmbulanceStatus` |
//! | [`config`] | `DispatchConfig` (break / hospital penalties)          |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DispatchConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{EdgeId, VertexId};
pub use units::{Ambulance, AmbulanceStatus, Hospital, Incident};
