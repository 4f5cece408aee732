//! `ems-graph` — road network, landmark heuristic, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`network`]   | `RoadNetwork` (CSR), `RoadNetworkBuilder`, `VertexRole`  |
//! | [`landmarks`] | `LandmarkTable` (admissible A* lower bounds)             |
//! | [`router`]    | `Router` trait, `AStarRouter`                            |
//! | [`path`]      | `Path` and pure composition (`with_delay`, `join`)       |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.         |

pub mod error;
pub mod landmarks;
pub mod network;
pub mod path;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use landmarks::LandmarkTable;
pub use network::{RoadNetwork, RoadNetworkBuilder, VertexRole};
pub use path::Path;
pub use router::{AStarRouter, Router};
