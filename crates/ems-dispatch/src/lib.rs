//! `ems-dispatch` — scenario model, CSV loading, and the two-phase
//! ambulance-to-incident assignment engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`scenario`] | `Scenario` — sorted fleet snapshot bound to a network     |
//! | [`engine`]   | `Dispatcher`, `DispatchPlan`, `Assignment`                |
//! | [`loader`]   | CSV loaders for edge lists and fleet units                |
//! | [`error`]    | `DispatchError`, `DispatchResult<T>`                      |
//!
//! # Typical flow
//!
//! ```
//! use ems_core::{Ambulance, AmbulanceStatus, DispatchConfig, Incident};
//! use ems_graph::{AStarRouter, RoadNetworkBuilder};
//! use ems_dispatch::{Dispatcher, Scenario};
//!
//! let mut b = RoadNetworkBuilder::new();
//! let x = b.add_vertex("x");
//! let y = b.add_vertex("y");
//! b.add_edge(x, y, 4.0).unwrap();
//! let mut net = b.build();
//!
//! let scenario = Scenario::resolve(
//!     &net,
//!     &[Ambulance::new("x", AmbulanceStatus::Free)],
//!     &[],
//!     &[Incident::new("y")],
//! ).unwrap();
//! scenario.attach_to(&mut net);
//!
//! let router = AStarRouter::for_network(&net);
//! let plan = Dispatcher::new(&net, &router, DispatchConfig::default())
//!     .plan(&scenario)
//!     .unwrap();
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan.get(y).unwrap().path.weight, 4.0);
//! ```

pub mod engine;
pub mod error;
pub mod loader;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use engine::{Assignment, Dispatcher, DispatchPlan};
pub use error::{DispatchError, DispatchResult};
pub use loader::{load_network_csv, load_network_reader, load_scenario, load_units_csv,
                 load_units_reader, UnitRows};
pub use scenario::Scenario;
