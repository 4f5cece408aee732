//! CSV scenario loader.
//!
//! # File formats
//!
//! **Edges** — one row per road segment:
//!
//! ```csv
//! from,to,weight
//! a,b,2.0
//! a,j,2.0
//! b,c,1.0
//! ```
//!
//! Vertices are created implicitly from the endpoint names; re-listing a
//! name maps to the same vertex.
//!
//! **Units** — one row per fleet unit:
//!
//! ```csv
//! vertex,kind,status
//! b,ambulance,2
//! e,ambulance,0
//! d,hospital,
//! i,incident,
//! ```
//!
//! `status` carries the numeric ambulance code (`0=free, 1=break,
//! 2=occupied`, anything else = not available) and stays empty for the
//! other kinds.  A unit row naming a vertex that appears in no edge is a
//! construction-time failure.

use std::io::Read;
use std::path::Path as FsPath;

use serde::Deserialize;

use ems_core::{Ambulance, AmbulanceStatus, Hospital, Incident};
use ems_graph::{RoadNetwork, RoadNetworkBuilder};

use crate::scenario::Scenario;
use crate::{DispatchError, DispatchResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EdgeRecord {
    from:   String,
    to:     String,
    weight: f64,
}

#[derive(Deserialize)]
struct UnitRecord {
    vertex: String,
    kind:   String,
    status: Option<i64>,
}

/// Unit records as parsed, before scenario resolution.
#[derive(Default)]
pub struct UnitRows {
    pub ambulances: Vec<Ambulance>,
    pub hospitals:  Vec<Hospital>,
    pub incidents:  Vec<Incident>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a road network from an edge-list CSV file.
pub fn load_network_csv(path: &FsPath) -> DispatchResult<RoadNetwork> {
    let file = std::fs::File::open(path).map_err(DispatchError::Io)?;
    load_network_reader(file)
}

/// Like [`load_network_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_network_reader<R: Read>(reader: R) -> DispatchResult<RoadNetwork> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = RoadNetworkBuilder::new();

    for result in csv_reader.deserialize::<EdgeRecord>() {
        let row = result.map_err(|e| DispatchError::Parse(e.to_string()))?;
        let from = builder.add_vertex(row.from.trim());
        let to   = builder.add_vertex(row.to.trim());
        builder.add_edge(from, to, row.weight)?;
    }

    Ok(builder.build())
}

/// Load fleet unit rows from a units CSV file.
pub fn load_units_csv(path: &FsPath) -> DispatchResult<UnitRows> {
    let file = std::fs::File::open(path).map_err(DispatchError::Io)?;
    load_units_reader(file)
}

/// Like [`load_units_csv`] but accepts any `Read` source.
pub fn load_units_reader<R: Read>(reader: R) -> DispatchResult<UnitRows> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = UnitRows::default();

    for result in csv_reader.deserialize::<UnitRecord>() {
        let row = result.map_err(|e| DispatchError::Parse(e.to_string()))?;
        let name = row.vertex.trim();
        match row.kind.trim() {
            "ambulance" => {
                let code = row.status.ok_or_else(|| {
                    DispatchError::Parse(format!("ambulance row '{name}' is missing a status code"))
                })?;
                rows.ambulances
                    .push(Ambulance::new(name, AmbulanceStatus::from_code(code)));
            }
            "hospital" => rows.hospitals.push(Hospital::new(name)),
            "incident" => rows.incidents.push(Incident::new(name)),
            other => {
                return Err(DispatchError::Parse(format!(
                    "unknown unit kind '{other}' for vertex '{name}'"
                )));
            }
        }
    }

    Ok(rows)
}

/// Load both files and bind them: build the network, resolve the scenario,
/// and attach the role payloads.  The returned pair is ready for
/// [`Dispatcher::plan`](crate::Dispatcher::plan).
pub fn load_scenario(
    edges_path: &FsPath,
    units_path: &FsPath,
) -> DispatchResult<(RoadNetwork, Scenario)> {
    let mut network = load_network_csv(edges_path)?;
    let units = load_units_csv(units_path)?;
    let scenario = Scenario::resolve(
        &network,
        &units.ambulances,
        &units.hospitals,
        &units.incidents,
    )?;
    scenario.attach_to(&mut network);
    Ok((network, scenario))
}
