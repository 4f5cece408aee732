//! Plan reporting: console table and optional CSV export.

use std::path::Path;

use anyhow::Result;
use csv::Writer;

use ems_dispatch::DispatchPlan;
use ems_graph::RoadNetwork;

/// Render a route as `a -> b -> c`.
fn route_names(network: &RoadNetwork, assignment: &ems_dispatch::Assignment) -> String {
    assignment
        .path
        .vertices
        .iter()
        .map(|&v| network.name(v))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Print the plan in the planner's classic two-section layout: first the
/// incident→ambulance pairing, then the full routes with their lengths.
pub fn print_plan(network: &RoadNetwork, plan: &DispatchPlan) {
    println!("\n====== Incidents & Ambulances ========");
    for (incident, assignment) in plan.iter() {
        println!(
            "Incident: {}  Ambulance: {}",
            network.name(incident),
            network.name(assignment.ambulance),
        );
    }

    println!("\n============ Routes for all ambulances ===============");
    for (incident, assignment) in plan.iter() {
        println!(
            "Incident: {} - Route: [{}] - Length: {:.6}",
            network.name(incident),
            route_names(network, assignment),
            assignment.path.weight,
        );
    }
}

/// Export the plan as CSV, one row per served incident.
pub fn write_plan_csv(path: &Path, network: &RoadNetwork, plan: &DispatchPlan) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["incident", "ambulance", "route", "length"])?;
    for (incident, assignment) in plan.iter() {
        writer.write_record(&[
            network.name(incident).to_owned(),
            network.name(assignment.ambulance).to_owned(),
            route_names(network, assignment),
            format!("{:.6}", assignment.path.weight),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
