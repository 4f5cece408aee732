//! ems-cli — route planning for ambulances.
//!
//! Two input modes:
//!
//! ```text
//! ems-cli [edges] [weights] [ambulances] [statuses] [hospitals] [incidents]
//! ems-cli --csv <edges.csv> <units.csv>
//! ```
//!
//! The first takes the classic brace-set arguments, e.g.
//!
//! ```text
//! ems-cli "{ {a,b}, {a,j}, {b,c} }" "{2, 2, 1}" "{b}" "{2}" "{d}" "{c}"
//! ```
//!
//! Append `--report <file>` in either mode to also export the plan as CSV.

mod input;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use ems_core::DispatchConfig;
use ems_dispatch::{load_scenario, Dispatcher, Scenario};
use ems_graph::{AStarRouter, RoadNetwork, RoadNetworkBuilder};

use input::{parse_ambulances, parse_edges, parse_hospitals, parse_incidents};
use report::{print_plan, write_plan_csv};

const USAGE: &str = "\
usage: ems-cli [edges] [weights] [ambulances] [statuses] [hospitals] [incidents]
       ems-cli --csv <edges.csv> <units.csv>

options:
       --report <file>   also write the plan to <file> as CSV";

fn main() -> Result<()> {
    println!("======= Route planning for ambulances =======");

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let report_path = take_report_flag(&mut args)?;
    let csv_mode = match args.first().map(String::as_str) {
        Some("--csv") => {
            args.remove(0);
            true
        }
        _ => false,
    };

    let (network, scenario) = if csv_mode {
        let [edges, units] = &args[..] else {
            bail!("--csv takes exactly two file arguments\n\n{USAGE}");
        };
        load_scenario(Path::new(edges), Path::new(units))
            .context("failed to load CSV scenario")?
    } else {
        let [edges, weights, ambulances, statuses, hospitals, incidents] = &args[..] else {
            bail!("expected six positional arguments\n\n{USAGE}");
        };
        build_from_args(edges, weights, ambulances, statuses, hospitals, incidents)?
    };

    let router = AStarRouter::for_network(&network);
    let plan = Dispatcher::new(&network, &router, DispatchConfig::default())
        .plan(&scenario)
        .context("planning failed")?;

    print_plan(&network, &plan);
    if plan.is_empty() {
        println!("(no incident could be served)");
    }

    if let Some(path) = report_path {
        write_plan_csv(&path, &network, &plan)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

/// Pull `--report <file>` out of the argument list, if present.
fn take_report_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    let Some(pos) = args.iter().position(|a| a == "--report") else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        bail!("--report requires a file argument\n\n{USAGE}");
    }
    let path = PathBuf::from(args.remove(pos + 1));
    args.remove(pos);
    Ok(Some(path))
}

/// Build the network and resolve the scenario from the six brace-set
/// arguments.
fn build_from_args(
    edges:      &str,
    weights:    &str,
    ambulances: &str,
    statuses:   &str,
    hospitals:  &str,
    incidents:  &str,
) -> Result<(RoadNetwork, Scenario)> {
    let mut builder = RoadNetworkBuilder::new();
    for (from, to, weight) in parse_edges(edges, weights)? {
        let from = builder.add_vertex(&from);
        let to   = builder.add_vertex(&to);
        builder.add_edge(from, to, weight)?;
    }
    let mut network = builder.build();

    let ambulances = parse_ambulances(ambulances, statuses)?;
    let hospitals  = parse_hospitals(hospitals);
    let incidents  = parse_incidents(incidents);

    let scenario = Scenario::resolve(&network, &ambulances, &hospitals, &incidents)?;
    scenario.attach_to(&mut network);

    Ok((network, scenario))
}
