//! The two-phase assignment engine.
//!
//! # Phases
//!
//! 1. **Hospital transit planning** — every OCCUPIED ambulance commits to
//!    its cheapest reachable hospital (the "drop-off path").
//! 2. **Incident assignment** — every (ambulance, incident) pair produces a
//!    candidate path shaped by the ambulance's status; candidates compete
//!    under the admission rule below.
//!
//! Both phases make a single deterministic pass over their cross product in
//! the sorted order fixed by [`Scenario`]; there is no iteration or
//! convergence loop, and nothing is mutated after the run starts except the
//! result map.
//!
//! # Admission rule
//!
//! Keyed by incident, evaluated in processing order:
//!
//! a. no path recorded for this incident AND no recorded assignment already
//!    uses this ambulance at equal-or-lower cost → record;
//! b. a path is recorded and the candidate is strictly cheaper → replace
//!    (**without** re-checking ambulance reuse — the historical asymmetry
//!    is kept on purpose and pinned by a test; see DESIGN.md);
//! c. otherwise → discard.
//!
//! An unreachable pair (`NoRoute`) is skipped, never an error.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use ems_core::{AmbulanceStatus, DispatchConfig, VertexId};
use ems_graph::{GraphError, Path, RoadNetwork, Router};

use crate::scenario::Scenario;
use crate::DispatchResult;

// ── Plan output ───────────────────────────────────────────────────────────────

/// One accepted assignment: the serving ambulance and the full route it
/// must drive, penalties included.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    /// Vertex the serving ambulance starts from.
    pub ambulance: VertexId,
    /// Route to the incident.  For an OCCUPIED unit this runs through its
    /// drop-off hospital.
    pub path: Path,
}

/// The engine's output: at most one assignment per incident vertex.
///
/// Incidents absent from the map could not be served (no dispatchable
/// ambulance, or none reachable).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchPlan {
    assignments: BTreeMap<VertexId, Assignment>,
}

impl DispatchPlan {
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn get(&self, incident: VertexId) -> Option<&Assignment> {
        self.assignments.get(&incident)
    }

    pub fn contains(&self, incident: VertexId) -> bool {
        self.assignments.contains_key(&incident)
    }

    /// Iterate `(incident, assignment)` pairs in `VertexId` order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Assignment)> {
        self.assignments.iter().map(|(&v, a)| (v, a))
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// Runs the two-phase assignment over one network/scenario snapshot.
///
/// Holds only borrows and configuration; a run neither mutates the network
/// nor the scenario, so one `Dispatcher` can serve repeated `plan` calls
/// (each deterministic and identical for identical inputs).
pub struct Dispatcher<'a, R: Router> {
    network: &'a RoadNetwork,
    router:  &'a R,
    config:  DispatchConfig,
}

impl<'a, R: Router> Dispatcher<'a, R> {
    pub fn new(network: &'a RoadNetwork, router: &'a R, config: DispatchConfig) -> Self {
        Self { network, router, config }
    }

    /// Compute the full assignment for `scenario`.
    ///
    /// Errors only on path-composition contract violations (which would
    /// indicate a bug, not bad input); unreachable pairs are skipped.
    pub fn plan(&self, scenario: &Scenario) -> DispatchResult<DispatchPlan> {
        let dropoffs = self.plan_hospital_transits(scenario)?;
        self.plan_incident_assignments(scenario, &dropoffs)
    }

    // ── Phase 1 ───────────────────────────────────────────────────────────

    /// Commit every OCCUPIED ambulance to its cheapest reachable hospital.
    ///
    /// Ties resolve to the first hospital in sorted order.  An OCCUPIED
    /// ambulance that reaches no hospital gets no entry and is skipped
    /// entirely in Phase 2.
    fn plan_hospital_transits(
        &self,
        scenario: &Scenario,
    ) -> DispatchResult<FxHashMap<VertexId, Path>> {
        let mut dropoffs: FxHashMap<VertexId, Path> = FxHashMap::default();

        for &(ambulance, status) in &scenario.ambulances {
            if status != AmbulanceStatus::Occupied {
                continue;
            }
            for &hospital in &scenario.hospitals {
                let path = match self.router.route(self.network, ambulance, hospital) {
                    Ok(path) => path,
                    Err(GraphError::NoRoute { .. }) => continue, // unreachable: not a fault
                    Err(e) => return Err(e.into()),
                };
                match dropoffs.get(&ambulance) {
                    Some(best) if best.weight <= path.weight => {}
                    _ => {
                        dropoffs.insert(ambulance, path);
                    }
                }
            }
        }

        Ok(dropoffs)
    }

    // ── Phase 2 ───────────────────────────────────────────────────────────

    fn plan_incident_assignments(
        &self,
        scenario: &Scenario,
        dropoffs: &FxHashMap<VertexId, Path>,
    ) -> DispatchResult<DispatchPlan> {
        let mut plan = DispatchPlan::default();

        for &(ambulance, status) in &scenario.ambulances {
            if !status.is_dispatchable() {
                continue;
            }
            for &incident in &scenario.incidents {
                let Some(candidate) =
                    self.candidate_path(ambulance, status, incident, dropoffs)?
                else {
                    continue;
                };
                admit(&mut plan.assignments, incident, Assignment { ambulance, path: candidate });
            }
        }

        Ok(plan)
    }

    /// Build the status-shaped candidate route for one pair, or `None` when
    /// some leg is unreachable.
    fn candidate_path(
        &self,
        ambulance: VertexId,
        status:    AmbulanceStatus,
        incident:  VertexId,
        dropoffs:  &FxHashMap<VertexId, Path>,
    ) -> DispatchResult<Option<Path>> {
        match status {
            AmbulanceStatus::Occupied => {
                // Route through the committed drop-off hospital; the base
                // ambulance→incident route is irrelevant for this status.
                let Some(dropoff) = dropoffs.get(&ambulance) else {
                    return Ok(None); // no hospital reachable
                };
                let hospital = dropoff.end();
                match self.router.route(self.network, hospital, incident) {
                    Ok(leg) => {
                        let full = dropoff.join(&leg, self.config.hospital_duration)?;
                        Ok(Some(full))
                    }
                    Err(GraphError::NoRoute { .. }) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            }
            AmbulanceStatus::Break | AmbulanceStatus::Free => {
                match self.router.route(self.network, ambulance, incident) {
                    Ok(base) if status == AmbulanceStatus::Break => {
                        Ok(Some(base.with_delay(self.config.break_duration)))
                    }
                    Ok(base) => Ok(Some(base)),
                    Err(GraphError::NoRoute { .. }) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            }
            AmbulanceStatus::NotAvailable => Ok(None),
        }
    }
}

// ── Admission rule ────────────────────────────────────────────────────────────

fn admit(
    assignments: &mut BTreeMap<VertexId, Assignment>,
    incident:    VertexId,
    candidate:   Assignment,
) {
    match assignments.get(&incident) {
        None => {
            if !ambulance_already_planned(assignments, &candidate) {
                assignments.insert(incident, candidate);
            }
        }
        Some(existing) if candidate.path.weight < existing.path.weight => {
            // Replacement deliberately skips the reuse check (rule b).
            assignments.insert(incident, candidate);
        }
        Some(_) => {}
    }
}

/// Rule (a)'s reuse guard: is this ambulance already recorded somewhere at
/// equal-or-lower cost?
fn ambulance_already_planned(
    assignments: &BTreeMap<VertexId, Assignment>,
    candidate:   &Assignment,
) -> bool {
    assignments
        .values()
        .any(|a| a.ambulance == candidate.ambulance && a.path.weight <= candidate.path.weight)
}
