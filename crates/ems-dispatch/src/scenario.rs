//! The resolved fleet snapshot the engine runs on.
//!
//! A [`Scenario`] binds the upstream unit records (names) to a concrete
//! [`RoadNetwork`] (ids) and fixes the iteration order the two-phase engine
//! uses: every list is sorted lexicographically by vertex name, so ties and
//! replacements in the admission rule resolve identically across runs.

use ems_core::{Ambulance, AmbulanceStatus, Hospital, Incident, VertexId};
use ems_graph::RoadNetwork;

use crate::{DispatchError, DispatchResult};

/// Fleet state bound to a network: sorted, deduplicated, immutable.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Ambulance vertices with their status, sorted by vertex name.
    pub ambulances: Vec<(VertexId, AmbulanceStatus)>,
    /// Hospital vertices, sorted by vertex name.
    pub hospitals: Vec<VertexId>,
    /// Incident vertices, sorted by vertex name.
    pub incidents: Vec<VertexId>,
}

impl Scenario {
    /// Resolve unit records against `network`.
    ///
    /// Fails on the first name that is not a network vertex (malformed
    /// input is a construction-time failure; the engine itself assumes a
    /// valid scenario).  Duplicate entries collapse to one; for ambulances
    /// the **last** status listed wins, matching the upstream contract.
    pub fn resolve(
        network:    &RoadNetwork,
        ambulances: &[Ambulance],
        hospitals:  &[Hospital],
        incidents:  &[Incident],
    ) -> DispatchResult<Scenario> {
        let mut amb: Vec<(VertexId, AmbulanceStatus)> = Vec::with_capacity(ambulances.len());
        for unit in ambulances {
            let v = resolve_name(network, &unit.name)?;
            match amb.iter_mut().find(|(existing, _)| *existing == v) {
                Some((_, status)) => *status = unit.status,
                None => amb.push((v, unit.status)),
            }
        }

        let mut hosp: Vec<VertexId> = Vec::with_capacity(hospitals.len());
        for unit in hospitals {
            let v = resolve_name(network, &unit.name)?;
            if !hosp.contains(&v) {
                hosp.push(v);
            }
        }

        let mut inc: Vec<VertexId> = Vec::with_capacity(incidents.len());
        for unit in incidents {
            let v = resolve_name(network, &unit.name)?;
            if !inc.contains(&v) {
                inc.push(v);
            }
        }

        amb.sort_by(|a, b| network.name(a.0).cmp(network.name(b.0)));
        hosp.sort_by(|a, b| network.name(*a).cmp(network.name(*b)));
        inc.sort_by(|a, b| network.name(*a).cmp(network.name(*b)));

        Ok(Scenario { ambulances: amb, hospitals: hosp, incidents: inc })
    }

    /// Attach the role payloads to the network (priority: ambulance >
    /// hospital > incident).  Call once, before routing begins.
    pub fn attach_to(&self, network: &mut RoadNetwork) {
        network.attach_roles(&self.ambulances, &self.hospitals, &self.incidents);
    }

    /// Status of the ambulance stationed at `vertex`, if any.
    pub fn ambulance_status(&self, vertex: VertexId) -> Option<AmbulanceStatus> {
        self.ambulances
            .iter()
            .find(|(v, _)| *v == vertex)
            .map(|(_, s)| *s)
    }
}

fn resolve_name(network: &RoadNetwork, name: &str) -> DispatchResult<VertexId> {
    network
        .vertex(name)
        .ok_or_else(|| DispatchError::UnknownVertex(name.to_owned()))
}
