//! Fleet unit records: ambulances, hospitals, incidents.
//!
//! These are immutable value records created once from input data at the
//! start of a run.  They carry vertex *names*; resolution to `VertexId`s
//! happens when a scenario is bound to a concrete road network.

use std::fmt;

// ── AmbulanceStatus ───────────────────────────────────────────────────────────

/// Availability state of an ambulance at snapshot time.
///
/// The set is closed — the one decision point in the assignment engine
/// matches on it exhaustively.  Unknown input status codes map to
/// [`NotAvailable`](AmbulanceStatus::NotAvailable) explicitly rather than
/// failing, mirroring the upstream wire contract (`0=FREE, 1=BREAK,
/// 2=OCCUPIED`, anything else = not available).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmbulanceStatus {
    /// Idle at its vertex, ready to depart immediately.
    #[default]
    Free,
    /// On a mandated rest break; departs after a fixed delay.
    Break,
    /// Transporting a patient; must drop off at a hospital first.
    Occupied,
    /// Out of service — excluded from assignment entirely.
    NotAvailable,
}

impl AmbulanceStatus {
    /// Decode the upstream numeric status code.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => AmbulanceStatus::Free,
            1 => AmbulanceStatus::Break,
            2 => AmbulanceStatus::Occupied,
            _ => AmbulanceStatus::NotAvailable,
        }
    }

    /// `true` for any status that may be assigned to an incident.
    #[inline]
    pub fn is_dispatchable(self) -> bool {
        !matches!(self, AmbulanceStatus::NotAvailable)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            AmbulanceStatus::Free         => "free",
            AmbulanceStatus::Break        => "break",
            AmbulanceStatus::Occupied     => "occupied",
            AmbulanceStatus::NotAvailable => "not_available",
        }
    }
}

impl fmt::Display for AmbulanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Unit records ──────────────────────────────────────────────────────────────

/// An emergency vehicle stationed at the vertex of the same name.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ambulance {
    pub name:   String,
    pub status: AmbulanceStatus,
}

impl Ambulance {
    pub fn new(name: impl Into<String>, status: AmbulanceStatus) -> Self {
        Self { name: name.into(), status }
    }
}

/// A hospital at the vertex of the same name.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hospital {
    pub name: String,
}

impl Hospital {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An incident location needing a vehicle.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Incident {
    pub name: String,
}

impl Incident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
