//! Brace-set argument parsing.
//!
//! The planner's positional arguments use a set-literal syntax:
//!
//! ```text
//! edges      "{ {a,b}, {a,j}, {b,c} }"    vertex names, pairwise
//! weights    "{2, 2, 1}"                  one weight per edge
//! ambulances "{b, e}"                     stationing vertices
//! statuses   "{0, 2}"                     one numeric code per ambulance
//! hospitals  "{d}"
//! incidents  "{i}"
//! ```
//!
//! Braces carry no nesting meaning — they are stripped wholesale and the
//! remainder splits on commas, so `{{a,b},{c,d}}` and `{a, b, c, d}` parse
//! identically.  Whitespace around every element is ignored.

use anyhow::{bail, Context, Result};

use ems_core::{Ambulance, AmbulanceStatus, Hospital, Incident};

/// Strip every brace and split the rest on commas, trimming each element.
/// Empty elements (from stray commas or an empty set) are dropped.
pub fn split_set(input: &str) -> Vec<&str> {
    input
        .split(|c| c == '{' || c == '}' || c == ',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse the edge and weight arguments into `(from, to, weight)` triples.
///
/// Edge vertex names come pairwise from `edges`; `weights` must supply
/// exactly one value per pair.
pub fn parse_edges(edges: &str, weights: &str) -> Result<Vec<(String, String, f64)>> {
    let names = split_set(edges);
    if names.len() % 2 != 0 {
        bail!("edge list has {} vertex names — expected an even number", names.len());
    }

    let weights = split_set(weights)
        .iter()
        .map(|w| {
            w.parse::<f64>()
                .with_context(|| format!("invalid edge weight '{w}'"))
        })
        .collect::<Result<Vec<f64>>>()?;

    if weights.len() != names.len() / 2 {
        bail!(
            "{} edges but {} weights — the lists must be the same length",
            names.len() / 2,
            weights.len()
        );
    }

    Ok(names
        .chunks_exact(2)
        .zip(weights)
        .map(|(pair, w)| (pair[0].to_owned(), pair[1].to_owned(), w))
        .collect())
}

/// Parse the ambulance and status arguments into paired records.
pub fn parse_ambulances(ambulances: &str, statuses: &str) -> Result<Vec<Ambulance>> {
    let names = split_set(ambulances);
    let codes = split_set(statuses)
        .iter()
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("invalid status code '{s}'"))
        })
        .collect::<Result<Vec<i64>>>()?;

    if codes.len() != names.len() {
        bail!(
            "{} ambulances but {} status codes — the lists must be the same length",
            names.len(),
            codes.len()
        );
    }

    Ok(names
        .into_iter()
        .zip(codes)
        .map(|(name, code)| Ambulance::new(name, AmbulanceStatus::from_code(code)))
        .collect())
}

pub fn parse_hospitals(hospitals: &str) -> Vec<Hospital> {
    split_set(hospitals).into_iter().map(Hospital::new).collect()
}

pub fn parse_incidents(incidents: &str) -> Vec<Incident> {
    split_set(incidents).into_iter().map(Incident::new).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use ems_core::AmbulanceStatus;

    use super::*;

    #[test]
    fn split_strips_braces_and_whitespace() {
        assert_eq!(split_set("{ {a,b}, {a,j} }"), ["a", "b", "a", "j"]);
        assert_eq!(split_set("{2, 3 ,5}"), ["2", "3", "5"]);
        assert_eq!(split_set("{}"), [] as [&str; 0]);
    }

    #[test]
    fn edges_pair_up_with_weights() {
        let edges = parse_edges("{{A,B}, {A,C}, {B,C}}", "{2, 3, 5}").unwrap();
        assert_eq!(
            edges,
            [
                ("A".to_owned(), "B".to_owned(), 2.0),
                ("A".to_owned(), "C".to_owned(), 3.0),
                ("B".to_owned(), "C".to_owned(), 5.0),
            ]
        );
    }

    #[test]
    fn odd_vertex_count_is_rejected() {
        assert!(parse_edges("{A, B, C}", "{1}").is_err());
    }

    #[test]
    fn weight_count_mismatch_is_rejected() {
        assert!(parse_edges("{A, B}", "{1, 2}").is_err());
        assert!(parse_edges("{A, B, B, C}", "{1}").is_err());
    }

    #[test]
    fn malformed_weight_is_rejected() {
        assert!(parse_edges("{A, B}", "{fast}").is_err());
    }

    #[test]
    fn ambulances_pair_up_with_status_codes() {
        let parsed = parse_ambulances("{A, C, D , E , F}", "{0, 2, 1, 3, 0}").unwrap();
        let statuses: Vec<AmbulanceStatus> = parsed.iter().map(|a| a.status).collect();
        assert_eq!(parsed[0].name, "A");
        assert_eq!(
            statuses,
            [
                AmbulanceStatus::Free,
                AmbulanceStatus::Occupied,
                AmbulanceStatus::Break,
                AmbulanceStatus::NotAvailable,
                AmbulanceStatus::Free,
            ]
        );
    }

    #[test]
    fn status_count_mismatch_is_rejected() {
        assert!(parse_ambulances("{A, B}", "{0}").is_err());
    }

    #[test]
    fn hospitals_and_incidents_are_plain_name_sets() {
        let hospitals = parse_hospitals("{A, B, F, J}");
        assert_eq!(hospitals.len(), 4);
        assert_eq!(hospitals[3].name, "J");

        let incidents = parse_incidents("{I, K}");
        assert_eq!(incidents.len(), 2);
        assert_eq!(incidents[0].name, "I");
    }
}
