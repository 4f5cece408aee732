//! Routed paths and pure composition operations.
//!
//! A [`Path`] carries both its ordered vertex sequence and its total weight;
//! the weight is the authoritative cost of the sequence (edge weights plus
//! any applied penalties).  Composition therefore always recomputes the
//! weight explicitly — it is never re-derived from the vertex list.

use ems_core::VertexId;

use crate::{GraphError, GraphResult};

/// The result of a routing query: an ordered vertex sequence from start to
/// end, plus the total travel cost.
///
/// All composition operations return freshly constructed paths; inputs are
/// never edited in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Vertices to visit in order, start first.  Never empty.
    pub vertices: Vec<VertexId>,
    /// Total cost: traversed edge weights plus applied penalties.
    pub weight: f64,
}

impl Path {
    /// A path that stays at `vertex` with zero cost.
    pub fn trivial(vertex: VertexId) -> Self {
        Self { vertices: vec![vertex], weight: 0.0 }
    }

    /// First vertex of the sequence.
    #[inline]
    pub fn start(&self) -> VertexId {
        self.vertices[0]
    }

    /// Last vertex of the sequence.
    #[inline]
    pub fn end(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges traversed.
    #[inline]
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }

    /// `true` if the path starts and ends at the same single vertex.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() == 1
    }

    /// Same route, weight increased by `amount` — models a fixed delay
    /// before departure, not a detour.
    #[must_use]
    pub fn with_delay(&self, amount: f64) -> Path {
        Path {
            vertices: self.vertices.clone(),
            weight:   self.weight + amount,
        }
    }

    /// Concatenate `second` after `self` into one continuous route.
    ///
    /// Requires `self.end() == second.start()`; the shared joint vertex
    /// appears once.  Weight = `self.weight + second.weight + extra_penalty`.
    pub fn join(&self, second: &Path, extra_penalty: f64) -> GraphResult<Path> {
        if self.end() != second.start() {
            return Err(GraphError::JoinMismatch {
                end:   self.end(),
                start: second.start(),
            });
        }
        let mut vertices = Vec::with_capacity(self.vertices.len() + second.vertices.len() - 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.extend_from_slice(&second.vertices[1..]);
        Ok(Path {
            vertices,
            weight: self.weight + second.weight + extra_penalty,
        })
    }
}
