//! Routing trait and the landmark-guided A* implementation.
//!
//! # Pluggability
//!
//! The assignment engine calls routing via the [`Router`] trait, so
//! applications can swap in custom implementations (contraction
//! hierarchies, plain Dijkstra) without touching the engine.  The default
//! [`AStarRouter`] pairs best-first search with the precomputed
//! [`LandmarkTable`] lower bounds.
//!
//! # Absence, not failure
//!
//! A disconnected source/target pair is reported as
//! [`GraphError::NoRoute`] — an explicit absence result the caller must
//! handle by skipping the pair, never a crash or a degenerate zero-length
//! path.

use std::collections::BinaryHeap;

use ems_core::{EdgeId, VertexId};

use crate::landmarks::{LandmarkTable, QueueEntry};
use crate::network::RoadNetwork;
use crate::path::Path;
use crate::{GraphError, GraphResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path oracle.
///
/// Implementations must be deterministic: for a fixed network and query
/// pair, repeated calls return the same path.
pub trait Router {
    /// Compute a minimum-weight path from `from` to `to`.
    ///
    /// `from == to` yields the trivial single-vertex path of weight 0.
    /// Returns [`GraphError::NoRoute`] if no path exists.
    fn route(&self, network: &RoadNetwork, from: VertexId, to: VertexId) -> GraphResult<Path>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over the CSR road graph, guided by landmark lower bounds.
///
/// The heuristic is admissible and consistent (see [`LandmarkTable`]), so
/// the first time the target is popped its cost is optimal — identical to
/// unguided Dijkstra, just with fewer expansions.
pub struct AStarRouter {
    landmarks: LandmarkTable,
}

impl AStarRouter {
    pub fn new(landmarks: LandmarkTable) -> Self {
        Self { landmarks }
    }

    /// Convenience: build with the all-vertices landmark table.
    pub fn for_network(network: &RoadNetwork) -> Self {
        Self::new(LandmarkTable::all(network))
    }

    pub fn landmarks(&self) -> &LandmarkTable {
        &self.landmarks
    }
}

impl Router for AStarRouter {
    fn route(&self, network: &RoadNetwork, from: VertexId, to: VertexId) -> GraphResult<Path> {
        if from == to {
            return Ok(Path::trivial(from));
        }

        let n = network.vertex_count();
        // g[v] = best known cost to reach v.
        let mut g = vec![f64::INFINITY; n];
        // prev_edge[v] = half-edge that reached v; INVALID for unreached.
        let mut prev_edge = vec![EdgeId::INVALID; n];

        g[from.index()] = 0.0;

        let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();
        heap.push(QueueEntry {
            key:    self.landmarks.lower_bound(from, to),
            cost:   0.0,
            vertex: from,
        });

        while let Some(QueueEntry { cost, vertex, .. }) = heap.pop() {
            if vertex == to {
                return Ok(reconstruct(network, &prev_edge, to, cost));
            }

            // Skip stale heap entries.
            if cost > g[vertex.index()] {
                continue;
            }

            for edge in network.out_edges(vertex) {
                let neighbor = network.edge_to[edge.index()];
                let new_cost = cost + network.edge_weight[edge.index()];

                if new_cost < g[neighbor.index()] {
                    g[neighbor.index()] = new_cost;
                    prev_edge[neighbor.index()] = edge;
                    heap.push(QueueEntry {
                        key:    new_cost + self.landmarks.lower_bound(neighbor, to),
                        cost:   new_cost,
                        vertex: neighbor,
                    });
                }
            }
        }

        Err(GraphError::NoRoute { from, to })
    }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

fn reconstruct(
    network:   &RoadNetwork,
    prev_edge: &[EdgeId],
    to:        VertexId,
    total:     f64,
) -> Path {
    let mut vertices = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = network.edge_from[e.index()];
        vertices.push(cur);
    }
    vertices.reverse();
    Path { vertices, weight: total }
}
