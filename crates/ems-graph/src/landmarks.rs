//! Landmark distance table — the admissible A* heuristic.
//!
//! # How it works
//!
//! Pick a set of landmark vertices and precompute, for each landmark `l`,
//! the shortest distance `d(l, v)` to every vertex `v` (one single-source
//! Dijkstra per landmark; the graph is undirected so one direction
//! suffices).  For any query pair, the triangle inequality gives the lower
//! bound
//!
//! ```text
//! h(s, t) = max over l of |d(l, t) − d(l, s)| ≤ dist(s, t)
//! ```
//!
//! which never overestimates the true remaining cost and is consistent, so
//! guided search stays optimal while expanding fewer vertices.
//!
//! Landmarks reachability: if either distance to a landmark is infinite
//! (disconnected component), that landmark contributes no information and
//! is skipped for the pair.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use ems_core::VertexId;

use crate::network::RoadNetwork;

// ── Priority-queue entry ──────────────────────────────────────────────────────

/// Min-heap entry shared by Dijkstra and A*.
///
/// `key` is the ordering key (`cost` for Dijkstra, `cost + h` for A*);
/// ordering is reversed so `BinaryHeap` (a max-heap) pops the smallest key.
/// Secondary key `vertex` ensures deterministic tie-breaking.
#[derive(Copy, Clone, Debug)]
pub(crate) struct QueueEntry {
    pub key:    f64,
    pub cost:   f64,
    pub vertex: VertexId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

// ── Single-source Dijkstra ────────────────────────────────────────────────────

/// Shortest distance from `source` to every vertex.
///
/// Unreached vertices hold `f64::INFINITY`.
pub(crate) fn single_source(network: &RoadNetwork, source: VertexId) -> Vec<f64> {
    let n = network.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    dist[source.index()] = 0.0;

    let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();
    heap.push(QueueEntry { key: 0.0, cost: 0.0, vertex: source });

    while let Some(QueueEntry { cost, vertex, .. }) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[vertex.index()] {
            continue;
        }
        for edge in network.out_edges(vertex) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost + network.edge_weight[edge.index()];
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                heap.push(QueueEntry { key: new_cost, cost: new_cost, vertex: neighbor });
            }
        }
    }

    dist
}

// ── LandmarkTable ─────────────────────────────────────────────────────────────

/// Precomputed landmark distances, built once per graph.
///
/// Construction cost is one Dijkstra per landmark; queries are O(landmarks).
pub struct LandmarkTable {
    landmarks: Vec<VertexId>,
    /// `dist[i][v]` = shortest distance from `landmarks[i]` to vertex `v`.
    dist: Vec<Vec<f64>>,
}

impl LandmarkTable {
    /// Use **every** vertex as a landmark.
    ///
    /// Exact lower bounds (the heuristic equals the true distance), at the
    /// price of an all-pairs precompute.  The right choice for the small
    /// networks this planner typically runs on.
    pub fn all(network: &RoadNetwork) -> Self {
        let landmarks: Vec<VertexId> =
            (0..network.vertex_count() as u32).map(VertexId).collect();
        Self::from_landmarks(network, landmarks)
    }

    /// Sample `k` landmarks with a seeded RNG.
    ///
    /// Deterministic for a fixed seed.  `k` is clamped to the vertex count.
    /// The classic ALT trade-off: fewer landmarks, cheaper precompute,
    /// looser (still admissible) bounds.
    pub fn sample(network: &RoadNetwork, k: usize, seed: u64) -> Self {
        let n = network.vertex_count();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut picked: Vec<VertexId> = rand::seq::index::sample(&mut rng, n, k.min(n))
            .into_iter()
            .map(|i| VertexId(i as u32))
            .collect();
        picked.sort_unstable();
        Self::from_landmarks(network, picked)
    }

    /// Build the table for an explicit landmark set.
    pub fn from_landmarks(network: &RoadNetwork, landmarks: Vec<VertexId>) -> Self {
        let dist = landmarks
            .iter()
            .map(|&l| single_source(network, l))
            .collect();
        Self { landmarks, dist }
    }

    /// Number of landmarks in the table.
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Admissible lower bound on the distance from `source` to `target`.
    ///
    /// Returns 0.0 when no landmark reaches both endpoints — a valid (if
    /// uninformative) bound, degrading A* to plain Dijkstra for that pair.
    pub fn lower_bound(&self, source: VertexId, target: VertexId) -> f64 {
        let mut best = 0.0f64;
        for row in &self.dist {
            let ds = row[source.index()];
            let dt = row[target.index()];
            if ds.is_finite() && dt.is_finite() {
                best = best.max((dt - ds).abs());
            }
        }
        best
    }
}
