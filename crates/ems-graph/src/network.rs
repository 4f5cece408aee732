//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing
//! half-edges.  Given a `VertexId v`, its outgoing half-edges occupy the
//! slice:
//!
//! ```text
//! edge_from[ vertex_out_start[v] .. vertex_out_start[v+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_weight`) are sorted by
//! source vertex and indexed by `EdgeId`.  Iteration over a vertex's
//! outgoing half-edges is therefore a contiguous memory scan — ideal for
//! the search inner loop.
//!
//! The graph is **undirected and simple**: every road segment is stored as
//! two directed half-edges, and the builder rejects self-loops and parallel
//! segments in either orientation.
//!
//! # Vertex identity
//!
//! Vertices are identified by name.  The builder interns names, so adding
//! the same name twice returns the same `VertexId` — two vertices with the
//! same name are the same node regardless of which call produced them.

use rustc_hash::{FxHashMap, FxHashSet};

use ems_core::{AmbulanceStatus, EdgeId, VertexId};

use crate::{GraphError, GraphResult};

// ── VertexRole ────────────────────────────────────────────────────────────────

/// Optional role payload attached to a vertex at setup time.
///
/// At most one role per vertex.  When a vertex is named in more than one
/// role set, attachment follows the fixed priority
/// **ambulance > hospital > incident** and the rest are silently dropped.
/// The role payload is a display/query convenience; the assignment engine
/// iterates the supplied unit lists, not the attachments.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexRole {
    Ambulance(AmbulanceStatus),
    Hospital,
    Incident,
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Undirected simple weighted road graph in CSR format.
///
/// CSR fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`].  Built once per run and
/// only read afterwards (role attachment happens before the engine starts).
pub struct RoadNetwork {
    /// Vertex name, indexed by `VertexId`.
    names: Vec<String>,

    /// Name → `VertexId` interning table.
    index: FxHashMap<String, VertexId>,

    /// Role payload per vertex, attached via [`attach_roles`](Self::attach_roles).
    roles: Vec<Option<VertexRole>>,

    /// CSR row pointer.  Outgoing half-edges of vertex `v` are at EdgeIds
    /// `vertex_out_start[v] .. vertex_out_start[v+1]`.
    /// Length = `vertex_count + 1`.
    pub vertex_out_start: Vec<u32>,

    /// Source vertex of each half-edge.  Redundant with CSR but required
    /// for efficient route reconstruction (trace `prev_edge` back to source).
    pub edge_from: Vec<VertexId>,

    /// Destination vertex of each half-edge.
    pub edge_to: Vec<VertexId>,

    /// Travel cost of each half-edge.  Non-negative and finite.
    pub edge_weight: Vec<f64>,
}

impl RoadNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed half-edges (twice the number of road segments).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ── Vertex lookup ─────────────────────────────────────────────────────

    /// Resolve a vertex name, or `None` if no such vertex exists.
    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Like [`vertex`](Self::vertex) but surfaces the miss as an error,
    /// for input-validation call sites.
    pub fn require_vertex(&self, name: &str) -> GraphResult<VertexId> {
        self.vertex(name)
            .ok_or_else(|| GraphError::UnknownVertex(name.to_owned()))
    }

    /// Name of a vertex.
    pub fn name(&self, v: VertexId) -> &str {
        &self.names[v.index()]
    }

    /// Role payload attached to a vertex, if any.
    pub fn role(&self, v: VertexId) -> Option<VertexRole> {
        self.roles[v.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing half-edges from `vertex`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.vertex_out_start[vertex.index()] as usize;
        let end   = self.vertex_out_start[vertex.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Degree of `vertex` (number of incident road segments).
    #[inline]
    pub fn degree(&self, vertex: VertexId) -> usize {
        let start = self.vertex_out_start[vertex.index()] as usize;
        let end   = self.vertex_out_start[vertex.index() + 1] as usize;
        end - start
    }

    /// Weight of the segment between `a` and `b`, or `None` if they are not
    /// adjacent.
    pub fn weight_between(&self, a: VertexId, b: VertexId) -> Option<f64> {
        self.out_edges(a)
            .find(|e| self.edge_to[e.index()] == b)
            .map(|e| self.edge_weight[e.index()])
    }

    // ── Role attachment ───────────────────────────────────────────────────

    /// Attach role payloads, applying the fixed priority
    /// ambulance > hospital > incident.  A vertex keeps the first role it
    /// receives; lower-priority roles for the same vertex are dropped.
    ///
    /// Called once, before any routing or assignment; the network is
    /// read-only from then on.
    pub fn attach_roles(
        &mut self,
        ambulances: &[(VertexId, AmbulanceStatus)],
        hospitals:  &[VertexId],
        incidents:  &[VertexId],
    ) {
        for &(v, status) in ambulances {
            self.roles[v.index()].get_or_insert(VertexRole::Ambulance(status));
        }
        for &v in hospitals {
            self.roles[v.index()].get_or_insert(VertexRole::Hospital);
        }
        for &v in incidents {
            self.roles[v.index()].get_or_insert(VertexRole::Incident);
        }
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts vertices and road segments in any order.  `build()`
/// sorts half-edges by source vertex and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use ems_graph::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_vertex("a");
/// let c = b.add_vertex("c");
/// b.add_edge(a, c, 2.0).unwrap();
/// let net = b.build();
/// assert_eq!(net.vertex_count(), 2);
/// assert_eq!(net.edge_count(), 2); // two half-edges per segment
/// ```
pub struct RoadNetworkBuilder {
    names:     Vec<String>,
    index:     FxHashMap<String, VertexId>,
    raw_edges: Vec<RawEdge>,
    seen:      FxHashSet<(VertexId, VertexId)>,
}

struct RawEdge {
    from:   VertexId,
    to:     VertexId,
    weight: f64,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self {
            names:     Vec::new(),
            index:     FxHashMap::default(),
            raw_edges: Vec::new(),
            seen:      FxHashSet::default(),
        }
    }

    /// Pre-allocate for the expected number of vertices and segments to
    /// reduce reallocations when bulk-loading from CSV.
    pub fn with_capacity(vertices: usize, segments: usize) -> Self {
        Self {
            names:     Vec::with_capacity(vertices),
            index:     FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
            raw_edges: Vec::with_capacity(segments * 2),
            seen:      FxHashSet::default(),
        }
    }

    /// Intern a vertex name and return its `VertexId`.
    ///
    /// Adding an already-known name returns the existing id — name is
    /// identity.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = VertexId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        id
    }

    /// Add an undirected road segment between `a` and `b`.
    ///
    /// Rejects self-loops, parallel segments (in either orientation), and
    /// weights that are negative or not finite — the road graph is simple
    /// and weighted with travel costs.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: f64) -> GraphResult<()> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(GraphError::BadWeight(weight));
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if !self.seen.insert(key) {
            return Err(GraphError::DuplicateEdge { a, b });
        }
        self.raw_edges.push(RawEdge { from: a, to: b, weight });
        self.raw_edges.push(RawEdge { from: b, to: a, weight });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Number of road segments added so far.
    pub fn segment_count(&self) -> usize {
        self.raw_edges.len() / 2
    }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(E log E) for the half-edge sort, E = half-edges.
    pub fn build(self) -> RoadNetwork {
        let vertex_count = self.names.len();
        let edge_count   = self.raw_edges.len();

        // Sort half-edges by source vertex for CSR construction; secondary
        // key keeps the layout reproducible across runs.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| (e.from.0, e.to.0));

        let edge_from:   Vec<VertexId> = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<VertexId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64>      = raw.iter().map(|e| e.weight).collect();

        // Build CSR row pointer (vertex_out_start).
        let mut vertex_out_start = vec![0u32; vertex_count + 1];
        for e in &raw {
            vertex_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            vertex_out_start[i] += vertex_out_start[i - 1];
        }
        debug_assert_eq!(vertex_out_start[vertex_count] as usize, edge_count);

        RoadNetwork {
            roles: vec![None; vertex_count],
            names: self.names,
            index: self.index,
            vertex_out_start,
            edge_from,
            edge_to,
            edge_weight,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
