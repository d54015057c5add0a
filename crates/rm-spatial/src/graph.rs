//! Weighted undirected road graph.
//!
//! # Data layout
//!
//! Every [`Location`] is interned to a dense [`NodeId`] on
//! [`add_vertex`](RoadGraph::add_vertex).  Adjacency is one `Vec` per node,
//! holding `(neighbor, weight)` pairs in the order segments were added.  The
//! router walks these slices by `NodeId` and only touches names when breaking
//! distance ties and building the final stop list.
//!
//! A segment is always stored in both endpoint lists, so the graph is
//! symmetric by construction.  Both endpoints must already be vertices, so
//! every neighbor in an adjacency list is itself a registered vertex.

use std::fmt;

use rustc_hash::FxHashMap;

use rm_core::{Distance, Location};

use crate::{SpatialError, SpatialResult};

// ── NodeId ────────────────────────────────────────────────────────────────────

/// Dense index of a vertex in a [`RoadGraph`].  Only meaningful for the graph
/// that issued it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel meaning "no node", used for unset predecessors.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    /// Vertex name, indexed by `NodeId`.
    names: Vec<Location>,
    index: FxHashMap<Location, NodeId>,
    /// Outgoing `(neighbor, weight)` pairs, indexed by `NodeId`.
    adjacency: Vec<Vec<(NodeId, Distance)>>,
    /// Number of undirected segments (each stored twice in `adjacency`).
    segments: usize,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Register `location` as a vertex and return its `NodeId`.
    ///
    /// Idempotent: adding an existing location returns the original id and
    /// leaves its adjacency untouched.
    pub fn add_vertex(&mut self, location: impl Into<Location>) -> NodeId {
        let location = location.into();
        if let Some(&id) = self.index.get(&location) {
            return id;
        }
        let id = NodeId(self.names.len() as u32);
        self.names.push(location.clone());
        self.index.insert(location, id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add an undirected road segment of length `weight` between `a` and `b`.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::UnknownVertex`] if either endpoint was never added.
    /// - [`SpatialError::InvalidWeight`] if `weight` is negative, NaN, or
    ///   above [`Distance::MAX_KM`].
    ///
    /// On error the graph is unchanged.
    pub fn add_edge(
        &mut self,
        a: impl AsRef<str>,
        b: impl AsRef<str>,
        weight: f64,
    ) -> SpatialResult<()> {
        let (a, b) = (a.as_ref(), b.as_ref());
        let na = self.node_id(a).ok_or_else(|| SpatialError::UnknownVertex(a.into()))?;
        let nb = self.node_id(b).ok_or_else(|| SpatialError::UnknownVertex(b.into()))?;
        let w = Distance::new(weight).map_err(|_| SpatialError::InvalidWeight {
            from: a.into(),
            to: b.into(),
            weight,
        })?;

        self.adjacency[na.index()].push((nb, w));
        self.adjacency[nb.index()].push((na, w));
        self.segments += 1;
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// `(neighbor, weight)` pairs of `location` in insertion order.
    ///
    /// Unknown locations yield an empty iterator rather than an error.
    pub fn neighbors(&self, location: &str) -> impl Iterator<Item = (&Location, Distance)> + '_ {
        let edges: &[(NodeId, Distance)] = match self.node_id(location) {
            Some(id) => self.neighbor_ids(id),
            None => &[],
        };
        edges.iter().map(move |&(n, w)| (&self.names[n.index()], w))
    }

    /// Adjacency slice for `node`; the router's inner loop.
    ///
    /// # Panics
    /// Panics if `node` was not issued by this graph.
    #[inline]
    pub fn neighbor_ids(&self, node: NodeId) -> &[(NodeId, Distance)] {
        &self.adjacency[node.index()]
    }

    #[inline]
    pub fn node_id(&self, location: &str) -> Option<NodeId> {
        self.index.get(location).copied()
    }

    pub fn location(&self, node: NodeId) -> Option<&Location> {
        self.names.get(node.index())
    }

    pub fn contains(&self, location: &str) -> bool {
        self.index.contains_key(location)
    }

    /// All vertices in registration order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.names.iter()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected segments added.
    pub fn edge_count(&self) -> usize {
        self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of a node this graph issued.  Internal counterpart of
    /// [`location`](Self::location) for ids known to be valid.
    #[inline]
    pub(crate) fn name(&self, node: NodeId) -> &Location {
        &self.names[node.index()]
    }
}
