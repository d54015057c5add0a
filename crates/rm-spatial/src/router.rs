//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The dispatcher calls routing through the [`Router`] trait, so callers can
//! swap in A*, a precomputed distance table, or an instrumented wrapper in
//! tests without touching the dispatcher.
//!
//! # Determinism
//!
//! For a fixed graph the returned path is reproducible:
//!
//! - heap entries compare by `(distance, location name)`, so among frontier
//!   nodes at equal distance the lexicographically smallest settles first;
//! - relaxation uses strict `<`, so when two predecessors offer the same
//!   distance the one relaxed first keeps the slot.

use log::debug;

use rm_core::{Distance, Location};

use crate::graph::{NodeId, RoadGraph};
use crate::heap::MinHeap;
use crate::{SpatialError, SpatialResult};

// ── PathResult ────────────────────────────────────────────────────────────────

/// The result of a routing query: the ordered stops from source to
/// destination (both inclusive) and the total road distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathResult {
    pub stops: Vec<Location>,
    pub distance: Distance,
}

impl PathResult {
    /// `true` if the source and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.stops.len() <= 1
    }

    /// Number of road segments traversed.
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&Location> {
        self.stops.first()
    }

    pub fn destination(&self) -> Option<&Location> {
        self.stops.last()
    }
}

/// Distance of a routing result, with "no route" mapped to `f64::INFINITY`.
pub fn distance_or_infinity(result: &SpatialResult<PathResult>) -> f64 {
    match result {
        Ok(path) => path.distance.km(),
        Err(_) => f64::INFINITY,
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations borrow the graph immutably and return an owned
/// [`PathResult`] that keeps no reference into it.
pub trait Router: Send + Sync {
    /// Compute the shortest route from `from` to `to`.
    ///
    /// `from == to` yields a one-stop route of distance zero.  Returns
    /// [`SpatialError::NoRoute`] when the destination is unreachable or
    /// either endpoint is not a vertex.
    fn route(&self, graph: &RoadGraph, from: &Location, to: &Location) -> SpatialResult<PathResult>;
}

impl<R: Router + ?Sized> Router for &R {
    fn route(&self, graph: &RoadGraph, from: &Location, to: &Location) -> SpatialResult<PathResult> {
        (**self).route(graph, from, to)
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Lazy-deletion Dijkstra over non-negative segment weights.
///
/// O((V + E) log V): each relaxation may push a heap entry, and superseded
/// entries are dropped when popped ("pop, then check visited").  Because
/// weights are non-negative, a node's distance is final the first time it is
/// popped, which is what makes both the stale-entry skip and the early exit
/// at the destination correct.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &RoadGraph, from: &Location, to: &Location) -> SpatialResult<PathResult> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(graph: &RoadGraph, from: &Location, to: &Location) -> SpatialResult<PathResult> {
    let no_route = || SpatialError::NoRoute { from: from.clone(), to: to.clone() };

    let (Some(start), Some(goal)) = (graph.node_id(from.as_str()), graph.node_id(to.as_str())) else {
        return Err(no_route());
    };

    if start == goal {
        return Ok(PathResult { stops: vec![from.clone()], distance: Distance::ZERO });
    }

    let n = graph.vertex_count();
    // dist[v] = best known distance to v; None plays the role of +infinity.
    let mut dist: Vec<Option<Distance>> = vec![None; n];
    // prev[v] = node that reached v; NodeId::INVALID for unreached nodes.
    let mut prev = vec![NodeId::INVALID; n];
    let mut visited = vec![false; n];

    dist[start.index()] = Some(Distance::ZERO);

    let mut heap: MinHeap<(&Location, NodeId)> = MinHeap::with_capacity(n);
    heap.push(Distance::ZERO, (graph.name(start), start));

    let mut settled = 0usize;
    while let Some((d, (_, node))) = heap.pop() {
        // Stale entry for an already-finalised node.
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        settled += 1;

        if node == goal {
            debug!("dijkstra {from} -> {to}: {d} after settling {settled}/{n} nodes");
            return Ok(reconstruct(graph, &prev, start, goal, d));
        }

        for &(neighbor, weight) in graph.neighbor_ids(node) {
            let candidate = d + weight;
            let slot = &mut dist[neighbor.index()];
            if slot.is_none_or(|best| candidate < best) {
                *slot = Some(candidate);
                prev[neighbor.index()] = node;
                heap.push(candidate, (graph.name(neighbor), neighbor));
            }
        }
    }

    debug!("dijkstra {from} -> {to}: unreachable after settling {settled}/{n} nodes");
    Err(no_route())
}

fn reconstruct(
    graph: &RoadGraph,
    prev: &[NodeId],
    start: NodeId,
    goal: NodeId,
    distance: Distance,
) -> PathResult {
    let mut stops = vec![graph.name(goal).clone()];
    let mut cur = goal;
    while cur != start {
        cur = prev[cur.index()];
        stops.push(graph.name(cur).clone());
    }
    stops.reverse();
    PathResult { stops, distance }
}
