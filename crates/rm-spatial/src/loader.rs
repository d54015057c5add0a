//! CSV road-network loader.
//!
//! # CSV format
//!
//! Two files.  Vertices first, one location per row:
//!
//! ```csv
//! location
//! Fort
//! Pettah
//! Kollupitiya
//! ```
//!
//! Then undirected segments, distance in kilometres:
//!
//! ```csv
//! from,to,distance
//! Fort,Pettah,2
//! Fort,Kollupitiya,3
//! ```
//!
//! Fields are whitespace-trimmed.  A segment naming a location missing from
//! the vertex file fails the whole load with [`SpatialError::UnknownVertex`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::graph::RoadGraph;
use crate::{SpatialError, SpatialResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VertexRecord {
    location: String,
}

#[derive(Deserialize)]
struct EdgeRecord {
    from:     String,
    to:       String,
    distance: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RoadGraph`] from a vertex CSV and a segment CSV on disk.
pub fn load_graph_csv(vertices: &Path, edges: &Path) -> SpatialResult<RoadGraph> {
    let v = std::fs::File::open(vertices)?;
    let e = std::fs::File::open(edges)?;
    load_graph_reader(v, e)
}

/// Like [`load_graph_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded data sets.
pub fn load_graph_reader<V: Read, E: Read>(vertices: V, edges: E) -> SpatialResult<RoadGraph> {
    let mut graph = RoadGraph::new();

    for row in reader(vertices).deserialize::<VertexRecord>() {
        let row = row.map_err(|e| SpatialError::Parse(e.to_string()))?;
        if row.location.is_empty() {
            return Err(SpatialError::Parse("empty location name in vertex file".to_owned()));
        }
        graph.add_vertex(row.location);
    }

    for row in reader(edges).deserialize::<EdgeRecord>() {
        let row = row.map_err(|e| SpatialError::Parse(e.to_string()))?;
        graph.add_edge(&row.from, &row.to, row.distance)?;
    }

    log::debug!(
        "loaded road graph: {} vertices, {} segments",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source)
}
