//! `rm-spatial`: road network, min-heap, and shortest-path routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`graph`]  | `RoadGraph` (interned locations + adjacency lists), `NodeId` |
//! | [`heap`]   | `MinHeap` keyed by `(Distance, T)`                           |
//! | [`router`] | `Router` trait, `PathResult`, `DijkstraRouter`               |
//! | [`loader`] | `load_graph_csv`, `load_graph_reader`                        |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on `PathResult` and rm-core types.       |

pub mod error;
pub mod graph;
pub mod heap;
pub mod loader;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use graph::{NodeId, RoadGraph};
pub use heap::MinHeap;
pub use loader::{load_graph_csv, load_graph_reader};
pub use router::{distance_or_infinity, DijkstraRouter, PathResult, Router};
