//! Relax SSSP - visitor-driven single-source shortest paths
//!
//! This library implements Dijkstra's algorithm over any graph that can enumerate
//! the neighbors of a vertex, with edge weights resolved through a separate provider.
//! Every step of a run (vertex examination, edge relaxation, finalization) is reported
//! to a [`Visitor`], so callers can trace or extend the search without touching it.
//!
//! Edge weights must be non-negative. The frontier is kept in an [`IndexedHeap`], a
//! binary heap with a vertex-to-position index that supports logarithmic decrease-key.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{shortest_path, shortest_paths, Dijkstra},
    path::{build_all_paths, build_path, path_cost},
    visitor::{Color, NullVisitor, RecordingVisitor, SearchState, TraceVisitor, VisitEvent, Visitor},
    Path, Weight,
};
pub use data_structures::{IndexedHeap, QueueError};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, EdgeWeights, Graph, UnitWeights, Vertex, WeightError, WeightFn, WeightMap};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(#[from] WeightError),

    #[error("Priority queue misuse: {0}")]
    QueueMisuse(#[from] QueueError),

    #[error("Source vertex not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
