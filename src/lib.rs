//! Indexed SSSP - Dijkstra's algorithm over an indexed decrease-key heap
//!
//! This library computes single-source shortest paths on directed graphs with
//! non-negative edge weights. The priority queue keeps a position index for
//! every queued vertex, so lowering a tentative distance costs O(log n) instead
//! of a linear search or a duplicate heap entry.
//!
//! ```
//! use indexed_sssp::graph::{DirectedGraph, MutableGraph};
//! use indexed_sssp::shortest_paths;
//!
//! let mut graph: DirectedGraph<u32> = DirectedGraph::with_capacity(3);
//! graph.add_edge(0, 1, 4);
//! graph.add_edge(1, 2, 1);
//! graph.add_edge(0, 2, 7);
//!
//! let result = shortest_paths(&graph, 0).unwrap();
//! assert_eq!(result.distance(&2), Some(5));
//! assert_eq!(result.path_to(&2), Some(vec![0, 1, 2]));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    batch::shortest_paths_from_sources,
    dijkstra::{shortest_paths, Dijkstra, DijkstraConfig},
    reconstruct, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Graph, NamedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    InvalidVertex(String),

    #[error("Vertex already queued: {0}")]
    DuplicateVertex(String),

    #[error("Source vertex not found in graph: {0}")]
    SourceNotFound(String),

    #[error("Neighbor without edge weight: from {from} to {to}")]
    MissingEdge { from: String, to: String },

    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Distance overflows the weight type on edge from {from} to {to}")]
    DistanceOverflow { from: String, to: String },

    #[error("Predecessor chain revisits vertex {0}")]
    PathCycle(String),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
