pub mod traits;
pub mod dijkstra;
pub mod batch;

pub use traits::{reconstruct, ShortestPathAlgorithm, ShortestPathResult};
