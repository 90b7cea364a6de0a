pub mod traits;
pub mod directed;
pub mod generators;
pub mod named;

pub use traits::{Graph, MutableGraph, Weight};
pub use directed::DirectedGraph;
pub use named::{NamedGraph, VertexId};
