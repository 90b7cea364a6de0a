use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Runs one independent computation per source on the rayon thread pool.
///
/// Each computation owns its queue and maps; only the graph is shared, and it
/// is borrowed immutably for the whole batch. Results are in `sources` order.
pub fn run_from_sources<A, W, G>(
    algorithm: &A,
    graph: &G,
    sources: &[G::Vertex],
) -> Vec<Result<ShortestPathResult<G::Vertex, W>>>
where
    A: ShortestPathAlgorithm<W, G> + Sync,
    W: Weight + Send,
    G: Graph<W> + Sync,
    G::Vertex: Send + Sync,
{
    log::debug!(
        "{}: {} sources over {} vertices",
        algorithm.name(),
        sources.len(),
        graph.vertex_count()
    );
    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}

/// [`run_from_sources`] with a default [`Dijkstra`]
pub fn shortest_paths_from_sources<W, G>(
    graph: &G,
    sources: &[G::Vertex],
) -> Vec<Result<ShortestPathResult<G::Vertex, W>>>
where
    W: Weight + Send,
    G: Graph<W> + Sync,
    G::Vertex: Send + Sync,
{
    run_from_sources(&Dijkstra::new(), graph, sources)
}
