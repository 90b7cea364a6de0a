use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{IndexedMinHeap, Priority};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Tuning knobs for [`Dijkstra`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DijkstraConfig {
    /// Stop as soon as the smallest queued distance is infinite. The remaining
    /// vertices are unreachable, so the output is the same as a full run.
    pub early_exit: bool,
    /// Fail with [`Error::NegativeWeight`] when relaxing a negative edge
    /// instead of returning distances that may be wrong.
    pub reject_negative_weights: bool,
}

/// Classic Dijkstra's algorithm over an indexed decrease-key heap
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    config: DijkstraConfig,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    pub fn with_config(config: DijkstraConfig) -> Self {
        Dijkstra { config }
    }

    /// Stop once only unreachable vertices are left in the queue
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.config.early_exit = enabled;
        self
    }

    /// Reject negative edge weights at relaxation time
    pub fn with_negative_weight_check(mut self, enabled: bool) -> Self {
        self.config.reject_negative_weights = enabled;
        self
    }

    pub fn config(&self) -> &DijkstraConfig {
        &self.config
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: G::Vertex,
    ) -> Result<ShortestPathResult<G::Vertex, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }

        let n = graph.vertex_count();
        let mut distances: HashMap<G::Vertex, Option<W>> = HashMap::with_capacity(n);
        let mut predecessors: HashMap<G::Vertex, Option<G::Vertex>> = HashMap::with_capacity(n);
        let mut queue = IndexedMinHeap::with_capacity(n);

        // Every vertex starts queued; only the source has a finite key
        for v in graph.vertices() {
            let initial = (v == source).then(W::zero);
            distances.insert(v, initial);
            predecessors.insert(v, None);
            queue.insert(v, Priority::from(initial))?;
        }

        let mut settled = 0usize;
        while let Some((u, priority)) = queue.extract_min() {
            let dist_u = match priority {
                Priority::Finite(d) => d,
                // Nothing relaxes through an unreachable vertex
                Priority::Infinite if self.config.early_exit => break,
                Priority::Infinite => continue,
            };
            settled += 1;

            for v in graph.neighbors(u) {
                let weight = graph.weight(u, v).ok_or_else(|| Error::MissingEdge {
                    from: format!("{:?}", u),
                    to: format!("{:?}", v),
                })?;

                if self.config.reject_negative_weights && weight < W::zero() {
                    warn!("negative edge {:?} -> {:?} ({:?})", u, v, weight);
                    return Err(Error::NegativeWeight {
                        from: format!("{:?}", u),
                        to: format!("{:?}", v),
                        weight: format!("{:?}", weight),
                    });
                }

                let candidate = dist_u.checked_sum(weight).ok_or_else(|| {
                    warn!("distance overflow on {:?} -> {:?}", u, v);
                    Error::DistanceOverflow {
                        from: format!("{:?}", u),
                        to: format!("{:?}", v),
                    }
                })?;
                let improves = match distances.get(&v) {
                    Some(Some(current)) => candidate < *current,
                    Some(None) => true,
                    None => return Err(Error::InvalidVertex(format!("{:?}", v))),
                };

                // Settled distances are final
                if improves && queue.contains(&v) {
                    trace!("relax {:?} -> {:?}: {:?}", u, v, candidate);
                    distances.insert(v, Some(candidate));
                    predecessors.insert(v, Some(u));
                    queue
                        .decrease_priority(v, Priority::Finite(candidate))
                        .map_err(|e| Error::AlgorithmError(e.to_string()))?;
                }
            }
        }

        debug!(
            "Dijkstra from {:?}: settled {} of {} vertices",
            source, settled, n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

/// Runs [`Dijkstra`] with the default configuration.
pub fn shortest_paths<W, G>(
    graph: &G,
    source: G::Vertex,
) -> Result<ShortestPathResult<G::Vertex, W>>
where
    W: Weight,
    G: Graph<W>,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}
