use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
///
/// Both maps hold an entry for every vertex of the graph. `None` in
/// `distances` means unreachable; `None` in `predecessors` means no
/// predecessor was ever assigned (the source, or an unreached vertex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<V, W>
where
    V: Copy + Eq + Hash + Debug,
{
    /// Distances from source to each vertex
    pub distances: HashMap<V, Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: HashMap<V, Option<V>>,

    /// Source vertex ID
    pub source: V,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Copy + Eq + Hash + Debug,
    W: Copy,
{
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn predecessor(&self, vertex: &V) -> Option<V> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_some()).count()
    }

    /// Get the shortest path from source to target as a sequence of vertices.
    ///
    /// Returns `None` for unknown or unreachable targets, so unlike
    /// [`reconstruct`] it never hands back a degenerate path.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }
        reconstruct(&self.predecessors, *target).ok()
    }
}

/// Walks predecessor links back from `target` and returns the path in
/// source-to-target order.
///
/// The walk stops at the first vertex without a predecessor. For the source
/// that gives `[source]`; for a vertex that was never reached it gives the
/// degenerate `[target]`, so check the distance before trusting the result.
pub fn reconstruct<V>(predecessors: &HashMap<V, Option<V>>, target: V) -> Result<Vec<V>>
where
    V: Copy + Eq + Hash + Debug,
{
    let mut path = vec![target];
    let mut visited = HashSet::from([target]);
    let mut current = target;

    while let Some(pred) = predecessors.get(&current).copied().flatten() {
        if !visited.insert(pred) {
            log::warn!("cycle in predecessor chain at {:?}", pred);
            return Err(Error::PathCycle(format!("{:?}", pred)));
        }
        path.push(pred);
        current = pred;
    }

    path.reverse();
    Ok(path)
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: G::Vertex,
    ) -> Result<ShortestPathResult<G::Vertex, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> HashMap<u32, Option<u32>> {
        HashMap::from([(1, None), (2, Some(1)), (3, Some(2)), (4, None)])
    }

    #[test]
    fn test_reconstruct_walks_to_source() {
        assert_eq!(reconstruct(&chain(), 3), Ok(vec![1, 2, 3]));
        assert_eq!(reconstruct(&chain(), 1), Ok(vec![1]));
    }

    #[test]
    fn test_reconstruct_unreached_is_degenerate() {
        assert_eq!(reconstruct(&chain(), 4), Ok(vec![4]));
        assert_eq!(reconstruct(&chain(), 99), Ok(vec![99]));
    }

    #[test]
    fn test_reconstruct_detects_cycle() {
        let preds = HashMap::from([(1u32, Some(2u32)), (2, Some(1))]);
        assert_eq!(reconstruct(&preds, 1), Err(Error::PathCycle("1".into())));
    }

    #[test]
    fn test_path_to_requires_reachability() {
        let result = ShortestPathResult {
            distances: HashMap::from([(1u32, Some(0u32)), (2, Some(5)), (3, Some(6)), (4, None)]),
            predecessors: chain(),
            source: 1,
        };
        assert_eq!(result.path_to(&3), Some(vec![1, 2, 3]));
        assert_eq!(result.path_to(&4), None);
        assert_eq!(result.path_to(&99), None);
        assert_eq!(result.reachable_count(), 3);
        assert_eq!(result.predecessor(&3), Some(2));
        assert_eq!(result.predecessor(&1), None);
    }
}
