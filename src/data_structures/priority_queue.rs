use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// Queue key for a tentative distance. Every finite value orders below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority<W> {
    Finite(W),
    Infinite,
}

impl<W> Priority<W> {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Priority::Infinite)
    }

    pub fn finite(self) -> Option<W> {
        match self {
            Priority::Finite(w) => Some(w),
            Priority::Infinite => None,
        }
    }
}

impl<W> From<Option<W>> for Priority<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Priority::Infinite, Priority::Finite)
    }
}

/// Binary min-heap over vertices with a position index per vertex.
///
/// `items` is the heap array; `positions[v]` is the slot of `v` in `items` and
/// `priorities[v]` is the key it is ordered by. Both maps only hold vertices
/// that are currently queued.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<V, P>
where
    V: Copy + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    items: Vec<V>,
    positions: HashMap<V, usize>,
    priorities: HashMap<V, P>,
}

impl<V, P> Default for IndexedMinHeap<V, P>
where
    V: Copy + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> IndexedMinHeap<V, P>
where
    V: Copy + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedMinHeap {
            items: Vec::new(),
            positions: HashMap::new(),
            priorities: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            items: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            priorities: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    /// Current priority of a queued vertex
    pub fn priority(&self, vertex: &V) -> Option<&P> {
        self.priorities.get(vertex)
    }

    /// Returns the minimum element without removing it
    pub fn peek_min(&self) -> Option<(&V, &P)> {
        let vertex = self.items.first()?;
        self.priorities.get(vertex).map(|p| (vertex, p))
    }

    /// Adds a vertex that is not yet queued.
    pub fn insert(&mut self, vertex: V, priority: P) -> Result<()> {
        if self.positions.contains_key(&vertex) {
            return Err(Error::DuplicateVertex(format!("{:?}", vertex)));
        }

        let index = self.items.len();
        self.items.push(vertex);
        self.positions.insert(vertex, index);
        self.priorities.insert(vertex, priority);
        self.sift_up(index);
        Ok(())
    }

    /// Removes the vertex with the smallest priority. Ties come out in no
    /// particular order.
    pub fn extract_min(&mut self) -> Option<(V, P)> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.swap(0, last);
        let vertex = self.items.pop()?;
        self.positions.remove(&vertex);
        let priority = self.priorities.remove(&vertex)?;

        if !self.items.is_empty() {
            self.sift_down(0);
        }

        Some((vertex, priority))
    }

    /// Replaces the priority of a queued vertex and restores heap order.
    ///
    /// A value that is not lower than the current one is not an error; the
    /// vertex is simply moved to wherever the new key belongs.
    pub fn decrease_priority(&mut self, vertex: V, new_priority: P) -> Result<()> {
        let index = *self
            .positions
            .get(&vertex)
            .ok_or_else(|| Error::InvalidVertex(format!("{:?}", vertex)))?;

        self.priorities.insert(vertex, new_priority);
        let index = self.sift_up(index);
        self.sift_down(index);
        Ok(())
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.items.clear();
        self.positions.clear();
        self.priorities.clear();
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.priorities.get(&self.items[a]) < self.priorities.get(&self.items[b])
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.items.swap(a, b);
        self.positions.insert(self.items[a], a);
        self.positions.insert(self.items[b], b);
    }

    /// Returns the final slot of the moved element
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.items.len(), self.positions.len());
        assert_eq!(self.items.len(), self.priorities.len());
        for (i, v) in self.items.iter().enumerate() {
            assert_eq!(self.positions[v], i, "stale position for {:?}", v);
            if i > 0 {
                let parent = (i - 1) / 2;
                assert!(self.priorities[&self.items[parent]] <= self.priorities[v]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_empty_queue() {
        let mut heap: IndexedMinHeap<usize, u32> = IndexedMinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek_min(), None);
        assert_eq!(heap.extract_min(), None);
    }

    #[test]
    fn test_insert_and_extract_in_order() {
        let mut heap = IndexedMinHeap::new();
        heap.insert('a', 3).unwrap();
        heap.insert('b', 1).unwrap();
        heap.insert('c', 2).unwrap();
        heap.check_invariants();

        assert_eq!(heap.peek_min(), Some((&'b', &1)));
        assert_eq!(heap.extract_min(), Some(('b', 1)));
        assert_eq!(heap.extract_min(), Some(('c', 2)));
        assert_eq!(heap.extract_min(), Some(('a', 3)));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut heap = IndexedMinHeap::new();
        heap.insert(7usize, 1u32).unwrap();
        assert_eq!(heap.insert(7, 0), Err(Error::DuplicateVertex("7".into())));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.priority(&7), Some(&1));
    }

    #[test]
    fn test_extracted_vertex_is_absent() {
        let mut heap = IndexedMinHeap::new();
        heap.insert(1usize, 5u32).unwrap();
        heap.insert(2, 9).unwrap();
        assert_eq!(heap.extract_min(), Some((1, 5)));
        assert!(!heap.contains(&1));
        assert!(heap.priority(&1).is_none());
        assert!(heap.decrease_priority(1, 0).is_err());
    }

    #[test]
    fn test_decrease_priority_moves_to_front() {
        let mut heap = IndexedMinHeap::new();
        for (v, p) in [(0usize, 10u32), (1, 20), (2, 30), (3, 40), (4, 50)] {
            heap.insert(v, p).unwrap();
        }
        heap.decrease_priority(4, 5).unwrap();
        heap.check_invariants();
        assert_eq!(heap.extract_min(), Some((4, 5)));
        assert_eq!(heap.extract_min(), Some((0, 10)));
    }

    #[test]
    fn test_non_decrease_is_safe() {
        let mut heap = IndexedMinHeap::new();
        for (v, p) in [(0usize, 1u32), (1, 2), (2, 3)] {
            heap.insert(v, p).unwrap();
        }
        // same value, then a larger one
        heap.decrease_priority(0, 1).unwrap();
        heap.check_invariants();
        heap.decrease_priority(0, 100).unwrap();
        heap.check_invariants();
        assert_eq!(heap.extract_min(), Some((1, 2)));
        assert_eq!(heap.extract_min(), Some((2, 3)));
        assert_eq!(heap.extract_min(), Some((0, 100)));
    }

    #[test]
    fn test_unknown_vertex_decrease() {
        let mut heap: IndexedMinHeap<usize, u32> = IndexedMinHeap::new();
        assert_eq!(
            heap.decrease_priority(3, 1),
            Err(Error::InvalidVertex("3".into()))
        );
    }

    #[test]
    fn test_priority_orders_infinite_last() {
        let mut heap = IndexedMinHeap::new();
        heap.insert(0usize, Priority::Infinite).unwrap();
        heap.insert(1, Priority::Finite(u64::MAX)).unwrap();
        heap.insert(2, Priority::Finite(0)).unwrap();
        assert_eq!(heap.extract_min(), Some((2, Priority::Finite(0))));
        assert_eq!(heap.extract_min(), Some((1, Priority::Finite(u64::MAX))));
        assert_eq!(heap.extract_min(), Some((0, Priority::Infinite)));

        assert_eq!(Priority::from(None::<u32>), Priority::Infinite);
        assert_eq!(Priority::from(Some(3u32)).finite(), Some(3));
    }

    #[test]
    fn test_random_operations_keep_heap_order() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut heap = IndexedMinHeap::with_capacity(200);
        let mut shadow: HashMap<usize, u32> = HashMap::new();

        for v in 0..200usize {
            let p = rng.gen_range(0..1_000);
            heap.insert(v, p).unwrap();
            shadow.insert(v, p);
        }

        while !heap.is_empty() {
            for _ in 0..rng.gen_range(0..4) {
                let queued: Vec<usize> = shadow.keys().copied().collect();
                let v = queued[rng.gen_range(0..queued.len())];
                let p = rng.gen_range(0..1_000);
                heap.decrease_priority(v, p).unwrap();
                shadow.insert(v, p);
            }
            heap.check_invariants();

            let (v, p) = heap.extract_min().unwrap();
            assert_eq!(shadow.remove(&v), Some(p));
            assert!(shadow.values().all(|&other| p <= other));
        }
        assert!(shadow.is_empty());
    }
}
