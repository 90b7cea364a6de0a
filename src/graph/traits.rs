use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Zero;
use ordered_float::OrderedFloat;

/// Edge weight usable by the shortest path engine.
///
/// Integers and `OrderedFloat` both qualify. Negative values are representable
/// but the engine only produces correct distances for non-negative weights.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// `self + rhs`, or `None` if the sum does not fit in the type
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Float sums saturate at infinity instead of wrapping
impl Weight for OrderedFloat<f32> {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl Weight for OrderedFloat<f64> {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Vertex handle. Created by the graph, never by the engine.
    type Vertex: Copy + Eq + Hash + Ord + Debug;

    /// Returns an iterator over every vertex in the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = Self::Vertex> + '_>;

    /// Returns an iterator over the heads of the outgoing edges of `vertex`
    fn neighbors(&self, vertex: Self::Vertex) -> Box<dyn Iterator<Item = Self::Vertex> + '_>;

    /// Gets the weight of an edge if it exists.
    ///
    /// `None` means there is no edge; `Some(W::zero())` is a real zero-cost edge.
    fn weight(&self, from: Self::Vertex, to: Self::Vertex) -> Option<W>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: Self::Vertex) -> bool {
        self.vertices().any(|v| v == vertex)
    }

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> Self::Vertex;

    /// Adds or replaces a directed edge. Returns false if either endpoint is unknown.
    fn add_edge(&mut self, from: Self::Vertex, to: Self::Vertex, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: Self::Vertex, to: Self::Vertex) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_sum_detects_integer_overflow() {
        assert_eq!(200u8.checked_sum(55), Some(255));
        assert_eq!(200u8.checked_sum(100), None);
        assert_eq!(i64::MAX.checked_sum(1), None);
        assert_eq!(
            OrderedFloat(1.5f64).checked_sum(OrderedFloat(2.0)),
            Some(OrderedFloat(3.5))
        );
    }
}
