use std::fmt::Debug;

use crate::graph::traits::{Graph, MutableGraph, Weight};

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
        }
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(Vec::len).sum()
    }

    /// Returns the outgoing edges of a vertex with their weights
    pub fn outgoing_edges(&self, vertex: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.outgoing_edges
            .get(vertex)
            .into_iter()
            .flat_map(|edges| edges.iter().copied())
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    type Vertex = usize;

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.outgoing_edges.len())
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.outgoing_edges(vertex).map(|(target, _)| target))
    }

    fn weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing_edges.len()
    }

    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing_edges.push(Vec::new());
        self.outgoing_edges.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        let outgoing = &mut self.outgoing_edges[from];
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| *target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }
}
