use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// Handle of a location in a [`NamedGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A directed graph over named locations, keyed by location name.
///
/// Edges are stored as a sparse map `from -> (to -> weight)`. Neighbor order
/// follows vertex creation order.
#[derive(Debug, Clone)]
pub struct NamedGraph<W>
where
    W: Weight,
{
    ids: HashMap<String, VertexId>,
    names: Vec<String>,
    edges: HashMap<VertexId, BTreeMap<VertexId, W>>,
}

impl<W> Default for NamedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> NamedGraph<W>
where
    W: Weight,
{
    pub fn new() -> Self {
        NamedGraph {
            ids: HashMap::new(),
            names: Vec::new(),
            edges: HashMap::new(),
        }
    }

    /// Returns the vertex for `name`, creating it on first use
    pub fn add_location(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = VertexId(self.names.len());
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, vertex: VertexId) -> Option<&str> {
        self.names.get(vertex.0).map(String::as_str)
    }

    /// Adds or replaces the edge `from -> to`. Both locations must already exist.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: W) -> Result<()> {
        let u = self
            .vertex(from)
            .ok_or_else(|| Error::InvalidVertex(from.to_string()))?;
        let v = self
            .vertex(to)
            .ok_or_else(|| Error::InvalidVertex(to.to_string()))?;
        self.edges.entry(u).or_default().insert(v, weight);
        Ok(())
    }

    /// Location names in creation order
    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    /// Renders a vertex sequence as `a->b->c`
    pub fn format_path(&self, path: &[VertexId]) -> String {
        path.iter()
            .map(|&v| match self.name(v) {
                Some(name) => name.to_string(),
                None => v.to_string(),
            })
            .collect::<Vec<_>>()
            .join("->")
    }
}

impl<W> NamedGraph<W>
where
    W: Weight + FromStr,
    W::Err: fmt::Display,
{
    /// Parses an edge list with one `from to weight` triple per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Locations are
    /// created as they are first mentioned.
    pub fn from_edge_list(input: &str) -> Result<Self> {
        let mut graph = NamedGraph::new();

        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let &[from, to, weight] = fields.as_slice() else {
                return Err(Error::Parse {
                    line: index + 1,
                    message: format!("expected `from to weight`, got {:?}", line),
                });
            };
            let weight = weight.parse::<W>().map_err(|e| Error::Parse {
                line: index + 1,
                message: format!("bad weight {:?}: {}", weight, e),
            })?;

            graph.add_location(from);
            graph.add_location(to);
            graph.add_edge(from, to, weight)?;
        }

        log::debug!(
            "parsed edge list: {} locations, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<W> Graph<W> for NamedGraph<W>
where
    W: Weight,
{
    type Vertex = VertexId;

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.names.len()).map(VertexId))
    }

    fn neighbors(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.edges.get(&vertex) {
            Some(targets) => Box::new(targets.keys().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.edges.get(&from)?.get(&to).copied()
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.0 < self.names.len()
    }

    fn vertex_count(&self) -> usize {
        self.names.len()
    }
}
