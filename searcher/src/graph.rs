//! Graph decomposition and datastructures.
//!
//! Nodes carry arbitrary identifiers, but every search works on the dense
//! [NodeId] indices assigned in insertion order, so cost, heuristic and
//! backpointer tables can be plain vectors.

use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

mod edge;
mod heuristics;
mod path;

pub use edge::Edge;
pub use heuristics::Heuristics;
pub use path::GraphPath;

use crate::errors::{GraphError, Result, SearchError};

/// Weight of an edge, accumulated cost of a path, or heuristic estimate.
pub type Cost = u64;

/// Dense index of a node within a single [Graph].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct GraphBuilder<N> {
    nodes: Vec<N>,
    index: HashMap<N, NodeId>,
    edges: Vec<Vec<Edge>>,
}

impl<N> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }
}

impl<N> GraphBuilder<N>
where
    N: Debug + Display + Clone + Hash + Eq,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning the index it was assigned.
    pub fn node(&mut self, node: N) -> std::result::Result<NodeId, GraphError> {
        if self.index.contains_key(&node) {
            return Err(GraphError::DuplicateNode(node.to_string()));
        }

        let id = NodeId(self.nodes.len());
        self.index.insert(node.clone(), id);
        self.nodes.push(node);
        self.edges.push(Vec::new());
        Ok(id)
    }

    fn lookup(&self, node: &N) -> std::result::Result<NodeId, GraphError> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(node.to_string()))
    }

    /// Add a single directed edge. Both endpoints must already be nodes.
    pub fn edge(&mut self, from: &N, to: &N, weight: Cost) -> std::result::Result<(), GraphError> {
        let origin = self.lookup(from)?;
        let destination = self.lookup(to)?;
        self.edges[origin.0].push(Edge::new(destination, weight));
        Ok(())
    }

    /// Add an edge in each direction between two nodes.
    pub fn undirected_edge(&mut self, a: &N, b: &N, weight: Cost) -> std::result::Result<(), GraphError> {
        self.edge(a, b, weight)?;
        self.edge(b, a, weight)
    }

    pub fn build(self) -> Graph<N> {
        Graph {
            nodes: self.nodes,
            index: self.index,
            edges: self.edges,
        }
    }
}

pub fn builder<N>() -> GraphBuilder<N>
where
    N: Debug + Display + Clone + Hash + Eq,
{
    GraphBuilder::new()
}

/// An immutable directed graph with weighted edges.
///
/// Outgoing edges keep the order they were added in, which fixes the
/// order in which every search visits neighbors.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, NodeId>,
    edges: Vec<Vec<Edge>>,
}

impl<N> Graph<N> {
    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Outgoing edges of a node. Unknown nodes have no edges.
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        self.edges.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Map the nodes of a path back to their identifiers.
    pub fn resolve(&self, path: &GraphPath) -> Vec<&N> {
        path.nodes().iter().filter_map(|&id| self.node(id)).collect()
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(SearchError::InvalidNode(id))
        }
    }
}

impl<N> Graph<N>
where
    N: Hash + Eq,
{
    pub fn id(&self, node: &N) -> Option<NodeId> {
        self.index.get(node).copied()
    }
}

impl<N> Graph<N>
where
    N: Display,
{
    /// Render a path as `A -> B -> C`.
    pub fn describe(&self, path: &GraphPath) -> String {
        self.resolve(path)
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
