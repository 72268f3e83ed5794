use super::{Cost, Graph, NodeId};
use crate::errors::GraphError;

/// A walk through a graph, from its origin to its destination,
/// along with the total weight of the edges taken.
///
/// A path always holds at least one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath {
    nodes: Vec<NodeId>,
    cost: Cost,
}

impl GraphPath {
    pub fn new(origin: NodeId) -> Self {
        Self {
            nodes: vec![origin],
            cost: 0,
        }
    }

    pub(crate) fn from_parts(nodes: Vec<NodeId>, cost: Cost) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes, cost }
    }

    /// Build a path from a sequence of nodes, checking that each
    /// consecutive pair is joined by an edge. Where parallel edges exist
    /// the cheapest one is taken.
    pub fn validated<N>(graph: &Graph<N>, nodes: Vec<NodeId>) -> Result<Self, GraphError> {
        let mut path = Self { nodes, cost: 0 };
        path.cost = path.validate(graph)?;
        Ok(path)
    }

    /// Check this path against a graph, returning its cheapest total weight.
    pub fn validate<N>(&self, graph: &Graph<N>) -> Result<Cost, GraphError> {
        let origin = *self.nodes.first().ok_or(GraphError::EmptyPath)?;
        if !graph.contains(origin) {
            return Err(GraphError::UnknownNode(origin.to_string()));
        }

        let mut total: Cost = 0;
        for pair in self.nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let weight = graph
                .edges(from)
                .iter()
                .filter(|e| e.destination() == to)
                .map(|e| e.weight())
                .min()
                .ok_or(GraphError::Disconnected { from, to })?;
            total = total.saturating_add(weight);
        }
        Ok(total)
    }

    /// Number of edges in the path.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn origin(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn destination(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Extend the path by one edge.
    pub fn step(&self, node: NodeId, weight: Cost) -> Self {
        let mut nextpath = self.clone();
        nextpath.nodes.push(node);
        nextpath.cost = nextpath.cost.saturating_add(weight);
        nextpath
    }

    /// True when the destination already appeared earlier in the path.
    pub(crate) fn revisits(&self) -> bool {
        let (last, rest) = match self.nodes.split_last() {
            Some(parts) => parts,
            None => return false,
        };
        rest.contains(last)
    }
}
