use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use super::{Cost, Graph, NodeId};
use crate::errors::{GraphError, Result, SearchError};

/// Estimated remaining cost from each node to the goal, indexed by [NodeId].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heuristics {
    values: Vec<Cost>,
}

impl Heuristics {
    /// A heuristic of zero everywhere, which turns the informed searches
    /// into uniform-cost searches.
    pub fn zero<N>(graph: &Graph<N>) -> Self {
        Self {
            values: vec![0; graph.len()],
        }
    }

    /// One value per node, in node insertion order.
    pub fn from_values<N>(graph: &Graph<N>, values: Vec<Cost>) -> std::result::Result<Self, GraphError> {
        if values.len() != graph.len() {
            return Err(GraphError::HeuristicCount {
                expected: graph.len(),
                found: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Look up a value for every node of the graph. Extra entries are ignored.
    pub fn from_map<N>(graph: &Graph<N>, values: &HashMap<N, Cost>) -> std::result::Result<Self, GraphError>
    where
        N: Display + Hash + Eq,
    {
        let values = graph
            .nodes()
            .map(|(_, n)| {
                values
                    .get(n)
                    .copied()
                    .ok_or_else(|| GraphError::MissingHeuristic(n.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Estimate for a node known to belong to the graph these values were built for.
    pub fn estimate(&self, node: NodeId) -> Cost {
        self.values[node.0]
    }

    pub(crate) fn check<N>(&self, graph: &Graph<N>) -> Result<()> {
        if self.values.len() == graph.len() {
            Ok(())
        } else {
            Err(SearchError::HeuristicMismatch {
                expected: graph.len(),
                found: self.values.len(),
            })
        }
    }
}
