use thiserror::Error;

use crate::graph::NodeId;

/// Error produced when a search cannot be carried out.
///
/// Failing to reach the goal is not an error: searches report
/// that as `Ok(None)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Node {0} is not part of this graph")]
    InvalidNode(NodeId),

    #[error("Heuristics table has {found} entries, graph has {expected} nodes")]
    HeuristicMismatch { expected: usize, found: usize },

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),
}

/// Error produced while building a graph or checking a path against it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Mismatch between number of nodes ({expected}) and heuristics ({found})")]
    HeuristicCount { expected: usize, found: usize },

    #[error("No heuristic provided for node {0}")]
    MissingHeuristic(String),

    #[error("No edge from {from} to {to}")]
    Disconnected { from: NodeId, to: NodeId },

    #[error("A path must contain at least one node")]
    EmptyPath,
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
