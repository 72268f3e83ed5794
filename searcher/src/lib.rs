//! Graph search algorithms over small weighted graphs.
//!
//! Build a [Graph] with a [GraphBuilder], optionally attach
//! [Heuristics], then run one of the strategies:
//!
//! - [bfs]: breadth-first, fewest edges, ignores weights.
//! - [astar]: A* over partial paths, re-expanding nodes when cheaper
//!   routes turn up.
//! - [oracle]: priority search over nodes with backpointers.
//!
//! Every search returns `Ok(None)` when the goal cannot be reached.

pub mod algorithm;
mod errors;
pub mod graph;
mod strategy;

pub use errors::Result as SearchResult;
pub use errors::{GraphError, SearchError};
pub use graph::{Cost, Edge, Graph, GraphBuilder, GraphPath, Heuristics, NodeId};
pub use strategy::{ParseStrategyError, Strategy};

pub use algorithm::astar::{astar, astar_with_options};
pub use algorithm::basic::{bfs, bfs_with_options};
pub use algorithm::oracle::{oracle, oracle_with_options};
pub use algorithm::SearchOptions;
