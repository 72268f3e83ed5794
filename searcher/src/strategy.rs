use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::algorithm::astar::astar_with_options;
use crate::algorithm::basic::bfs_with_options;
use crate::algorithm::oracle::oracle_with_options;
use crate::algorithm::SearchOptions;
use crate::errors::Result;
use crate::graph::{Graph, GraphPath, Heuristics, NodeId};

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    AStar,
    Oracle,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::AStar => "astar",
            Strategy::Oracle => "oracle",
        }
    }

    pub fn uses_heuristics(&self) -> bool {
        !matches!(self, Strategy::BreadthFirst)
    }

    pub fn uses_weights(&self) -> bool {
        self.uses_heuristics()
    }

    /// Run this strategy. Breadth-first search ignores the heuristics.
    pub fn search<N>(
        &self,
        graph: &Graph<N>,
        heuristics: &Heuristics,
        start: NodeId,
        goal: NodeId,
        options: &SearchOptions,
    ) -> Result<Option<GraphPath>> {
        match self {
            Strategy::BreadthFirst => bfs_with_options(graph, start, goal, options),
            Strategy::AStar => astar_with_options(graph, heuristics, start, goal, options),
            Strategy::Oracle => oracle_with_options(graph, heuristics, start, goal, options),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown search strategy: {0} (expected bfs, astar or oracle)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "astar" | "a*" => Ok(Strategy::AStar),
            "oracle" => Ok(Strategy::Oracle),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::fixtures::{self, id};

    #[test]
    fn parse() {
        assert_eq!("bfs".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!("Breadth-First".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!("A*".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!(" oracle ".parse::<Strategy>(), Ok(Strategy::Oracle));
        assert_eq!(
            "dfs".parse::<Strategy>(),
            Err(ParseStrategyError("dfs".into()))
        );
        assert_eq!(Strategy::AStar.to_string(), "astar");
    }

    #[test]
    fn every_strategy_on_the_diamond() {
        let (g, h) = fixtures::diamond();
        let options = SearchOptions::default();
        for strategy in &[Strategy::BreadthFirst, Strategy::AStar, Strategy::Oracle] {
            let path = strategy
                .search(&g, &h, id(&g, "A"), id(&g, "D"), &options)
                .unwrap()
                .unwrap();
            assert_eq!(g.describe(&path), "A -> B -> D", "{}", strategy);
            assert_eq!(path.validate(&g), Ok(3));
        }
    }

    #[test]
    fn every_strategy_on_an_isolated_node() {
        let g = fixtures::isolated();
        let h = Heuristics::zero(&g);
        let x = id(&g, "X");
        for strategy in &[Strategy::BreadthFirst, Strategy::AStar, Strategy::Oracle] {
            let path = strategy
                .search(&g, &h, x, x, &SearchOptions::default())
                .unwrap()
                .unwrap();
            assert_eq!(path.nodes(), &[x]);
            assert_eq!(path.cost(), 0);
        }
    }
}
