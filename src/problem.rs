//! Plain-text problem descriptions.
//!
//! ```text
//! nodes: A B C D
//! heuristics: 3 2 1 0
//! start: A
//! goal: D
//! A B 1
//! B D 2
//! ```
//!
//! Everything except `nodes:` is optional. Edge weights default to 1,
//! start and goal default to the first and last node.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use searcher::{Cost, Graph, GraphBuilder, GraphError, Heuristics, NodeId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProblemError {
    #[error("No nodes provided.")]
    NoNodes,

    #[error("line {line}: '{key}' given more than once")]
    DuplicateDirective { line: usize, key: String },

    #[error("line {line}: unknown directive '{key}'")]
    UnknownDirective { line: usize, key: String },

    #[error("line {line}: Invalid edge format: {text}")]
    InvalidEdge { line: usize, text: String },

    #[error("line {line}: '{value}' is not a non-negative integer")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },

    #[error("Unknown {role} node: {name}")]
    UnknownEndpoint { role: &'static str, name: String },
}

type Result<T> = std::result::Result<T, ProblemError>;

/// A graph, its heuristics if any were given, and the two ends of the search.
#[derive(Debug, Clone)]
pub struct Problem {
    pub graph: Graph<String>,
    pub heuristics: Option<Heuristics>,
    pub start: NodeId,
    pub goal: NodeId,
}

#[derive(Debug)]
struct Directive {
    line: usize,
    value: String,
}

#[derive(Debug)]
struct EdgeLine {
    line: usize,
    from: String,
    to: String,
    weight: Cost,
}

#[derive(Debug, Default)]
struct Sections {
    nodes: Option<Directive>,
    heuristics: Option<Directive>,
    start: Option<Directive>,
    goal: Option<Directive>,
    edges: Vec<EdgeLine>,
}

fn parse_number(line: usize, value: &str) -> Result<Cost> {
    value.parse().map_err(|_| ProblemError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn set(slot: &mut Option<Directive>, line: usize, key: &str, value: &str) -> Result<()> {
    if slot.is_some() {
        return Err(ProblemError::DuplicateDirective {
            line,
            key: key.to_string(),
        });
    }
    *slot = Some(Directive {
        line,
        value: value.trim().to_string(),
    });
    Ok(())
}

fn split(s: &str) -> Result<Sections> {
    lazy_static! {
        static ref DIRECTIVE: Regex = Regex::new(r"^(?P<key>[A-Za-z]+)\s*:(?P<value>.*)$").unwrap();
        static ref EDGE: Regex =
            Regex::new(r"^(?P<from>[^\s:]+)\s+(?P<to>[^\s:]+)(?:\s+(?P<weight>\S+))?$").unwrap();
    };

    let mut sections = Sections::default();
    for (i, raw) in s.lines().enumerate() {
        let line = i + 1;
        let text = match raw.find('#') {
            Some(p) => &raw[..p],
            None => raw,
        }
        .trim();

        if text.is_empty() {
            continue;
        }

        if let Some(cap) = DIRECTIVE.captures(text) {
            let key = cap["key"].to_ascii_lowercase();
            let value = &cap["value"];
            match key.as_str() {
                "nodes" => set(&mut sections.nodes, line, &key, value)?,
                "heuristics" => set(&mut sections.heuristics, line, &key, value)?,
                "start" => set(&mut sections.start, line, &key, value)?,
                "goal" => set(&mut sections.goal, line, &key, value)?,
                _ => return Err(ProblemError::UnknownDirective { line, key }),
            }
            continue;
        }

        let cap = EDGE.captures(text).ok_or_else(|| ProblemError::InvalidEdge {
            line,
            text: text.to_string(),
        })?;
        let weight = match cap.name("weight") {
            Some(w) => parse_number(line, w.as_str())?,
            None => 1,
        };
        sections.edges.push(EdgeLine {
            line,
            from: cap["from"].to_string(),
            to: cap["to"].to_string(),
            weight,
        });
    }
    Ok(sections)
}

fn endpoint(graph: &Graph<String>, role: &'static str, name: &str) -> Result<NodeId> {
    graph
        .id(&name.to_string())
        .ok_or_else(|| ProblemError::UnknownEndpoint {
            role,
            name: name.to_string(),
        })
}

impl Problem {
    /// Parse a problem description. With `undirected`, every edge line
    /// also adds the reverse edge.
    pub fn parse(s: &str, undirected: bool) -> Result<Self> {
        let sections = split(s)?;

        let nodes = sections.nodes.ok_or(ProblemError::NoNodes)?;
        let names: Vec<&str> = nodes.value.split_whitespace().collect();
        if names.is_empty() {
            return Err(ProblemError::NoNodes);
        }

        let mut builder = GraphBuilder::new();
        for name in &names {
            builder
                .node(name.to_string())
                .map_err(|source| ProblemError::Graph {
                    line: nodes.line,
                    source,
                })?;
        }

        for edge in &sections.edges {
            let added = if undirected {
                builder.undirected_edge(&edge.from, &edge.to, edge.weight)
            } else {
                builder.edge(&edge.from, &edge.to, edge.weight)
            };
            added.map_err(|source| ProblemError::Graph {
                line: edge.line,
                source,
            })?;
        }
        let graph = builder.build();

        let heuristics = match sections.heuristics {
            Some(d) => {
                let values = d
                    .value
                    .split_whitespace()
                    .map(|v| parse_number(d.line, v))
                    .collect::<Result<Vec<_>>>()?;
                Some(
                    Heuristics::from_values(&graph, values).map_err(|source| {
                        ProblemError::Graph {
                            line: d.line,
                            source,
                        }
                    })?,
                )
            }
            None => None,
        };

        let first = names[0];
        let last = names[names.len() - 1];
        let start = endpoint(
            &graph,
            "start",
            sections.start.as_ref().map_or(first, |d| d.value.as_str()),
        )?;
        let goal = endpoint(
            &graph,
            "goal",
            sections.goal.as_ref().map_or(last, |d| d.value.as_str()),
        )?;

        Ok(Problem {
            graph,
            heuristics,
            start,
            goal,
        })
    }

    pub fn with_start(mut self, name: &str) -> Result<Self> {
        self.start = endpoint(&self.graph, "start", name)?;
        Ok(self)
    }

    pub fn with_goal(mut self, name: &str) -> Result<Self> {
        self.goal = endpoint(&self.graph, "goal", name)?;
        Ok(self)
    }
}

impl FromStr for Problem {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self> {
        Problem::parse(s, false)
    }
}
