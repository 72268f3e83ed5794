//! Priority search over single nodes, rebuilding the path from backpointers.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::{SearchOptions, StepCounter};
use crate::errors::Result;
use crate::graph::{Cost, Graph, GraphPath, Heuristics, NodeId};

/// A queued node. Lowest priority first, then lowest node index.
#[derive(Debug, PartialEq, Eq)]
struct Frontier {
    priority: Cost,
    node: NodeId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.node)
            .cmp(&(other.priority, other.node))
            .reverse()
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best known cost and predecessor for every node touched by one search.
#[derive(Debug)]
struct Sweep {
    costs: Vec<Option<Cost>>,
    came_from: Vec<Option<NodeId>>,
}

impl Sweep {
    fn new(nodes: usize, start: NodeId) -> Self {
        let mut costs = vec![None; nodes];
        costs[start.index()] = Some(0);
        Self {
            costs,
            came_from: vec![None; nodes],
        }
    }

    fn cost(&self, node: NodeId) -> Option<Cost> {
        self.costs[node.index()]
    }

    /// Record a route to `node` through `via` if it is the first one seen
    /// or cheaper than the best so far.
    fn relax(&mut self, node: NodeId, via: NodeId, cost: Cost) -> bool {
        match self.costs[node.index()] {
            Some(known) if known <= cost => false,
            _ => {
                self.costs[node.index()] = Some(cost);
                self.came_from[node.index()] = Some(via);
                true
            }
        }
    }

    /// Follow backpointers from the goal back to the start.
    fn reconstruct(&self, start: NodeId, goal: NodeId) -> GraphPath {
        let mut nodes = vec![goal];
        let mut current = goal;
        while current != start && nodes.len() <= self.costs.len() {
            match self.came_from[current.index()] {
                Some(previous) => {
                    nodes.push(previous);
                    current = previous;
                }
                None => break,
            }
        }
        nodes.reverse();
        GraphPath::from_parts(nodes, self.cost(goal).unwrap_or(0))
    }
}

/// Heuristic-guided priority search.
///
/// Each node keeps a single backpointer to the cheapest predecessor found
/// so far, and is queued again whenever its cost improves. The search stops
/// the first time the goal leaves the queue.
pub fn oracle<N>(
    graph: &Graph<N>,
    heuristics: &Heuristics,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<GraphPath>> {
    oracle_with_options(graph, heuristics, start, goal, &SearchOptions::default())
}

pub fn oracle_with_options<N>(
    graph: &Graph<N>,
    heuristics: &Heuristics,
    start: NodeId,
    goal: NodeId,
    options: &SearchOptions,
) -> Result<Option<GraphPath>> {
    heuristics.check(graph)?;
    graph.check(start)?;
    graph.check(goal)?;
    debug!(strategy = "oracle", %start, %goal, "starting search");

    let mut counter = StepCounter::new(options);
    let mut sweep = Sweep::new(graph.len(), start);
    let mut queue = BinaryHeap::new();
    queue.push(Frontier {
        priority: heuristics.estimate(start),
        node: start,
    });

    while let Some(Frontier { priority, node }) = queue.pop() {
        counter.increment(queue.len())?;

        let known = match sweep.cost(node) {
            Some(c) => c,
            None => continue,
        };
        if priority > known.saturating_add(heuristics.estimate(node)) {
            trace!(%node, priority, "skipping stale entry");
            continue;
        }

        if node == goal {
            let path = sweep.reconstruct(start, goal);
            debug!(
                strategy = "oracle",
                steps = counter.steps(),
                cost = path.cost(),
                "found path"
            );
            return Ok(Some(path));
        }

        for edge in graph.edges(node) {
            let next = edge.destination();
            let cost = known.saturating_add(edge.weight());
            if sweep.relax(next, node, cost) {
                queue.push(Frontier {
                    priority: cost.saturating_add(heuristics.estimate(next)),
                    node: next,
                });
            }
        }
    }

    debug!(
        strategy = "oracle",
        steps = counter.steps(),
        "no path found"
    );
    Ok(None)
}
