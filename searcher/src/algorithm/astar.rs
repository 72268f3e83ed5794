//! A* over whole partial paths.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;

use super::cache::CostCache;
use super::{SearchAlgorithm, SearchOptions, SearchQueue};
use crate::errors::Result;
use crate::graph::{Cost, Graph, GraphPath, Heuristics, NodeId};

/// A queued path, ranked by its cost so far plus the estimate
/// from its last node. Equal ranks come out in insertion order.
#[derive(Debug)]
struct Estimate {
    priority: Cost,
    sequence: usize,
    path: GraphPath,
}

impl PartialEq for Estimate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Estimate {}

impl Ord for Estimate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.sequence)
            .cmp(&(other.priority, other.sequence))
            .reverse()
    }
}

impl PartialOrd for Estimate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
pub struct AStarQueue<'h> {
    queue: BinaryHeap<Estimate>,
    heuristics: &'h Heuristics,
    sequence: usize,
}

impl<'h> AStarQueue<'h> {
    pub(crate) fn new(heuristics: &'h Heuristics) -> Self {
        AStarQueue {
            queue: BinaryHeap::new(),
            heuristics,
            sequence: 0,
        }
    }
}

impl<'h> SearchQueue for AStarQueue<'h> {
    type Candidate = GraphPath;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|e| e.path)
    }

    fn push(&mut self, item: Self::Candidate) {
        let priority = item
            .cost()
            .saturating_add(self.heuristics.estimate(item.destination()));
        self.sequence += 1;
        self.queue.push(Estimate {
            priority,
            sequence: self.sequence,
            path: item,
        });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// A* search.
///
/// Keeps the best known cost of reaching each node, and queues an extended
/// path only when it beats that cost. There is no closed set: a node whose
/// cost improves after it was expanded will be expanded again.
pub fn astar<N>(
    graph: &Graph<N>,
    heuristics: &Heuristics,
    start: NodeId,
    goal: NodeId,
) -> Result<Option<GraphPath>> {
    astar_with_options(graph, heuristics, start, goal, &SearchOptions::default())
}

pub fn astar_with_options<N>(
    graph: &Graph<N>,
    heuristics: &Heuristics,
    start: NodeId,
    goal: NodeId,
    options: &SearchOptions,
) -> Result<Option<GraphPath>> {
    heuristics.check(graph)?;
    graph.check(start)?;

    SearchAlgorithm::new(
        "astar",
        graph,
        start,
        goal,
        AStarQueue::new(heuristics),
        CostCache::new(graph.len(), start),
        options,
    )?
    .run()
}
