use std::collections::VecDeque;

use super::cache::NoRevisit;
use super::{SearchAlgorithm, SearchOptions, SearchQueue};
use crate::errors::Result;
use crate::graph::{Graph, GraphPath, NodeId};

#[derive(Debug)]
pub struct BreadthQueue<S> {
    queue: VecDeque<S>,
}

impl<S> SearchQueue for BreadthQueue<S> {
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push_back(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<S> Default for BreadthQueue<S> {
    fn default() -> Self {
        BreadthQueue {
            queue: VecDeque::new(),
        }
    }
}

/// Breadth-first search, ignoring edge weights.
///
/// Paths are explored in level order, so the first path to reach the goal
/// has the fewest edges. Neighbors are visited in the order their edges were
/// added, and a path never visits the same node twice.
pub fn bfs<N>(graph: &Graph<N>, start: NodeId, goal: NodeId) -> Result<Option<GraphPath>> {
    bfs_with_options(graph, start, goal, &SearchOptions::default())
}

pub fn bfs_with_options<N>(
    graph: &Graph<N>,
    start: NodeId,
    goal: NodeId,
    options: &SearchOptions,
) -> Result<Option<GraphPath>> {
    SearchAlgorithm::new(
        "bfs",
        graph,
        start,
        goal,
        BreadthQueue::default(),
        NoRevisit,
        options,
    )?
    .run()
}
