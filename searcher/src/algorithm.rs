//! Provides the building blocks for search algorithms

use tracing::{debug, info};

use self::cache::Cache;
use crate::errors::{Result, SearchError};
use crate::graph::{Graph, GraphPath, NodeId};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod cache;
pub(crate) mod oracle;

#[cfg(test)]
pub(crate) mod fixtures;

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Knobs shared by every search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Give up with [SearchError::StepLimitExhausted] after this many
    /// candidates have been taken from the frontier.
    pub limit: Option<usize>,

    /// Log search progress every this many steps.
    pub verbose: Option<usize>,
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_verbose(mut self, every: usize) -> Self {
        self.verbose = Some(every);
        self
    }
}

#[derive(Debug)]
pub(crate) struct StepCounter {
    current: usize,
    maximum: Option<usize>,
    verbose: Option<usize>,
}

impl StepCounter {
    pub(crate) fn new(options: &SearchOptions) -> Self {
        Self {
            current: 0,
            maximum: options.limit,
            verbose: options.verbose.filter(|&v| v > 0),
        }
    }

    pub(crate) fn steps(&self) -> usize {
        self.current
    }

    /// Count one step, with `frontier` candidates still waiting.
    pub(crate) fn increment(&mut self, frontier: usize) -> Result<()> {
        self.current += 1;

        if let Some(every) = self.verbose {
            if self.current % every == 0 {
                info!(steps = self.current, frontier, "search progress");
            }
        }

        match self.maximum {
            Some(maximum) if self.current > maximum => {
                Err(SearchError::StepLimitExhausted(maximum))
            }
            _ => Ok(()),
        }
    }
}

/// Search over whole partial paths.
///
/// The queue (Q) decides which path is expanded next and the cache (C)
/// decides which extended paths are worth queueing, which is all that
/// separates breadth-first search from A*.
#[derive(Debug)]
pub(crate) struct SearchAlgorithm<'g, N, Q, C>
where
    Q: SearchQueue<Candidate = GraphPath>,
    C: Cache,
{
    name: &'static str,
    graph: &'g Graph<N>,
    goal: NodeId,
    queue: Q,
    cache: C,
    counter: StepCounter,
}

impl<'g, N, Q, C> SearchAlgorithm<'g, N, Q, C>
where
    Q: SearchQueue<Candidate = GraphPath>,
    C: Cache,
{
    pub(crate) fn new(
        name: &'static str,
        graph: &'g Graph<N>,
        start: NodeId,
        goal: NodeId,
        queue: Q,
        cache: C,
        options: &SearchOptions,
    ) -> Result<Self> {
        graph.check(start)?;
        graph.check(goal)?;
        debug!(strategy = name, %start, %goal, "starting search");

        let mut sr = SearchAlgorithm {
            name,
            graph,
            goal,
            queue,
            cache,
            counter: StepCounter::new(options),
        };
        sr.queue.push(GraphPath::new(start));
        Ok(sr)
    }

    /// Run the search until the goal is taken from the queue
    /// or the queue runs dry.
    pub(crate) fn run(mut self) -> Result<Option<GraphPath>> {
        let graph = self.graph;
        while let Some(candidate) = self.queue.pop() {
            self.counter.increment(self.queue.len())?;

            if candidate.destination() == self.goal {
                debug!(
                    strategy = self.name,
                    steps = self.counter.steps(),
                    cost = candidate.cost(),
                    "found path"
                );
                return Ok(Some(candidate));
            }

            for edge in graph.edges(candidate.destination()) {
                let child = candidate.step(edge.destination(), edge.weight());
                if self.cache.check(&child) {
                    self.queue.push(child);
                }
            }
        }

        debug!(
            strategy = self.name,
            steps = self.counter.steps(),
            "no path found"
        );
        Ok(None)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn step_counter_limit() {
        let mut c = StepCounter::new(&SearchOptions::default().with_limit(2));
        assert!(c.increment(0).is_ok());
        assert!(c.increment(0).is_ok());
        assert_eq!(c.increment(0), Err(SearchError::StepLimitExhausted(2)));
        assert_eq!(c.steps(), 3);
    }

    #[test]
    fn step_counter_unlimited() {
        let mut c = StepCounter::new(&SearchOptions::default().with_verbose(0));
        for _ in 0..1_000 {
            assert!(c.increment(1).is_ok());
        }
    }
}
