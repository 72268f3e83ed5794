//! Rules deciding which extended paths are worth queueing.

use crate::graph::{Cost, GraphPath, NodeId};

/// Defines the behavior required of a search cache.
pub trait Cache {
    /// Should this freshly extended candidate be queued?
    fn check(&mut self, candidate: &GraphPath) -> bool;
}

/// Rejects only candidates which loop back on themselves.
///
/// Nothing is shared between paths, so a node may appear
/// on many queued paths at once.
#[derive(Debug, Default)]
pub struct NoRevisit;

impl Cache for NoRevisit {
    fn check(&mut self, candidate: &GraphPath) -> bool {
        !candidate.revisits()
    }
}

/// Records the best known cost of reaching each node, and only
/// admits candidates which strictly improve on it.
#[derive(Debug)]
pub struct CostCache {
    costs: Vec<Option<Cost>>,
}

impl CostCache {
    pub(crate) fn new(nodes: usize, start: NodeId) -> Self {
        let mut costs = vec![None; nodes];
        costs[start.index()] = Some(0);
        Self { costs }
    }
}

impl Cache for CostCache {
    fn check(&mut self, candidate: &GraphPath) -> bool {
        let cost = candidate.cost();
        let known = &mut self.costs[candidate.destination().index()];
        match *known {
            Some(best) if best <= cost => false,
            _ => {
                *known = Some(cost);
                true
            }
        }
    }
}
