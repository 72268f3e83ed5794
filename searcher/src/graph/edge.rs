use super::{Cost, NodeId};

/// An outgoing edge: the node it leads to and the cost of taking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    destination: NodeId,
    weight: Cost,
}

impl Edge {
    pub fn new(destination: NodeId, weight: Cost) -> Self {
        Self {
            destination,
            weight,
        }
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn weight(&self) -> Cost {
        self.weight
    }
}
