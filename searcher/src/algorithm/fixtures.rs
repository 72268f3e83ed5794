//! Graphs shared by the search tests.

use crate::graph::{Cost, Graph, GraphBuilder, Heuristics, NodeId};

pub(crate) type Distances = Vec<Vec<Option<Cost>>>;

pub(crate) fn id(graph: &Graph<String>, name: &str) -> NodeId {
    graph.id(&name.to_string()).expect("fixture node")
}

fn build(nodes: &[&str], edges: &[(&str, &str, Cost)]) -> Graph<String> {
    let mut b = GraphBuilder::new();
    for n in nodes {
        b.node(n.to_string()).unwrap();
    }
    for (from, to, w) in edges {
        b.edge(&from.to_string(), &to.to_string(), *w).unwrap();
    }
    b.build()
}

/// A-B(1), B-D(2), A-C(4), C-D(1) with estimates 3, 2, 1, 0.
pub(crate) fn diamond() -> (Graph<String>, Heuristics) {
    let g = build(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("B", "D", 2), ("A", "C", 4), ("C", "D", 1)],
    );
    let h = Heuristics::from_values(&g, vec![3, 2, 1, 0]).unwrap();
    (g, h)
}

/// A direct but expensive edge next to a cheap three-hop route.
pub(crate) fn detour() -> (Graph<String>, Heuristics) {
    let g = build(
        &["S", "A", "B", "G"],
        &[("S", "G", 10), ("S", "A", 1), ("A", "B", 1), ("B", "G", 1)],
    );
    let h = Heuristics::from_values(&g, vec![3, 2, 1, 0]).unwrap();
    (g, h)
}

/// Overestimates the remaining cost from B.
pub(crate) fn misleading() -> (Graph<String>, Heuristics) {
    let g = build(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 1),
            ("A", "C", 1),
            ("B", "D", 1),
            ("C", "D", 10),
            ("D", "E", 5),
        ],
    );
    let h = Heuristics::from_values(&g, vec![0, 12, 0, 0, 0]).unwrap();
    (g, h)
}

pub(crate) fn isolated() -> Graph<String> {
    build(&["X"], &[])
}

/// A three node cycle, plus a node nothing leads to.
pub(crate) fn cycle_with_island() -> Graph<String> {
    build(
        &["A", "B", "C", "Z"],
        &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1), ("Z", "A", 1)],
    )
}

/// Small linear congruential generator, so generated graphs are stable.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn chance(&mut self, p: f64) -> bool {
        (self.next() % 1_000) as f64 / 1_000.0 < p
    }
}

/// Directed graph over nodes "0".."n" where each ordered pair is joined
/// with probability `density`, by an edge of weight 1..=max_weight.
pub(crate) fn random_graph(seed: u64, n: usize, density: f64, max_weight: Cost) -> Graph<String> {
    let mut rng = Lcg(seed);
    let mut b = GraphBuilder::new();
    for i in 0..n {
        b.node(i.to_string()).unwrap();
    }
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.chance(density) {
                let w = 1 + rng.next() % max_weight;
                b.edge(&i.to_string(), &j.to_string(), w).unwrap();
            }
        }
    }
    b.build()
}

/// Floyd-Warshall over the graph. With `unit` every edge counts as 1.
pub(crate) fn all_pairs(graph: &Graph<String>, unit: bool) -> Distances {
    let n = graph.len();
    let mut dist: Distances = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for (from, _) in graph.nodes() {
        for edge in graph.edges(from) {
            let w = if unit { 1 } else { edge.weight() };
            let cell = &mut dist[from.index()][edge.destination().index()];
            if cell.map_or(true, |d| w < d) {
                *cell = Some(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

/// The true remaining distance to `goal` from every node that can reach it.
pub(crate) fn exact_heuristics(graph: &Graph<String>, dist: &Distances, goal: NodeId) -> Heuristics {
    let values = (0..graph.len())
        .map(|i| dist[i][goal.index()].unwrap_or(0))
        .collect();
    Heuristics::from_values(graph, values).unwrap()
}
