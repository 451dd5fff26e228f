//! Centrality measures over a [`CollabGraph`].
//!
//! Betweenness follows Brandes' algorithm with Dijkstra single-source shortest
//! paths. How an edge weight turns into a path cost is chosen with
//! [`WeightMode`].

use std::{cmp::Ordering, collections::BinaryHeap};

use super::CollabGraph;

/// Tolerance used when comparing path costs for equality.
const COST_EPSILON: f64 = 1e-9;

/// Path cost convention for weighted betweenness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightMode {
    /// Cost equals the collaboration count. Frequent collaborators are
    /// "farther" apart.
    #[default]
    Distance,
    /// Cost is the inverse of the collaboration count. Frequent collaborators
    /// are "closer".
    Strength,
}

impl WeightMode {
    pub fn cost(self, weight: u32) -> f64 {
        let weight = f64::from(weight.max(1));
        match self {
            WeightMode::Distance => weight,
            WeightMode::Strength => 1.0 / weight,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    cost: f64,
    seq: u64,
    node: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    // reversed: BinaryHeap is a max-heap
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Normalized weighted betweenness centrality, indexed by node.
///
/// Counts over ordered source/target pairs are scaled by
/// `1 / ((n - 1)(n - 2))`. Graphs with two nodes or fewer score zero
/// everywhere.
pub fn betweenness(graph: &CollabGraph, mode: WeightMode) -> Vec<f64> {
    let n = graph.node_count();
    let mut centrality = vec![0.0; n];

    for source in 0..n {
        let paths = shortest_paths(graph, source, mode);
        accumulate(source, &paths, &mut centrality);
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for value in &mut centrality {
            *value *= scale;
        }
    }

    centrality
}

/// Degree centrality, indexed by node: degree divided by `n - 1`.
pub fn degree_centrality(graph: &CollabGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![1.0; n];
    }

    let max_degree = (n - 1) as f64;
    (0..n)
        .map(|node| graph.degree(node) as f64 / max_degree)
        .collect()
}

struct ShortestPaths {
    /// Nodes in non-decreasing distance from the source.
    order: Vec<usize>,
    predecessors: Vec<Vec<usize>>,
    sigma: Vec<f64>,
}

fn shortest_paths(graph: &CollabGraph, source: usize, mode: WeightMode) -> ShortestPaths {
    let n = graph.node_count();
    let mut order = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0; n];
    let mut tentative: Vec<Option<f64>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    sigma[source] = 1.0;
    tentative[source] = Some(0.0);
    heap.push(Candidate {
        cost: 0.0,
        seq,
        node: source,
    });

    while let Some(Candidate { cost, node, .. }) = heap.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;
        order.push(node);

        for (next, collaboration) in graph.neighbors(node) {
            if settled[next] {
                continue;
            }
            let through = cost + mode.cost(collaboration.weight);

            match tentative[next] {
                Some(known) if (through - known).abs() <= COST_EPSILON * known.max(1.0) => {
                    sigma[next] += sigma[node];
                    predecessors[next].push(node);
                }
                Some(known) if through > known => {}
                _ => {
                    tentative[next] = Some(through);
                    sigma[next] = sigma[node];
                    predecessors[next] = vec![node];
                    seq += 1;
                    heap.push(Candidate {
                        cost: through,
                        seq,
                        node: next,
                    });
                }
            }
        }
    }

    ShortestPaths {
        order,
        predecessors,
        sigma,
    }
}

fn accumulate(source: usize, paths: &ShortestPaths, centrality: &mut [f64]) {
    let mut delta = vec![0.0; centrality.len()];

    for &node in paths.order.iter().rev() {
        let share = (1.0 + delta[node]) / paths.sigma[node];
        for &pred in &paths.predecessors[node] {
            delta[pred] += paths.sigma[pred] * share;
        }
        if node != source {
            centrality[node] += delta[node];
        }
    }
}
