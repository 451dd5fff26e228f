//! Force-directed (Fruchterman-Reingold) node placement for the network chart.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::CollabGraph;

#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    pub seed: u64,
    pub iterations: usize,
    /// Optimal distance between nodes. Larger values spread the picture.
    pub spring_length: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            iterations: 1200,
            spring_length: 8.0,
        }
    }
}

const MIN_DISTANCE: f64 = 0.01;
const CONVERGENCE_THRESHOLD: f64 = 1e-4;

/// Places every node in `[-1, 1]²`, indexed by node.
///
/// Starts from seeded random positions, so the same graph and config always
/// produce the same picture. Attraction is scaled by edge weight.
pub fn spring_layout(graph: &CollabGraph, config: &LayoutConfig) -> Vec<(f64, f64)> {
    let n = graph.node_count();
    match n {
        0 => return Vec::new(),
        1 => return vec![(0.0, 0.0)],
        _ => {}
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random::<f64>(), rng.random::<f64>()))
        .collect();

    let mut weights = vec![vec![0.0; n]; n];
    for (a, b, collaboration) in graph.edges() {
        weights[a][b] = f64::from(collaboration.weight);
        weights[b][a] = f64::from(collaboration.weight);
    }

    let k = config.spring_length;
    let mut temperature = span(&pos) * 0.1;
    let cooling = temperature / (config.iterations as f64 + 1.0);

    for _ in 0..config.iterations {
        let mut moved = 0.0;
        let mut next = pos.clone();

        for i in 0..n {
            let (mut dx, mut dy) = (0.0, 0.0);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (ex, ey) = (pos[i].0 - pos[j].0, pos[i].1 - pos[j].1);
                let distance = (ex * ex + ey * ey).sqrt().max(MIN_DISTANCE);
                let force = k * k / (distance * distance) - weights[i][j] * distance / k;
                dx += ex * force;
                dy += ey * force;
            }

            let length = (dx * dx + dy * dy).sqrt();
            let length = if length < MIN_DISTANCE { 0.1 } else { length };
            let (sx, sy) = (dx * temperature / length, dy * temperature / length);
            next[i] = (pos[i].0 + sx, pos[i].1 + sy);
            moved += (sx * sx + sy * sy).sqrt();
        }

        pos = next;
        temperature -= cooling;
        if moved / (n as f64) < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    rescale(pos)
}

fn span(pos: &[(f64, f64)]) -> f64 {
    let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
    let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);
    for &(x, y) in pos {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    (max_x - min_x).max(max_y - min_y)
}

/// Centers the layout on the origin and scales the farthest coordinate to 1.
fn rescale(pos: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    let n = pos.len() as f64;
    let (cx, cy) = pos
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x / n, sy + y / n));

    let centered: Vec<(f64, f64)> = pos.into_iter().map(|(x, y)| (x - cx, y - cy)).collect();
    let extent = centered
        .iter()
        .fold(0.0f64, |m, &(x, y)| m.max(x.abs()).max(y.abs()));

    if extent == 0.0 {
        return centered;
    }
    centered
        .into_iter()
        .map(|(x, y)| (x / extent, y / extent))
        .collect()
}
