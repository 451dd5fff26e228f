use std::cmp::Ordering;

use super::{CollabGraph, WeightMode, betweenness, degree_centrality};
use crate::types::RankedArtist;

/// Computes every node's metrics and returns them sorted by betweenness,
/// highest first. Ties keep node order.
pub fn rank(graph: &CollabGraph, mode: WeightMode) -> Vec<RankedArtist> {
    let betweenness = betweenness(graph, mode);
    let degree = degree_centrality(graph);

    let mut ranking: Vec<RankedArtist> = graph
        .artists()
        .enumerate()
        .map(|(node, artist)| RankedArtist {
            artist: artist.to_string(),
            song_count: graph.song_count(artist),
            betweenness_centrality: betweenness[node],
            degree_centrality: degree[node],
            number_of_collaborators: graph.degree(node),
        })
        .collect();

    ranking.sort_by(|a, b| descending(a.betweenness_centrality, b.betweenness_centrality));
    ranking
}

/// Top `limit` artists by degree centrality, ties in ranking order.
pub fn top_by_degree(ranking: &[RankedArtist], limit: usize) -> Vec<&RankedArtist> {
    let mut by_degree: Vec<&RankedArtist> = ranking.iter().collect();
    by_degree.sort_by(|a, b| descending(a.degree_centrality, b.degree_centrality));
    by_degree.truncate(limit);
    by_degree
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
