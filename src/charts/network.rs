use std::{collections::HashMap, path::Path};

use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{ChartError, marker_radius, palette};
use crate::{network::CollabGraph, types::RankedArtist};

const SIZE: (u32, u32) = (1600, 1200);
const BOUND: f64 = 1.15;

/// Draws the collaboration network at the given node positions.
///
/// `positions` is indexed by node, as returned by
/// [`spring_layout`](crate::network::spring_layout).
pub fn render_network(
    path: &Path,
    graph: &CollabGraph,
    ranking: &[RankedArtist],
    positions: &[(f64, f64)],
) -> Result<(), ChartError> {
    if graph.is_empty() {
        return Err(ChartError::Empty("the network has no artists"));
    }
    if positions.len() != graph.node_count() {
        return Err(ChartError::Draw(format!(
            "{} positions for {} artists",
            positions.len(),
            graph.node_count()
        )));
    }

    let metrics: HashMap<&str, &RankedArtist> =
        ranking.iter().map(|r| (r.artist.as_str(), r)).collect();
    let max_betweenness = ranking
        .iter()
        .map(|r| r.betweenness_centrality)
        .fold(0.0, f64::max);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Artist Collaboration Network (size = songs, color = betweenness)",
            ("sans-serif", 26).into_font(),
        )
        .margin(30)
        .build_cartesian_2d(-BOUND..BOUND, -BOUND..BOUND)?;

    chart.draw_series(graph.edges().map(|(a, b, collaboration)| {
        let width = collaboration.weight.min(6);
        PathElement::new(
            vec![positions[a], positions[b]],
            BLACK.mix(0.6).stroke_width(width),
        )
    }))?;

    let nodes: Vec<((f64, f64), i32, RGBColor)> = graph
        .artists()
        .enumerate()
        .map(|(node, artist)| {
            let (songs, betweenness) = metrics
                .get(artist)
                .map(|r| (r.song_count, r.betweenness_centrality))
                .unwrap_or((graph.song_count(artist), 0.0));
            let color = palette::plasma(palette::normalize(betweenness, max_betweenness));
            (positions[node], marker_radius(songs, 10.0), color)
        })
        .collect();

    chart.draw_series(
        nodes
            .iter()
            .map(|&(pos, radius, color)| Circle::new(pos, radius, color.mix(0.9).filled())),
    )?;
    chart.draw_series(
        nodes
            .iter()
            .map(|&(pos, radius, _)| Circle::new(pos, radius, BLACK.stroke_width(2))),
    )?;

    let label_style = TextStyle::from(("sans-serif", 12).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(
        graph
            .artists()
            .zip(&nodes)
            .map(|(artist, &(pos, _, _))| Text::new(artist.to_string(), pos, label_style.clone())),
    )?;

    root.present()?;
    Ok(())
}
