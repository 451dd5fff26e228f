use std::path::Path;

use plotters::prelude::*;

use super::{ChartError, marker_radius, palette};
use crate::types::RankedArtist;

const SIZE: (u32, u32) = (1200, 800);

/// Degree centrality (x) against betweenness (y), one labelled point per
/// artist.
pub fn render_scatter(path: &Path, ranking: &[RankedArtist]) -> Result<(), ChartError> {
    if ranking.is_empty() {
        return Err(ChartError::Empty("the ranking has no artists"));
    }

    let max_degree = ranking
        .iter()
        .map(|r| r.degree_centrality)
        .fold(0.0, f64::max);
    let max_betweenness = ranking
        .iter()
        .map(|r| r.betweenness_centrality)
        .fold(0.0, f64::max);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Artist Importance: Collaboration vs Bridge Roles (size = songs)",
            ("sans-serif", 22).into_font(),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..axis_end(max_degree), 0.0..axis_end(max_betweenness))?;

    chart
        .configure_mesh()
        .x_desc("Degree Centrality (Number of Collaborators)")
        .y_desc("Betweenness Centrality (Bridge Importance)")
        .draw()?;

    chart.draw_series(ranking.iter().map(|r| {
        let color = palette::viridis(palette::normalize(r.betweenness_centrality, max_betweenness));
        EmptyElement::at((r.degree_centrality, r.betweenness_centrality))
            + Circle::new((0, 0), marker_radius(r.song_count, 4.0), color.mix(0.7).filled())
            + Text::new(r.artist.clone(), (8, -12), ("sans-serif", 10).into_font())
    }))?;

    root.present()?;
    Ok(())
}

/// Upper axis bound with headroom for labels; a flat series still gets a
/// visible range.
fn axis_end(max: f64) -> f64 {
    if max > 0.0 { max * 1.15 } else { 0.1 }
}
