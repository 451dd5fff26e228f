use std::path::Path;

use plotters::{coord::Shift, prelude::*};

use super::ChartError;
use crate::{network::top_by_degree, types::RankedArtist, utils};

const SIZE: (u32, u32) = (1400, 1000);
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);

/// Two stacked horizontal bar charts: the top `limit` artists by betweenness
/// (ranking order) and by degree centrality.
pub fn render_top_bars(path: &Path, ranking: &[RankedArtist], limit: usize) -> Result<(), ChartError> {
    if ranking.is_empty() || limit == 0 {
        return Err(ChartError::Empty("the ranking has no artists"));
    }

    let by_betweenness: Vec<(&str, f64)> = ranking
        .iter()
        .take(limit)
        .map(|r| (r.artist.as_str(), r.betweenness_centrality))
        .collect();
    let by_degree: Vec<(&str, f64)> = top_by_degree(ranking, limit)
        .into_iter()
        .map(|r| (r.artist.as_str(), r.degree_centrality))
        .collect();

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically((SIZE.1 / 2) as i32);

    draw_panel(
        &upper,
        &format!("Top {} Bridge Artists (Betweenness Centrality)", by_betweenness.len()),
        "Betweenness Centrality Score",
        &by_betweenness,
        SKY_BLUE,
    )?;
    draw_panel(
        &lower,
        &format!("Top {} Most Collaborative Artists (Degree Centrality)", by_degree.len()),
        "Degree Centrality Score",
        &by_degree,
        LIGHT_CORAL,
    )?;

    root.present()?;
    Ok(())
}

/// Rank 1 is drawn at the top: entry `i` sits at `y = n - 1 - i`.
fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    title: &str,
    x_desc: &str,
    entries: &[(&str, f64)],
    color: RGBColor,
) -> Result<(), ChartError> {
    let n = entries.len();
    let max = entries.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let x_end = if max > 0.0 { max * 1.25 } else { 0.1 };

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(220)
        .build_cartesian_2d(0.0..x_end, -0.5..(n as f64 - 0.5))?;

    let label = |y: &f64| -> String {
        let slot = y.round();
        if (y - slot).abs() > 1e-6 || slot < 0.0 || slot >= n as f64 {
            return String::new();
        }
        let rank = n - 1 - slot as usize;
        entries[rank].0.to_string()
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&label)
        .x_desc(x_desc)
        .draw()?;

    chart.draw_series(entries.iter().enumerate().map(|(rank, &(_, value))| {
        let y = (n - 1 - rank) as f64;
        Rectangle::new([(0.0, y - 0.35), (value, y + 0.35)], color.mix(0.7).filled())
    }))?;

    chart.draw_series(entries.iter().enumerate().map(|(rank, &(_, value))| {
        let y = (n - 1 - rank) as f64;
        EmptyElement::at((value, y))
            + Text::new(utils::format_score(value), (5, -6), ("sans-serif", 12).into_font())
    }))?;

    Ok(())
}
