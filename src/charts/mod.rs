//! # Charts Module
//!
//! SVG renderings of the analysis. Each chart function owns its drawing area
//! from creation to `present()`, nothing is shared between charts.
//!
//! - [`render_network`] - force-directed graph, node size by song count,
//!   node color by betweenness, every artist labelled
//! - [`render_scatter`] - degree vs. betweenness, point size by song count
//! - [`render_top_bars`] - top artists by betweenness and by degree

mod bars;
mod network;
pub mod palette;
mod scatter;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

pub use bars::render_top_bars;
pub use network::render_network;
pub use scatter::render_scatter;

pub const NETWORK_CHART: &str = "artist_collaboration_network.svg";
pub const SCATTER_CHART: &str = "centrality_scatter_plot.svg";
pub const BAR_CHART: &str = "top_artists_bar_charts.svg";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("nothing to draw: {0}")]
    Empty(&'static str),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(e.to_string())
    }
}

/// Marker radius for an artist, growing with the square root of its song
/// count so that area tracks the count.
fn marker_radius(song_count: u32, base: f64) -> i32 {
    (base * f64::from(song_count.max(1)).sqrt()).round().max(2.0) as i32
}
