use std::fs;

use collabnet::charts;
use collabnet::network::{CollabGraph, LayoutConfig, WeightMode, rank, spring_layout};
use collabnet::types::CreditedTrack;
use tempfile::tempdir;

fn sample_graph() -> CollabGraph {
    CollabGraph::from_tracks(&[
        CreditedTrack::new("Intro", &["Ana", "Ben"]),
        CreditedTrack::new("Bridge", &["Ben", "Cleo", "Dre"]),
        CreditedTrack::new("Outro", &["Dre", "Eve"]),
        CreditedTrack::new("Solo", &["Ana"]),
    ])
}

fn assert_svg(path: &std::path::Path) {
    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("<svg"), "{} is not an svg", path.display());
}

#[test]
fn test_renders_all_charts() {
    let dir = tempdir().unwrap();
    let graph = sample_graph();
    let ranking = rank(&graph, WeightMode::Distance);
    let positions = spring_layout(
        &graph,
        &LayoutConfig {
            iterations: 100,
            ..LayoutConfig::default()
        },
    );

    let network = dir.path().join(charts::NETWORK_CHART);
    charts::render_network(&network, &graph, &ranking, &positions).unwrap();
    assert_svg(&network);

    let scatter = dir.path().join(charts::SCATTER_CHART);
    charts::render_scatter(&scatter, &ranking).unwrap();
    assert_svg(&scatter);

    let bars = dir.path().join(charts::BAR_CHART);
    charts::render_top_bars(&bars, &ranking, 3).unwrap();
    assert_svg(&bars);
}

#[test]
fn test_empty_inputs_are_rejected() {
    let dir = tempdir().unwrap();
    let empty = CollabGraph::new();

    assert!(charts::render_network(&dir.path().join("n.svg"), &empty, &[], &[]).is_err());
    assert!(charts::render_scatter(&dir.path().join("s.svg"), &[]).is_err());
    assert!(charts::render_top_bars(&dir.path().join("b.svg"), &[], 10).is_err());
}

#[test]
fn test_network_needs_a_position_per_node() {
    let dir = tempdir().unwrap();
    let graph = sample_graph();
    let ranking = rank(&graph, WeightMode::Distance);

    let result = charts::render_network(&dir.path().join("n.svg"), &graph, &ranking, &[(0.0, 0.0)]);
    assert!(result.is_err());
}

#[test]
fn test_palette_end_stops() {
    use charts::palette::{normalize, plasma, viridis};
    use plotters::style::RGBColor;

    assert_eq!(plasma(0.0), RGBColor(13, 8, 135));
    assert_eq!(plasma(1.0), RGBColor(240, 249, 33));
    assert_eq!(plasma(7.5), plasma(1.0));
    assert_eq!(viridis(f64::NAN), RGBColor(68, 1, 84));

    assert_eq!(normalize(0.3, 0.0), 0.0);
    assert_eq!(normalize(0.5, 1.0), 0.5);
}
