use std::path::{Path, PathBuf};

use tabled::Table;

use crate::{
    charts, dataset, error, info,
    network::{self, CollabGraph, LayoutConfig, WeightMode},
    success,
    types::{RankedArtist, RankingTableRow},
    utils, warning,
};

pub const RANKING_FILE: &str = "artist_network_analysis.csv";

/// Settings of the `analyze` command.
#[derive(Debug, Clone)]
pub struct AnalyzeSettings {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub weight_mode: WeightMode,
    pub top: usize,
    pub charts: bool,
    pub layout: LayoutConfig,
}

/// Builds the collaboration network from the track table, ranks the artists
/// and writes the ranking table and charts into `settings.out_dir`.
///
/// An unreadable track table or an unwritable ranking file ends the program.
/// Chart failures are only reported.
pub fn analyze(settings: &AnalyzeSettings) {
    info!("Loading tracks from {}", settings.input.display());
    let tracks = match dataset::read_tracks(&settings.input) {
        Ok(tracks) => tracks,
        Err(e) => error!("Cannot read {}: {}", settings.input.display(), e),
    };
    success!("Loaded {} tracks", tracks.len());

    info!("Building artist collaboration network...");
    let graph = CollabGraph::from_tracks(&tracks);
    info!(
        "Network has {} artists and {} collaborations",
        graph.node_count(),
        graph.edge_count()
    );

    info!("Calculating artist importance metrics...");
    let ranking = network::rank(&graph, settings.weight_mode);

    if let Err(e) = std::fs::create_dir_all(&settings.out_dir) {
        error!("Cannot create {}: {}", settings.out_dir.display(), e);
    }
    let ranking_path = settings.out_dir.join(RANKING_FILE);
    match dataset::write_ranking(&ranking_path, &ranking) {
        Ok(_) => success!(
            "{} - {} artists with importance metrics",
            ranking_path.display(),
            ranking.len()
        ),
        Err(e) => error!("Failed to write {}: {}", ranking_path.display(), e),
    }

    if graph.is_empty() {
        warning!("No collaborations found, nothing to rank or draw");
        return;
    }

    print_top(&ranking, settings.top);

    if settings.charts {
        render_charts(&graph, &ranking, settings);
    }

    print_findings(&graph, &ranking, tracks.len());
}

fn print_top(ranking: &[RankedArtist], top: usize) {
    let rows: Vec<RankingTableRow> = ranking
        .iter()
        .take(top)
        .enumerate()
        .map(|(i, r)| RankingTableRow {
            rank: i + 1,
            artist: r.artist.clone(),
            centrality: utils::format_score(r.betweenness_centrality),
            songs: r.song_count,
            collaborators: r.number_of_collaborators,
        })
        .collect();

    println!(
        "\nTop {} artists by betweenness centrality (network bridges)\n{}\n",
        rows.len(),
        Table::new(rows)
    );
}

fn render_charts(graph: &CollabGraph, ranking: &[RankedArtist], settings: &AnalyzeSettings) {
    info!("Creating visualizations...");
    let positions = network::spring_layout(graph, &settings.layout);

    let network_path = settings.out_dir.join(charts::NETWORK_CHART);
    report_chart(
        &network_path,
        charts::render_network(&network_path, graph, ranking, &positions),
    );

    let scatter_path = settings.out_dir.join(charts::SCATTER_CHART);
    report_chart(&scatter_path, charts::render_scatter(&scatter_path, ranking));

    let bars_path = settings.out_dir.join(charts::BAR_CHART);
    report_chart(
        &bars_path,
        charts::render_top_bars(&bars_path, ranking, settings.top),
    );
}

fn report_chart(path: &Path, result: Result<(), charts::ChartError>) {
    match result {
        Ok(_) => success!("{}", path.display()),
        Err(e) => warning!("Could not render {}: {}", path.display(), e),
    }
}

fn print_findings(graph: &CollabGraph, ranking: &[RankedArtist], track_count: usize) {
    let Some(connector) = ranking.first() else {
        return;
    };

    println!();
    info!("{} is the most important connector", connector.artist);
    println!(
        "      Betweenness centrality: {}",
        utils::format_score(connector.betweenness_centrality)
    );
    println!("      Appears in {} songs", connector.song_count);
    println!(
        "      Collaborates with {} artists",
        connector.number_of_collaborators
    );

    info!("Network statistics");
    println!("      {} total artists analyzed", graph.node_count());
    println!("      {} collaboration relationships", graph.edge_count());
    println!("      {} songs from the collected playlists", track_count);
}
