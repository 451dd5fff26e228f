//! Artist Collaboration Network Library
//!
//! This library collects playlist tracks and their audio features from the
//! Spotify Web API, stores them as a CSV track table, and turns that table into
//! an artist collaboration graph ranked by centrality.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local OAuth callback server
//! - `charts` - SVG rendering of the network, scatter and bar charts
//! - `cli` - Command implementations (`auth`, `collect`, `analyze`)
//! - `config` - Configuration from environment variables and `.env`
//! - `dataset` - CSV track and ranking tables, artist list codec
//! - `management` - Token cache management
//! - `network` - Collaboration graph, centrality and layout
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures shared across modules
//! - `utils` - Small helpers
//!
//! # Example
//!
//! ```
//! use collabnet::{dataset, network};
//!
//! let tracks = dataset::read_tracks("spotify_song_analysis.csv".as_ref())?;
//! let graph = network::CollabGraph::from_tracks(&tracks);
//! let ranking = network::rank(&graph, network::WeightMode::Distance);
//! ```

pub mod api;
pub mod charts;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod management;
pub mod network;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Boxed dynamic error with Send + Sync bounds so it can cross the tokio
/// runtime boundary.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Collecting playlist tracks...");
/// info!("Playlist {}: {} tracks", id, count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal conditions: the process terminates with exit code 1 right
/// after the message is printed.
///
/// # Example
///
/// ```
/// error!("No tracks collected. Exiting.");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for skipped units of work (a playlist, a feature batch, a chart) that
/// do not stop the run.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
