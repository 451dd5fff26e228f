//! # CLI Module
//!
//! Command implementations behind the `collabnet` binary. Each command
//! coordinates the Spotify client, the dataset files and the network analysis,
//! and decides which failures are fatal.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth PKCE login, caches the token for `collect`
//! - [`collect`] - playlist tracks + audio features → track table
//! - [`analyze`] - track table → ranking table + charts
//!
//! ## Data Flow
//!
//! ```text
//! Spotify API ──collect──▶ spotify_song_analysis.csv ──analyze──▶ artist_network_analysis.csv
//!                                                               └─▶ *.svg charts
//! ```
//!
//! ## Error Handling
//!
//! - A failing playlist or feature batch is reported with `warning!` and
//!   skipped
//! - Zero collected tracks, an unreadable input or an unwritable output end
//!   the program through `error!`
//! - Chart failures never end the program

mod analyze;
mod auth;
mod collect;

pub use analyze::{AnalyzeSettings, RANKING_FILE, analyze};
pub use auth::auth;
pub use collect::{CollectSettings, collect, fetch_audio_features, fetch_playlists};
