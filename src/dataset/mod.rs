//! # Dataset Module
//!
//! File-format boundary of the pipeline. The collector writes the track table,
//! the analyzer reads it back and writes the ranking table. Both are CSV files
//! with a header row.
//!
//! ## Track table
//!
//! `song_name, artist, artists_list, track_id, popularity` followed by the
//! audio feature columns. `artists_list` is a JSON array of names, see
//! [`artists_list`] for the accepted read formats.
//!
//! ## Ranking table
//!
//! `artist, song_count, betweenness_centrality, degree_centrality,
//! number_of_collaborators`, sorted by betweenness descending.

pub mod artists_list;
mod ranking;
mod tracks;

use thiserror::Error;

pub use ranking::{RANKING_COLUMNS, read_ranking, write_ranking};
pub use tracks::{
    Cleanup, TRACK_COLUMNS, drop_incomplete, merge_audio_features, read_tracks, write_tracks,
};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed artist list {input:?}: {reason}")]
    ArtistList { input: String, reason: String },
}
