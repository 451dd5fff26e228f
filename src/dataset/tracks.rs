use std::{collections::HashMap, path::Path};

use serde::Deserialize;

use super::{DatasetError, artists_list};
use crate::types::{AudioFeatures, CreditedTrack, TrackRecord, TrackRow};

pub const TRACK_COLUMNS: [&str; 18] = [
    "song_name",
    "artist",
    "artists_list",
    "track_id",
    "popularity",
    "danceability",
    "energy",
    "key",
    "loudness",
    "mode",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "tempo",
    "duration_ms",
    "time_signature",
];

/// Columns of the track table the analyzer relies on. Every other column is
/// ignored on read, and `artists_list` may be missing entirely.
#[derive(Debug, Deserialize)]
struct SourceRow {
    song_name: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    artists_list: Option<String>,
}

/// Result of the post-join cleanup.
#[derive(Debug)]
pub struct Cleanup {
    pub rows: Vec<TrackRow>,
    pub dropped: usize,
    /// False when no row carried audio features, in which case nothing was
    /// dropped.
    pub features_available: bool,
}

/// Left-joins collected tracks with the fetched audio features on track id.
///
/// Track order and duplicates are preserved. When the same id was returned
/// more than once by the feature endpoint the first occurrence is used, so a
/// track never turns into several rows.
pub fn merge_audio_features(records: Vec<TrackRecord>, features: Vec<AudioFeatures>) -> Vec<TrackRow> {
    let mut by_id: HashMap<String, AudioFeatures> = HashMap::with_capacity(features.len());
    for feature in features {
        by_id.entry(feature.id.clone()).or_insert(feature);
    }

    records
        .into_iter()
        .map(|record| {
            let features = by_id.get(&record.track_id);
            TrackRow::new(record, features)
        })
        .collect()
}

/// Drops rows missing danceability, energy or valence.
///
/// Only applies when at least one row has danceability; a table without any
/// audio features is kept whole so the graph stage still has its input.
pub fn drop_incomplete(rows: Vec<TrackRow>) -> Cleanup {
    let features_available = rows.iter().any(|row| row.danceability.is_some());
    if !features_available {
        return Cleanup {
            rows,
            dropped: 0,
            features_available,
        };
    }

    let before = rows.len();
    let rows: Vec<TrackRow> = rows.into_iter().filter(TrackRow::has_core_features).collect();
    Cleanup {
        dropped: before - rows.len(),
        rows,
        features_available,
    }
}

pub fn write_tracks(path: &Path, rows: &[TrackRow]) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;
    if rows.is_empty() {
        writer.write_record(TRACK_COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads the track table and resolves each row's artist credits.
pub fn read_tracks(path: &Path) -> Result<Vec<CreditedTrack>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut tracks = Vec::new();

    for result in reader.deserialize::<SourceRow>() {
        let row = result?;
        let artists = artists_list::resolve(row.artists_list.as_deref(), &row.artist);
        tracks.push(CreditedTrack {
            song_name: row.song_name,
            artists,
        });
    }

    Ok(tracks)
}
