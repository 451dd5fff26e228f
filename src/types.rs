use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::dataset::artists_list;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Body of the `/api/token` endpoint. `refresh_token` is omitted by Spotify
/// when it does not rotate the refresh token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub popularity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioFeatures {
    pub id: String,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub key: Option<i64>,
    pub loudness: Option<f64>,
    pub mode: Option<i64>,
    pub speechiness: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub liveness: Option<f64>,
    pub valence: Option<f64>,
    pub tempo: Option<f64>,
    pub duration_ms: Option<i64>,
    pub time_signature: Option<i64>,
}

/// One playlist track as collected, before audio features are joined.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub song_name: String,
    pub artist: String,
    pub artists_list: Vec<String>,
    pub track_id: String,
    pub popularity: u32,
}

/// One row of the track table written by `collect`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackRow {
    pub song_name: String,
    pub artist: String,
    #[serde(serialize_with = "artists_list::serialize")]
    pub artists_list: Vec<String>,
    pub track_id: String,
    pub popularity: u32,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub key: Option<i64>,
    pub loudness: Option<f64>,
    pub mode: Option<i64>,
    pub speechiness: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub liveness: Option<f64>,
    pub valence: Option<f64>,
    pub tempo: Option<f64>,
    pub duration_ms: Option<i64>,
    pub time_signature: Option<i64>,
}

impl TrackRow {
    /// Left join of a track with its audio features; absent features leave
    /// every feature column null.
    pub fn new(record: TrackRecord, features: Option<&AudioFeatures>) -> Self {
        let f = features.cloned().unwrap_or_default();
        TrackRow {
            song_name: record.song_name,
            artist: record.artist,
            artists_list: record.artists_list,
            track_id: record.track_id,
            popularity: record.popularity,
            danceability: f.danceability,
            energy: f.energy,
            key: f.key,
            loudness: f.loudness,
            mode: f.mode,
            speechiness: f.speechiness,
            acousticness: f.acousticness,
            instrumentalness: f.instrumentalness,
            liveness: f.liveness,
            valence: f.valence,
            tempo: f.tempo,
            duration_ms: f.duration_ms,
            time_signature: f.time_signature,
        }
    }

    pub fn has_core_features(&self) -> bool {
        self.danceability.is_some() && self.energy.is_some() && self.valence.is_some()
    }
}

/// A track reduced to what the graph builder needs: its name and the resolved
/// artist credits.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditedTrack {
    pub song_name: String,
    pub artists: Vec<String>,
}

impl CreditedTrack {
    pub fn new(song_name: &str, artists: &[&str]) -> Self {
        CreditedTrack {
            song_name: song_name.to_string(),
            artists: artists.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// One row of the ranking table written by `analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedArtist {
    pub artist: String,
    pub song_count: u32,
    pub betweenness_centrality: f64,
    pub degree_centrality: f64,
    pub number_of_collaborators: usize,
}

#[derive(Tabled)]
pub struct RankingTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub artist: String,
    pub centrality: String,
    pub songs: u32,
    pub collaborators: usize,
}
