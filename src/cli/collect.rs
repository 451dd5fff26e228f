use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::time::sleep;

use crate::{
    dataset, error, info,
    management::TokenManager,
    spotify, success,
    types::{AudioFeatures, TrackRecord},
    utils, warning,
};

/// Settings of the `collect` command.
#[derive(Debug, Clone)]
pub struct CollectSettings {
    pub playlists: Vec<String>,
    pub output: PathBuf,
    pub batch_size: usize,
    pub delay: Duration,
}

/// Collects playlist tracks and audio features and writes the track table.
///
/// # Behaviour
///
/// 1. Each playlist is fetched in order; a failing playlist is reported and
///    contributes no tracks
/// 2. Zero tracks in total ends the program
/// 3. Audio features are requested in batches with a pause after every
///    successful batch; failing batches are reported and skipped
/// 4. Tracks are joined with their features and incomplete rows dropped
/// 5. The table is written to `settings.output`
pub async fn collect(settings: &CollectSettings) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => error!(
            "Failed to load token. Please run collabnet auth\n Error: {}",
            e
        ),
    };
    let client = Client::new();

    info!("Collecting playlist tracks...");
    let records = fetch_playlists(&client, &mut token_mgr, &settings.playlists).await;

    if records.is_empty() {
        error!("No tracks collected. Exiting.");
    }
    success!("Collected {} tracks", records.len());

    let track_ids: Vec<String> = records.iter().map(|r| r.track_id.clone()).collect();
    let features = fetch_audio_features(
        &client,
        &mut token_mgr,
        &track_ids,
        settings.batch_size,
        settings.delay,
    )
    .await;
    if features.is_empty() {
        warning!("No audio features were fetched");
    } else {
        success!("Fetched audio features for {} tracks", features.len());
    }

    let rows = dataset::merge_audio_features(records, features);
    let cleanup = dataset::drop_incomplete(rows);
    if cleanup.features_available {
        info!(
            "{} tracks after cleaning audio features (dropped {})",
            cleanup.rows.len(),
            cleanup.dropped
        );
    } else {
        warning!("No audio features available, keeping all tracks");
    }

    match dataset::write_tracks(&settings.output, &cleanup.rows) {
        Ok(_) => success!("Data saved to {}", settings.output.display()),
        Err(e) => error!("Failed to write {}: {}", settings.output.display(), e),
    }
}

/// Fetches every playlist in order. A playlist that fails is reported and
/// contributes no tracks.
pub async fn fetch_playlists(
    client: &Client,
    token_mgr: &mut TokenManager,
    playlists: &[String],
) -> Vec<TrackRecord> {
    let mut records: Vec<TrackRecord> = Vec::new();
    for playlist_id in playlists {
        let token = token_mgr.get_valid_token().await;
        match spotify::playlists::get_playlist_tracks(client, &token, playlist_id).await {
            Ok(tracks) => {
                info!("Playlist {}: {} tracks", playlist_id, tracks.len());
                records.extend(tracks);
            }
            Err(e) => warning!("Could not fetch playlist {}: {}", playlist_id, e),
        }
    }
    records
}

/// Fetches audio features in batches of `batch_size` ids, pausing for
/// `delay` after every successful batch. A failing batch is reported and
/// skipped.
pub async fn fetch_audio_features(
    client: &Client,
    token_mgr: &mut TokenManager,
    track_ids: &[String],
    batch_size: usize,
    delay: Duration,
) -> Vec<AudioFeatures> {
    let batch_size = batch_size.max(1);
    let total = utils::batch_count(track_ids.len(), batch_size);

    let pb = ProgressBar::new(total as u64);
    pb.set_message("Fetching audio features...");
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30.cyan/blue}] {pos}/{len}") {
        pb.set_style(style.progress_chars("=> ").tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let mut features = Vec::new();
    for (i, batch) in track_ids.chunks(batch_size).enumerate() {
        let token = token_mgr.get_valid_token().await;
        match spotify::features::get_audio_features(client, &token, batch).await {
            Ok(batch_features) => {
                features.extend(batch_features);
                sleep(delay).await;
            }
            Err(e) => pb.suspend(|| {
                warning!("Failed to fetch audio features for batch {}/{}: {}", i + 1, total, e)
            }),
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    features
}
