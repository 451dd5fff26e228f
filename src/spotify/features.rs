use reqwest::Client;

use super::SpotifyError;
use crate::{
    config,
    types::{AudioFeatures, AudioFeaturesResponse},
};

/// Fetches audio features for a batch of track ids.
///
/// Spotify answers with one entry per requested id and `null` for ids it has
/// no analysis for; those are left out of the result.
pub async fn get_audio_features(
    client: &Client,
    token: &str,
    track_ids: &[String],
) -> Result<Vec<AudioFeatures>, SpotifyError> {
    let api_url = format!("{uri}/audio-features", uri = &config::spotify_apiurl());

    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("ids", track_ids.join(","))])
        .send()
        .await?
        .error_for_status()?
        .json::<AudioFeaturesResponse>()
        .await?;

    Ok(res.audio_features.into_iter().flatten().collect())
}
