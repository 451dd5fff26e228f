use reqwest::Client;

use super::SpotifyError;
use crate::{
    config,
    types::{PlaylistItem, PlaylistItemsResponse, TrackRecord},
};

const PAGE_LIMIT: u32 = 100;

/// Retrieves every track of a playlist, following `next` links until the last
/// page.
///
/// Items without a track (removed or unavailable entries) and tracks without
/// an id (local files) are skipped.
///
/// # Errors
///
/// Any failing page fails the whole playlist; tracks from earlier pages are
/// not returned.
pub async fn get_playlist_tracks(
    client: &Client,
    token: &str,
    playlist_id: &str,
) -> Result<Vec<TrackRecord>, SpotifyError> {
    let mut url = format!(
        "{uri}/playlists/{playlist_id}/tracks?additional_types=track&market={market}&limit={limit}",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id,
        market = &config::market(),
        limit = PAGE_LIMIT,
    );
    let mut tracks = Vec::new();

    loop {
        let page = client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<PlaylistItemsResponse>()
            .await?;

        tracks.extend(page.items.into_iter().filter_map(track_record));

        match page.next {
            Some(next) => url = next,
            None => return Ok(tracks),
        }
    }
}

/// Converts one playlist item into a track record, or `None` when the item has
/// no usable track.
pub fn track_record(item: PlaylistItem) -> Option<TrackRecord> {
    let track = item.track?;
    let track_id = track.id.filter(|id| !id.is_empty())?;
    let artists_list: Vec<String> = track.artists.into_iter().map(|a| a.name).collect();

    Some(TrackRecord {
        song_name: track.name,
        artist: artists_list.join(", "),
        artists_list,
        track_id,
        popularity: track.popularity,
    })
}
