//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API the collector needs.
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 Authorization Code flow with PKCE: browser launch,
//!   local callback, code exchange and token refresh
//! - [`playlists`] - Playlist items with `next`-link pagination
//! - [`features`] - Batched audio feature lookups
//!
//! ## API Coverage
//!
//! - `GET /playlists/{id}/tracks` - playlist items, paginated
//! - `GET /audio-features?ids=...` - audio features for up to 100 ids
//! - `POST /api/token` - code exchange and refresh
//!
//! ## Error Handling
//!
//! Every call returns [`SpotifyError`]. Non-success HTTP statuses are turned
//! into errors with `error_for_status`. Nothing here retries; the caller
//! decides whether a failure skips a unit of work or ends the run.

pub mod auth;
pub mod features;
pub mod playlists;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
}
