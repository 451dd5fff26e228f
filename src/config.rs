//! Configuration management for collabnet.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Everything except the OAuth client id has
//! a default, so the offline `analyze` command runs without any configuration.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use crate::utils;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
const DEFAULT_SCOPE: &str = "playlist-read-private playlist-read-collaborative";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_MARKET: &str = "from_token";
const DEFAULT_PLAYLISTS: [&str; 2] = ["3yVJRNZfjUc0mnH7bsSlWZ", "2NkiBYytKAMFnmbLDbAdsa"];

/// Loads environment variables from `<data_local_dir>/collabnet/.env`.
///
/// Creates the directory if it doesn't exist. A missing `.env` file is not an
/// error; variables already present in the process environment win over the
/// file.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/collabnet/.env`
/// - macOS: `~/Library/Application Support/collabnet/.env`
/// - Windows: `%LOCALAPPDATA%/collabnet/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns `<data_local_dir>/collabnet`, falling back to `./collabnet`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("collabnet");
    path
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Address the local OAuth callback server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Spotify API client id (`SPOTIFY_API_AUTH_CLIENT_ID`).
///
/// # Errors
///
/// Returns an error message if the variable is unset or empty. Every command
/// that talks to Spotify needs it.
pub fn spotify_client_id() -> Result<String, String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| "SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string())
}

/// OAuth redirect URI (`SPOTIFY_API_REDIRECT_URI`). Must match the URI
/// registered for the Spotify application.
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// OAuth scope (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// OAuth authorization endpoint (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// OAuth token exchange endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Market sent with playlist requests (`COLLABNET_MARKET`).
pub fn market() -> String {
    var_or("COLLABNET_MARKET", DEFAULT_MARKET)
}

/// Playlist ids to collect (`COLLABNET_PLAYLISTS`, comma separated).
///
/// Order is preserved; it decides the row order of the track table.
pub fn playlists() -> Vec<String> {
    match env::var("COLLABNET_PLAYLISTS") {
        Ok(raw) if !utils::split_ids(&raw).is_empty() => utils::split_ids(&raw),
        _ => DEFAULT_PLAYLISTS.iter().map(|id| id.to_string()).collect(),
    }
}
