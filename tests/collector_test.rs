use std::{collections::HashMap, sync::OnceLock, time::Duration};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use reqwest::Client;
use serde_json::{Value, json};

use collabnet::{
    cli::{fetch_audio_features, fetch_playlists},
    management::TokenManager,
    spotify::{features::get_audio_features, playlists::get_playlist_tracks},
    types::Token,
};

// Stands in for the Spotify Web API. Runs on its own thread for the whole test
// binary and is wired in through SPOTIFY_API_URL.
fn mock_api() -> &'static str {
    static BASE: OnceLock<String> = OnceLock::new();
    BASE.get_or_init(|| {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let app = Router::new()
            .route("/playlists/{id}/tracks", get(playlist_tracks))
            .route("/audio-features", get(audio_features))
            .with_state(base.clone());

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        // SAFETY: set once, before any request reads it
        unsafe { std::env::set_var("SPOTIFY_API_URL", &base) };
        base
    })
}

fn item(id: Option<&str>, name: &str, artists: &[&str]) -> Value {
    let artists: Vec<Value> = artists.iter().map(|a| json!({ "name": a })).collect();
    json!({ "track": { "id": id, "name": name, "artists": artists, "popularity": 10 } })
}

async fn playlist_tracks(
    State(base): State<String>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match (id.as_str(), params.get("offset").map(String::as_str)) {
        ("paged", None) => Json(json!({
            "items": [
                item(Some("t1"), "First", &["A", "B"]),
                { "track": null },
                item(Some("t2"), "Second", &["C"]),
            ],
            "next": format!("{base}/playlists/paged/tracks?offset=3"),
            "total": 5,
        }))
        .into_response(),
        ("paged", Some("3")) => Json(json!({
            "items": [
                item(None, "Local file", &["Z"]),
                item(Some("t4"), "Fourth", &["D", "E"]),
            ],
            "next": null,
            "total": 5,
        }))
        .into_response(),
        ("broken", _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn audio_features(Query(params): Query<HashMap<String, String>>) -> Response {
    let ids: Vec<&str> = params
        .get("ids")
        .map(|ids| ids.split(',').collect())
        .unwrap_or_default();

    if ids.iter().any(|id| id.starts_with("fail")) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let features: Vec<Value> = ids
        .iter()
        .map(|&id| match id {
            "t2" => Value::Null,
            _ => json!({ "id": id, "danceability": 0.5, "energy": 0.6, "valence": 0.7 }),
        })
        .collect();
    Json(json!({ "audio_features": features })).into_response()
}

fn fresh_tokens() -> TokenManager {
    TokenManager::new(Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: String::new(),
        expires_in: 3_600,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

// Local requests must not go through a proxy from the environment.
fn client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_playlist_pages_are_followed() {
    mock_api();
    let tracks = get_playlist_tracks(&client(), "access", "paged")
        .await
        .unwrap();

    let track_ids: Vec<&str> = tracks.iter().map(|t| t.track_id.as_str()).collect();
    assert_eq!(track_ids, vec!["t1", "t2", "t4"]);
    assert_eq!(tracks[0].artist, "A, B");
    assert_eq!(tracks[2].artists_list, ids(&["D", "E"]));
}

#[tokio::test]
async fn test_failing_playlist_is_an_error() {
    mock_api();
    assert!(
        get_playlist_tracks(&client(), "access", "broken")
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_failed_playlist_is_skipped() {
    mock_api();
    let mut tokens = fresh_tokens();
    let records = fetch_playlists(&client(), &mut tokens, &ids(&["broken", "paged", "gone"])).await;

    let track_ids: Vec<&str> = records.iter().map(|r| r.track_id.as_str()).collect();
    assert_eq!(track_ids, vec!["t1", "t2", "t4"]);
}

#[tokio::test]
async fn test_null_features_are_dropped() {
    mock_api();
    let features = get_audio_features(&client(), "access", &ids(&["t1", "t2", "t4"]))
        .await
        .unwrap();

    let feature_ids: Vec<&str> = features.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(feature_ids, vec!["t1", "t4"]);
    assert_eq!(features[0].valence, Some(0.7));
    assert_eq!(features[0].tempo, None);
}

#[tokio::test]
async fn test_failed_feature_batch_is_skipped() {
    mock_api();
    let mut tokens = fresh_tokens();
    let features = fetch_audio_features(
        &client(),
        &mut tokens,
        &ids(&["t1", "fail-1", "t2", "t4", "t5"]),
        2,
        Duration::ZERO,
    )
    .await;

    // batch 1 fails, t2 in batch 2 has no analysis
    let feature_ids: Vec<&str> = features.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(feature_ids, vec!["t4", "t5"]);
}
