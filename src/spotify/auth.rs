use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use super::SpotifyError;
use crate::{
    config, error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
};

/// Runs the OAuth 2.0 Authorization Code flow with PKCE against Spotify.
///
/// 1. Generates the PKCE code verifier and its SHA256 challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the default browser
/// 4. Waits up to 60 seconds for the callback to deliver a token
/// 5. Persists the token for the `collect` command
///
/// # Arguments
///
/// * `shared_state` - State shared with the callback handler; carries the
///   verifier in and the token out
///
/// # Error Handling
///
/// - A missing client id, a timeout or a failed persist terminate the program
/// - A browser that cannot be opened only prints the URL for manual use
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &client_id,
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope().replace(' ', "%20")
    );

    // verifier must be in place before the browser can hit the callback
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_token(shared_state).await {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Polls the shared state once per second for up to 60 seconds.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|pkce| pkce.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a fresh access token.
///
/// Spotify may omit the refresh token in the response when it does not rotate
/// it; the previous one is kept in that case.
pub async fn refresh_token(refresh_token: &str) -> Result<Token, SpotifyError> {
    let client_id = config::spotify_client_id().map_err(SpotifyError::Config)?;

    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json::<TokenResponse>()
        .await?;

    Ok(into_token(res, refresh_token))
}

/// Exchanges an authorization code and the PKCE verifier for a token.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, SpotifyError> {
    let client_id = config::spotify_client_id().map_err(SpotifyError::Config)?;
    let redirect_uri = config::spotify_redirect_uri();

    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json::<TokenResponse>()
        .await?;

    Ok(into_token(res, ""))
}

fn into_token(res: TokenResponse, previous_refresh: &str) -> Token {
    Token {
        access_token: res.access_token,
        refresh_token: res
            .refresh_token
            .unwrap_or_else(|| previous_refresh.to_string()),
        scope: res.scope,
        expires_in: res.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    }
}
