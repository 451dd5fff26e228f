//! # API Module
//!
//! HTTP endpoints of the short-lived local server started by `collabnet auth`.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives Spotify's OAuth redirect and exchanges the
//!   authorization code plus PKCE verifier for an access token
//! - [`health`] - Liveness probe returning status and crate version
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use collabnet::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
