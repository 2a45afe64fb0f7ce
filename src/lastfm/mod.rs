//! # Last.fm Integration Module
//!
//! This module implements the subset of the Last.fm Web API the scrobbler
//! needs: request signing, the one-time session acquisition flow, and
//! scrobble submission. It is the integration layer between the CLI and
//! Last.fm's services, handling HTTP communication, response parsing and
//! error conversion.
//!
//! ## Core Modules
//!
//! - [`sig`] - Deterministic API signature over a request's parameters and
//!   the shared secret
//! - [`auth`] - Token request, interactive web authorization and session key
//!   exchange ([`ensure_session`] orchestrates the whole flow)
//! - [`scrobble`] - Signed `track.scrobble` submission
//!
//! ## Authentication Flow
//!
//! 1. **Token Request**: `auth.getToken` yields a short-lived, single-use
//!    token (held in memory only)
//! 2. **User Authorization**: the authorization page is opened in the user's
//!    browser and the flow blocks until the user confirms
//! 3. **Session Exchange**: `auth.getSession` trades the authorized token for
//!    a long-lived session key, which is persisted in the credential store
//!
//! The flow only runs when no session key is stored yet; an existing key is
//! reused as-is.
//!
//! ## Error Types
//!
//! All operations return the crate's [`Result`](crate::error::Result):
//! token/session failures map to `Error::Auth`, submission failures to
//! `Error::Scrobble`, and transport failures come through as `Error::Http`.

use reqwest::Client;

pub mod auth;
pub mod scrobble;
pub mod sig;

pub use auth::{Authorizer, BrowserPrompt, ensure_session};

/// Base endpoint for all Last.fm method calls.
const LASTFM_API_URL: &str = "http://ws.audioscrobbler.com/2.0/";

/// Web page where the user grants the application access to their account.
const LASTFM_AUTH_URL: &str = "https://www.last.fm/api/auth/";

/// HTTP client plus endpoint configuration, constructed once at startup.
///
/// Endpoints are plain fields rather than module globals so tests can point
/// the client at a local server.
pub struct LastfmClient {
    http: Client,
    api_url: String,
    auth_url: String,
}

impl LastfmClient {
    /// Creates a client against the production Last.fm endpoints.
    pub fn new() -> Self {
        Self::with_urls(LASTFM_API_URL.to_string(), LASTFM_AUTH_URL.to_string())
    }

    /// Creates a client against explicit endpoints.
    pub fn with_urls(api_url: String, auth_url: String) -> Self {
        LastfmClient {
            http: Client::new(),
            api_url,
            auth_url,
        }
    }

    /// The URL the user must visit to authorize a freshly issued token.
    pub fn authorize_url(&self, api_key: &str, token: &str) -> String {
        format!(
            "{auth_url}?api_key={api_key}&token={token}",
            auth_url = self.auth_url,
            api_key = api_key,
            token = token
        )
    }
}

impl Default for LastfmClient {
    fn default() -> Self {
        Self::new()
    }
}
