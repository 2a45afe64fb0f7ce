use serde::{Deserialize, Serialize};

/// The credential record persisted in the per-user config file.
///
/// All fields default to the empty string, which means "unset". `api_key` and
/// `secret_key` must be non-empty before any signed request is attempted;
/// `session_key` is filled in by the authentication flow once the user has
/// authorized the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub session_key: String,
    #[serde(default)]
    pub api_token: String,
}

impl Credentials {
    /// Whether the API key pair needed for signed requests is present.
    pub fn has_api_keys(&self) -> bool {
        !self.api_key.is_empty() && !self.secret_key.is_empty()
    }
}

/// A partial update applied to the persisted [`Credentials`].
///
/// Only fields set to `Some` are written; everything else keeps its value
/// from the loaded record.
#[derive(Debug, Clone, Default)]
pub struct CredentialUpdate {
    pub api_key: Option<String>,
    pub secret_key: Option<String>,
    pub session_key: Option<String>,
    pub api_token: Option<String>,
}

impl CredentialUpdate {
    pub fn apply(self, creds: &mut Credentials) {
        if let Some(api_key) = self.api_key {
            creds.api_key = api_key;
        }
        if let Some(secret_key) = self.secret_key {
            creds.secret_key = secret_key;
        }
        if let Some(session_key) = self.session_key {
            creds.session_key = session_key;
        }
        if let Some(api_token) = self.api_token {
            creds.api_token = api_token;
        }
    }
}

/// One playing track, as reported by cmus for a single invocation.
///
/// Only `artist`, `title` and `album` are used by the submission step; the
/// remaining fields are retained for potential future use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub filepath: String,
    pub artist: String,
    pub album_artist: String,
    pub album: String,
    pub track_number: String,
    pub title: String,
    pub date: String,
    pub duration: String,
}

/// XML body of an `auth.getToken` response (`<lfm><token>…</token></lfm>`).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: Option<String>,
}

/// XML body of an `auth.getSession` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub session: Option<Session>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub name: String,
    pub key: String,
}
