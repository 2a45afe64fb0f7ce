use std::collections::BTreeMap;

use crate::{
    config::CredentialStore,
    error::{Error, Result},
    info,
    lastfm::{LastfmClient, sig},
    types::{CredentialUpdate, Credentials, SessionResponse, TokenResponse},
    warning,
};

/// The interactive web-authorization step, isolated behind a trait so a
/// non-interactive implementation can stand in during automated runs.
pub trait Authorizer {
    /// Directs the user to `auth_url` and blocks until they confirm that
    /// they have approved access.
    fn authorize(&self, auth_url: &str) -> Result<()>;
}

/// Default [`Authorizer`]: opens the URL in the default browser and waits
/// for Enter on stdin.
pub struct BrowserPrompt;

impl Authorizer for BrowserPrompt {
    fn authorize(&self, auth_url: &str) -> Result<()> {
        if webbrowser::open(auth_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                auth_url
            );
        } else {
            info!("Opened the Last.fm authorization page in your browser.");
        }

        info!("Authorize the application there, then press Enter to continue...");
        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .map_err(|e| Error::Auth(format!("failed to read confirmation: {}", e)))?;
        Ok(())
    }
}

/// Ensures a valid session key exists, running the full authorization flow
/// when none is stored yet.
///
/// With a persisted session key this is a no-op that returns the stored key.
/// Otherwise the flow walks through token request, interactive web
/// authorization and session exchange, persists the obtained key (partial
/// update, only `session_key` is written) and returns it. The short-lived
/// token never touches the credential file.
///
/// Fails with `Error::Auth` when the API key pair is missing, when any of
/// the two API calls errors, or when a response lacks the expected field.
/// The flow is not retried within one run.
pub async fn ensure_session(
    client: &LastfmClient,
    store: &CredentialStore,
    creds: &Credentials,
    authorizer: &dyn Authorizer,
) -> Result<String> {
    if !creds.session_key.is_empty() {
        // TODO validate the stored key with a cheap authenticated call so a
        // revoked authorization is caught here instead of at scrobble time.
        return Ok(creds.session_key.clone());
    }

    if !creds.has_api_keys() {
        return Err(Error::Auth(
            "api_key and secret_key are not set, run `scroblcli --config <API_KEY> <API_SECRET_KEY>` first".to_string(),
        ));
    }

    let token = client.get_token(&creds.api_key, &creds.secret_key).await?;

    let auth_url = client.authorize_url(&creds.api_key, &token);
    authorizer.authorize(&auth_url)?;

    let session_key = client
        .get_session(&creds.api_key, &creds.secret_key, &token)
        .await?;

    store
        .update(CredentialUpdate {
            session_key: Some(session_key.clone()),
            ..Default::default()
        })
        .await?;

    Ok(session_key)
}

impl LastfmClient {
    /// Requests an unauthenticated token via `auth.getToken`.
    pub async fn get_token(&self, api_key: &str, secret_key: &str) -> Result<String> {
        let mut params = BTreeMap::new();
        params.insert("method", "auth.gettoken".to_string());
        params.insert("api_key", api_key.to_string());
        let api_sig = sig::api_signature(&params, secret_key);
        params.insert("api_sig", api_sig);

        let res = self.http.get(&self.api_url).query(&params).send().await?;
        if !res.status().is_success() {
            return Err(Error::Auth(format!(
                "auth.getToken returned HTTP {}",
                res.status()
            )));
        }

        let body = res.text().await?;
        let parsed: TokenResponse = quick_xml::de::from_str(&body)
            .map_err(|e| Error::Auth(format!("unparseable auth.getToken response: {}", e)))?;

        parsed
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Auth("no token in auth.getToken response".to_string()))
    }

    /// Exchanges an authorized token for a session key via `auth.getSession`.
    pub async fn get_session(
        &self,
        api_key: &str,
        secret_key: &str,
        token: &str,
    ) -> Result<String> {
        let mut params = BTreeMap::new();
        params.insert("method", "auth.getSession".to_string());
        params.insert("api_key", api_key.to_string());
        params.insert("token", token.to_string());
        let api_sig = sig::api_signature(&params, secret_key);
        params.insert("api_sig", api_sig);

        let res = self.http.get(&self.api_url).query(&params).send().await?;
        if !res.status().is_success() {
            return Err(Error::Auth(format!(
                "auth.getSession returned HTTP {}",
                res.status()
            )));
        }

        let body = res.text().await?;
        let parsed: SessionResponse = quick_xml::de::from_str(&body)
            .map_err(|e| Error::Auth(format!("unparseable auth.getSession response: {}", e)))?;

        parsed
            .session
            .map(|s| s.key)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Auth("no session key in auth.getSession response".to_string()))
    }
}
