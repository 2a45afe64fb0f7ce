use crate::{
    config::CredentialStore,
    error, info,
    lastfm::{BrowserPrompt, LastfmClient, ensure_session},
    success, utils,
};

/// Handles a cmus status report: extracts the playing track, ensures a
/// session key exists (running the interactive authorization flow on first
/// use) and submits the scrobble.
///
/// A non-playing status is an expected no-op. All failures are reported to
/// the user and terminate with exit code 1.
pub async fn scrobble(store: &CredentialStore, status: Vec<String>) {
    let mut creds = match store.load().await {
        Ok(creds) => creds,
        Err(e) => error!(
            "{}. Run `scroblcli --config <API_KEY> <API_SECRET_KEY>` first.",
            e
        ),
    };

    let track = match utils::track_from_status(&status) {
        Ok(Some(track)) => track,
        Ok(None) => {
            info!("Nothing playing, nothing to scrobble.");
            return;
        }
        Err(e) => error!("{}", e),
    };

    let client = LastfmClient::new();
    creds.session_key = match ensure_session(&client, store, &creds, &BrowserPrompt).await {
        Ok(session_key) => session_key,
        Err(e) => error!("{}", e),
    };

    match client.scrobble(&creds, &track).await {
        Ok(()) => success!("Scrobbled {} - {}", track.artist, track.title),
        Err(e) => error!("{}", e),
    }
}
