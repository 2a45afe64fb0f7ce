use std::collections::BTreeMap;

use crate::{
    error::{Error, Result},
    lastfm::{LastfmClient, sig},
    types::{Credentials, Track},
    utils,
};

impl LastfmClient {
    /// Submits a signed `track.scrobble` for the given track.
    ///
    /// Builds the parameter set from the track's artist, title and album,
    /// the current Unix time, the API key and the session key, signs it and
    /// POSTs it form-encoded to the API endpoint. Success is judged on the
    /// HTTP status alone; the response body is not checked against the
    /// track.scrobble ack schema.
    pub async fn scrobble(&self, creds: &Credentials, track: &Track) -> Result<()> {
        let mut params = BTreeMap::new();
        params.insert("method", "track.scrobble".to_string());
        params.insert("artist", track.artist.clone());
        params.insert("track", track.title.clone());
        params.insert("timestamp", utils::scrobble_timestamp());
        params.insert("album", track.album.clone());
        params.insert("api_key", creds.api_key.clone());
        params.insert("sk", creds.session_key.clone());

        let api_sig = sig::api_signature(&params, &creds.secret_key);
        params.insert("api_sig", api_sig);

        let res = self.http.post(&self.api_url).form(&params).send().await?;
        if !res.status().is_success() {
            return Err(Error::Scrobble(format!(
                "track.scrobble returned HTTP {}",
                res.status()
            )));
        }

        Ok(())
    }
}
