//! Credential persistence for the scrobbler.
//!
//! Credentials live in a single JSON object at a per-user config location:
//!
//! - Linux: `~/.config/scroblcli/config.json`
//! - macOS: `~/Library/Application Support/scroblcli/config.json`
//! - Windows: `%APPDATA%/scroblcli/config.json`
//!
//! The record is always read and rewritten wholesale; partial updates merge
//! the changed fields into the loaded record first. Writes go through a
//! temporary file followed by a rename so a crash mid-write cannot truncate
//! the config.

use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    types::{CredentialUpdate, Credentials},
};

/// Owns the on-disk credential record.
///
/// Constructed once at startup and passed by reference to the authenticator
/// and the CLI layer. The path is injectable so tests can point the store at
/// a temporary directory.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Creates a store rooted at the platform config directory.
    pub fn new() -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("scroblcli/config.json");
        CredentialStore { path }
    }

    /// Creates a store backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        CredentialStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted credential record.
    ///
    /// A missing, unreadable or corrupt file is reported as
    /// [`Error::ConfigRead`].
    pub async fn load(&self) -> Result<Credentials> {
        let content = async_fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::ConfigRead(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| Error::ConfigRead(e.to_string()))
    }

    /// Merges `update` into the persisted record and rewrites the file.
    ///
    /// When the file does not exist yet, a record with all fields defaulted
    /// to the empty string is created first, then the update is applied on
    /// top of it. Returns the record as persisted.
    pub async fn update(&self, update: CredentialUpdate) -> Result<Credentials> {
        if async_fs::metadata(&self.path).await.is_err() {
            self.save(&Credentials::default()).await?;
        }

        let mut creds = self.load().await?;
        update.apply(&mut creds);
        self.save(&creds).await?;
        Ok(creds)
    }

    /// Rewrites the whole record via temp file + rename.
    async fn save(&self, creds: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::ConfigIo(e.to_string()))?;
        }

        let json =
            serde_json::to_string_pretty(creds).map_err(|e| Error::ConfigIo(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        async_fs::write(&tmp, json)
            .await
            .map_err(|e| Error::ConfigIo(e.to_string()))?;
        async_fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| Error::ConfigIo(e.to_string()))
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
