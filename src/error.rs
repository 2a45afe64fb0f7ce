//! Error kinds for the scrobbler.
//!
//! Low-level I/O and parsing failures are converted into one of these kinds
//! at the boundary where they occur; the CLI layer decides how to present
//! them to the user.

use thiserror::Error;

/// A convenient Result type alias used throughout the application.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The config directory or file could not be created or written.
    #[error("failed to write config: {0}")]
    ConfigIo(String),

    /// The config file exists but could not be read or parsed as JSON.
    #[error("failed to read config: {0}")]
    ConfigRead(String),

    /// Token or session acquisition against the Last.fm API failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A scrobble submission failed at the network or HTTP level.
    #[error("scrobble failed: {0}")]
    Scrobble(String),

    /// The cmus status input did not have the expected shape.
    #[error("malformed cmus status: {0}")]
    Status(String),

    /// An HTTP request could not be performed at all.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
