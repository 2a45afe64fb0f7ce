//! # CLI Module
//!
//! User-facing command implementations. The binary is invoked in one of two
//! modes: with the raw cmus status fields as positional arguments (the
//! scrobble path) or with `-c/--config` to persist the API key pair. Each
//! command talks to the credential store and the Last.fm client, handles
//! user feedback through the crate's logging macros, and decides the exit
//! behavior for failures.

mod config;
mod scrobble;

pub use config::update_config;
pub use scrobble::scrobble;
