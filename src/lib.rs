//! cmus → Last.fm Scrobbler CLI Library
//!
//! This library provides functionality for reporting the currently playing
//! cmus track to Last.fm. It includes modules for the Last.fm Web API client,
//! CLI operations, credential persistence, and status-line parsing.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Credential store backed by a per-user JSON file
//! - `error` - Error kinds and the crate-wide result alias
//! - `lastfm` - Last.fm Web API client (auth, signing, scrobbling)
//! - `types` - Data structures and type definitions
//! - `utils` - cmus status parsing and small helpers

pub mod cli;
pub mod config;
pub mod error;
pub mod lastfm;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Requesting authorization token...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully.
///
/// # Example
///
/// ```
/// success!("Scrobbled {} - {}", artist, title);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro terminates the process with exit code 1 immediately after
/// printing. It should only be used for fatal errors where recovery is not
/// possible.
///
/// # Example
///
/// ```
/// error!("Failed to update config: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important information that users should
/// notice without terminating the program.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser, navigate to the URL manually");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
