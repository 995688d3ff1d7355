//! VibeCheck CLI Library
//!
//! This library turns a mood or genre typed by the user into a short list of
//! Spotify song recommendations. It includes modules for configuration, mood
//! resolution, Spotify Web API communication and the interactive prompt flow.
//!
//! # Modules
//!
//! - `cli` - Interactive prompt flow and result rendering
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every fallible operation
//! - `management` - Static lookup data such as the mood table
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use vibecheck::{cli, config};
//!
//! fn main() -> vibecheck::Result<()> {
//!     config::load_env();
//!     let config = config::Config::from_env()?;
//!     let stdin = std::io::stdin();
//!     cli::recommend(&config, &mut stdin.lock(), &mut std::io::stdout())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Requesting access token...");
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
/// # Example
///
/// ```
/// success!("Fetched {} tracks", count);
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
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// such as missing credentials or a rejected token exchange.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
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
/// Used for recoverable issues the user should notice, like an unknown mood
/// or an artist search that came back empty.
///
/// # Example
///
/// ```
/// warning!("Mood '{}' not recognized", mood);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
