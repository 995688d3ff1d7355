//! Configuration management for VibeCheck.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files and collects them into a [`Config`] that is
//! built once at startup and handed to the Spotify clients.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (endpoints and moods file location)

use std::{env, path::PathBuf};

use log::debug;

use crate::error::{Error, Result};

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
const API_URL_VAR: &str = "SPOTIFY_API_URL";
const MOODS_FILE_VAR: &str = "VIBECHECK_MOODS_FILE";

/// Loads environment variables from `.env` files.
///
/// Looks for `vibecheck/.env` in the platform-specific local data directory
/// first and then for a `.env` in the working directory. Neither file is
/// required; variables already present in the process environment are never
/// overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/vibecheck/.env`
/// - macOS: `~/Library/Application Support/vibecheck/.env`
/// - Windows: `%LOCALAPPDATA%/vibecheck/.env`
pub fn load_env() {
    let path = data_dir().join(".env");
    match dotenv::from_path(&path) {
        Ok(()) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No environment file at {}: {}", path.display(), e),
    }

    if let Ok(local) = dotenv::dotenv() {
        debug!("Loaded environment from {}", local.display());
    }
}

/// Directory holding the user's `.env` and `moods.json`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("vibecheck");
    path
}

/// Runtime configuration for a single VibeCheck run.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub api_url: String,
    pub moods_file: PathBuf,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `SPOTIFY_CLIENT_ID` or
    /// `SPOTIFY_CLIENT_SECRET` is missing or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let client_id = value(CLIENT_ID_VAR).ok_or_else(|| missing(CLIENT_ID_VAR))?;
        let client_secret = value(CLIENT_SECRET_VAR).ok_or_else(|| missing(CLIENT_SECRET_VAR))?;

        let token_url = value(TOKEN_URL_VAR).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        let api_url = value(API_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let moods_file = value(MOODS_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir().join("moods.json"));

        Ok(Config {
            client_id,
            client_secret,
            token_url,
            api_url,
            moods_file,
        })
    }

    /// Replaces the moods file location, e.g. from a command-line flag.
    pub fn with_moods_file(mut self, path: PathBuf) -> Self {
        self.moods_file = path;
        self
    }
}

fn missing(var: &str) -> Error {
    Error::Config(format!(
        "Missing Spotify Client ID or Secret ({} is not set). Check your .env file!",
        var
    ))
}
