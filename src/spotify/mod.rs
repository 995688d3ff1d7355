//! # Spotify Integration Module
//!
//! This module is the integration layer between VibeCheck and the Spotify Web
//! API. Every call is a single blocking request/response exchange made with
//! `reqwest::blocking`; nothing is cached, retried or run in parallel.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (prompts, rendering)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (Client Credentials)
//!     ├── Artist Search (seed resolution)
//!     └── Recommendations (genre / artist seeds)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Exchanges the application's client id and secret for a bearer
//!   token using the client credentials grant.
//! - [`search`] - Resolves free text to the id of the best matching artist.
//! - [`recommendations`] - Chooses the request seed and fetches recommended
//!   tracks.
//! - [`genres`] - The seed genres the recommendation endpoint accepts.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client credentials token exchange
//! - `GET /search?type=artist` - Artist lookup for artist seeds
//! - `GET /recommendations` - Track recommendations
//!
//! ## Error Types
//!
//! All functions return [`crate::Result`]. A non-success status from the token
//! endpoint becomes [`crate::Error::Auth`], one from the recommendation
//! endpoint becomes [`crate::Error::Recommendation`]; transport failures are
//! wrapped in [`crate::Error::Http`].

pub mod auth;
pub mod genres;
pub mod recommendations;
pub mod search;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while a request is in flight.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
