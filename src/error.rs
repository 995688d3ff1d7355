use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while configuring the client or talking to Spotify.
///
/// Status-carrying variants keep the HTTP status that the API answered with so
/// callers can report it or decide whether the failure is recoverable.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Couldn't get access token: {status}")]
    Auth { status: StatusCode },

    #[error("Failed to get recommendations: {status}")]
    Recommendation { status: StatusCode },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse data, error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status attached to the error, if the API answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Auth { status } | Error::Recommendation { status } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
