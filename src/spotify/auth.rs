use base64::{Engine, engine::general_purpose::STANDARD};
use log::debug;
use reqwest::{
    blocking::Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};

use crate::{
    config::Config,
    error::{Error, Result},
    types::TokenResponse,
};

/// Requests a fresh access token using the client credentials grant.
///
/// Sends the application's client id and secret as a basic auth header to the
/// configured token endpoint with the form body
/// `grant_type=client_credentials`. A token is requested on every call.
///
/// # Errors
///
/// - [`Error::Auth`] with the response status when Spotify rejects the exchange
/// - [`Error::Http`] for network failures or a body without `access_token`
///
/// # Example
///
/// ```
/// let config = Config::from_env()?;
/// let token = request_token(&config)?;
/// ```
pub fn request_token(config: &Config) -> Result<String> {
    let credentials = STANDARD.encode(format!("{}:{}", config.client_id, config.client_secret));

    debug!("Requesting access token from {}", config.token_url);
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .header(AUTHORIZATION, format!("Basic {}", credentials))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .form(&[("grant_type", "client_credentials")])
        .send()?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::Auth { status });
    }

    let body: TokenResponse = res.json()?;
    Ok(body.access_token)
}
