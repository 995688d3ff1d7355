use log::debug;
use reqwest::blocking::Client;

use crate::{
    config::Config,
    error::{Error, Result},
    types::ArtistSearchResponse,
};

/// Looks up the Spotify id of the first artist matching `query`.
///
/// Returns `Ok(None)` when the search succeeds but finds nobody.
///
/// # Errors
///
/// - [`Error::Recommendation`] with the response status on a non-success reply
/// - [`Error::Http`] for network or decoding failures
pub fn find_artist_id(config: &Config, token: &str, query: &str) -> Result<Option<String>> {
    let url = format!("{}/search", config.api_url);
    debug!("Searching artist '{}' at {}", query, url);

    let client = Client::new();
    let res = client
        .get(&url)
        .bearer_auth(token)
        .query(&[("q", query), ("type", "artist"), ("limit", "1")])
        .send()?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::Recommendation { status });
    }

    let body: ArtistSearchResponse = res.json()?;
    Ok(body.artists.items.into_iter().next().map(|artist| {
        debug!("Resolved '{}' to artist {} ({})", query, artist.name, artist.id);
        artist.id
    }))
}
