use log::debug;
use reqwest::blocking::Client;

use crate::{
    config::Config,
    error::{Error, Result},
    info,
    spotify::{genres, search},
    types::{DEFAULT_GENRE, RecommendationsResponse, Track},
    warning,
};

/// What a recommendation request is seeded with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    Genre(String),
    Artist(String),
}

impl Seed {
    pub fn default_genre() -> Self {
        Seed::Genre(DEFAULT_GENRE.to_string())
    }
}

/// Query parameters for `GET /recommendations`.
pub fn query_params(limit: u32, seed: &Seed) -> Vec<(&'static str, String)> {
    let seed_param = match seed {
        Seed::Genre(genre) => ("seed_genres", genre.clone()),
        Seed::Artist(id) => ("seed_artists", id.clone()),
    };
    vec![("limit", limit.to_string()), seed_param]
}

/// Picks the seed for a recommendation request.
///
/// A supported genre always wins. Otherwise the artist seed text is searched
/// and the first match's id is used; an empty or failed search falls back to
/// the default genre with a warning, as does having neither input.
pub fn choose_seed(
    config: &Config,
    token: &str,
    genre: Option<&str>,
    artist_seed: Option<&str>,
) -> Seed {
    if let Some(genre) = genre.filter(|g| genres::is_supported(g)) {
        return Seed::Genre(genre.trim().to_lowercase());
    }

    let Some(artist) = artist_seed.map(str::trim).filter(|a| !a.is_empty()) else {
        return Seed::default_genre();
    };

    info!("Searching for artist '{}'...", artist);
    let found = match search::find_artist_id(config, token, artist) {
        Ok(found) => found,
        Err(e) => {
            debug!("Artist search for '{}' failed: {}", artist, e);
            None
        }
    };

    match found {
        Some(id) => Seed::Artist(id),
        None => {
            warning!(
                "Artist '{}' not found. Using default genre '{}'.",
                artist,
                DEFAULT_GENRE
            );
            Seed::default_genre()
        }
    }
}

/// Fetches recommended tracks for an already chosen seed.
///
/// Tracks are returned in the order the API lists them; an empty list is not
/// an error.
///
/// # Errors
///
/// - [`Error::Recommendation`] with the response status on a non-success reply
/// - [`Error::Http`] for network or decoding failures
pub fn fetch_recommendations(
    config: &Config,
    token: &str,
    limit: u32,
    seed: &Seed,
) -> Result<Vec<Track>> {
    let url = format!("{}/recommendations", config.api_url);
    let params = query_params(limit, seed);
    debug!("Requesting recommendations at {} with {:?}", url, params);

    let client = Client::new();
    let res = client.get(&url).bearer_auth(token).query(&params).send()?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::Recommendation { status });
    }

    let body: RecommendationsResponse = res.json()?;
    Ok(body.tracks.into_iter().map(Track::from).collect())
}

/// Chooses a seed from `genre` or `artist_seed` and fetches recommendations.
///
/// # Example
///
/// ```
/// let token = spotify::auth::request_token(&config)?;
/// let tracks = get_recommendations(&config, &token, 5, Some("rock"), None)?;
/// ```
pub fn get_recommendations(
    config: &Config,
    token: &str,
    limit: u32,
    genre: Option<&str>,
    artist_seed: Option<&str>,
) -> Result<Vec<Track>> {
    let seed = choose_seed(config, token, genre, artist_seed);
    fetch_recommendations(config, token, limit, &seed)
}
