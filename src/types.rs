use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer};

pub const DEFAULT_GENRE: &str = "pop";

fn default_genre() -> String {
    DEFAULT_GENRE.to_string()
}

// `"genre": null` counts as no genre.
fn genre_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_genre))
}

/// A single row of the moods file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoodEntry {
    #[serde(default = "default_genre", deserialize_with = "genre_or_default")]
    pub genre: String,
    /// Descriptive audio features (energy, valence, tempo, ...).
    #[serde(flatten)]
    pub features: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse {
    #[serde(default)]
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistsContainer {
    #[serde(default)]
    pub items: Vec<Artist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub tracks: Vec<RecommendedTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendedTrack {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

/// A recommended track, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artists: Vec<String>,
    pub url: String,
}

impl From<RecommendedTrack> for Track {
    fn from(t: RecommendedTrack) -> Track {
        Track {
            name: t.name,
            artists: t.artists.into_iter().map(|a| a.name).collect(),
            url: t.external_urls.spotify,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} → {}", self.name, self.artists.join(", "), self.url)
    }
}
