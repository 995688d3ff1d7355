/// Seed genres accepted by the recommendation endpoint.
pub const SUPPORTED_GENRES: [&str; 28] = [
    "acoustic",
    "afrobeat",
    "alt-rock",
    "ambient",
    "country",
    "dance",
    "deep-house",
    "disco",
    "edm",
    "electronic",
    "folk",
    "funk",
    "hip-hop",
    "indie",
    "jazz",
    "k-pop",
    "latin",
    "metal",
    "pop",
    "punk",
    "r-n-b",
    "reggae",
    "rock",
    "soul",
    "techno",
    "trance",
    "trap",
    "vocal",
];

/// Genres suggested to the user when a mood is not recognized.
pub const EXAMPLE_GENRES: [&str; 3] = ["pop", "rock", "hip-hop"];

pub fn is_supported(genre: &str) -> bool {
    let genre = genre.trim().to_lowercase();
    SUPPORTED_GENRES.contains(&genre.as_str())
}
