use std::io::{BufRead, Write};

use crate::{
    cli::prompt::{self, DEFAULT_LIMIT},
    config::Config,
    error::Result,
    management,
    spotify::{
        self, genres,
        recommendations::{self, Seed},
    },
    success,
    types::Track,
    warning,
};

/// Runs the interactive mood/genre flow and prints the recommendations.
///
/// Asks for a mood first. A known mood is turned into its genre and five
/// tracks are requested right away; otherwise the user is asked for a genre
/// and a track count. A genre the API does not accept is used as free text
/// for an artist search instead.
///
/// Prompts and results are written to `output`; warnings go to the console.
///
/// # Errors
///
/// Token exchange and recommendation failures are returned to the caller,
/// which treats them as fatal.
pub fn recommend<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "🎵 Welcome to VibeCheck! 🎵")?;
    writeln!(
        output,
        "You can pick a mood or a genre to get some song recommendations.\n"
    )?;

    let mood = prompt::ask(input, output, "Enter your mood: ")?.to_lowercase();
    let entry = management::resolve_mood(&config.moods_file, &mood);

    let token = {
        let pb = spotify::spinner("Requesting access token...");
        let token = spotify::auth::request_token(config);
        pb.finish_and_clear();
        token?
    };

    let (limit, seed) = match entry {
        Some(entry) => {
            writeln!(
                output,
                "\nFetching Spotify tracks for '{}' mood ({} genre)...",
                mood, entry.genre
            )?;
            let seed =
                recommendations::choose_seed(config, &token, Some(entry.genre.as_str()), None);
            (DEFAULT_LIMIT, seed)
        }
        None => {
            warning!("Mood '{}' not recognized. Let's try a genre instead.", mood);
            writeln!(
                output,
                "Example genres: {}",
                genres::EXAMPLE_GENRES.join(", ")
            )?;

            let genre = prompt::ask(input, output, "Enter a genre: ")?.to_lowercase();
            let limit = prompt::parse_limit(&prompt::ask(
                input,
                output,
                "How many tracks would you like to see? (default 5): ",
            )?);

            let seed = if genres::is_supported(&genre) {
                Seed::Genre(genre)
            } else {
                warning!(
                    "Genre '{}' not supported. Attempting artist radio fallback...",
                    genre
                );
                recommendations::choose_seed(config, &token, None, Some(genre.as_str()))
            };
            (limit, seed)
        }
    };

    let tracks = {
        let pb = spotify::spinner("Fetching recommendations...");
        let tracks = recommendations::fetch_recommendations(config, &token, limit, &seed);
        pb.finish_and_clear();
        tracks?
    };

    if !tracks.is_empty() {
        success!("Fetched {} tracks!", tracks.len());
    }

    render_tracks(output, &tracks)
}

/// Writes one line per track, or a hint when there is nothing to show.
pub fn render_tracks<W: Write>(output: &mut W, tracks: &[Track]) -> Result<()> {
    if tracks.is_empty() {
        writeln!(output, "⚠️ No tracks found. Try a different mood or genre!")?;
        return Ok(());
    }

    writeln!(output, "\n🎧 Here are your recommendations:")?;
    for track in tracks {
        writeln!(output, "- {}", track)?;
    }
    Ok(())
}
