//! # CLI Module
//!
//! The user-facing layer of VibeCheck. It asks for a mood (and, when the mood
//! is unknown, a genre and a track count), delegates to the mood table and the
//! Spotify clients, and renders the recommended tracks as text.
//!
//! ```text
//! CLI Layer (prompts, rendering)
//!     ↓
//! Management Layer (mood table)
//!     ↓
//! API Layer (Spotify Integration)
//! ```
//!
//! The flow is generic over its input and output streams so it can be driven
//! from stdin/stdout in the binary and from in-memory buffers in tests.
//!
//! ## Usage
//!
//! ```bash
//! vibecheck                          # Interactive mood prompt
//! vibecheck --moods ./my-moods.json  # Use a custom moods file
//! vibecheck completions zsh          # Shell completions
//! ```

mod prompt;
mod recommend;

pub use prompt::DEFAULT_LIMIT;
pub use prompt::parse_limit;
pub use recommend::recommend;
pub use recommend::render_tracks;
