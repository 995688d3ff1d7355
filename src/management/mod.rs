mod moods;

pub use moods::MoodManager;
pub use moods::resolve_mood;
