use std::{
    collections::{HashMap, hash_map::Entry},
    fs,
    path::Path,
};

use log::debug;

use crate::{error::Result, types::MoodEntry, warning};

/// Case-insensitive lookup table from mood name to [`MoodEntry`].
#[derive(Debug, Clone, Default)]
pub struct MoodManager {
    moods: HashMap<String, MoodEntry>,
}

impl MoodManager {
    /// Builds the table from raw mood names.
    ///
    /// Names that only differ by case collide; an already lower-case name
    /// wins, otherwise the alphabetically first spelling does.
    pub fn new(moods: HashMap<String, MoodEntry>) -> Self {
        let mut named: Vec<(String, MoodEntry)> = moods.into_iter().collect();
        named.sort_by_cached_key(|(name, _)| (normalize(name) != *name, name.clone()));

        let mut table = HashMap::with_capacity(named.len());
        for (name, entry) in named {
            match table.entry(normalize(&name)) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                Entry::Occupied(slot) => {
                    debug!("Ignoring mood '{}', '{}' is already defined", name, slot.key());
                }
            }
        }

        MoodManager { moods: table }
    }

    /// Reads and parses a moods file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let moods: HashMap<String, MoodEntry> = serde_json::from_str(content)?;
        Ok(Self::new(moods))
    }

    pub fn get(&self, mood: &str) -> Option<&MoodEntry> {
        self.moods.get(&normalize(mood))
    }

    pub fn count(&self) -> usize {
        self.moods.len()
    }

    /// Mood names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.moods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Resolves a mood against the moods file at `path`.
///
/// A missing or unreadable file is reported as a warning and treated like an
/// unknown mood, so the caller always falls back to asking for a genre.
pub fn resolve_mood(path: &Path, mood: &str) -> Option<MoodEntry> {
    let manager = match MoodManager::load(path) {
        Ok(m) => m,
        Err(e) => {
            if path.exists() {
                warning!("Failed to read moods file {}: {}", path.display(), e);
            } else {
                warning!("Moods file not found at {}!", path.display());
            }
            return None;
        }
    };

    debug!("Loaded {} moods from {}", manager.count(), path.display());
    manager.get(mood).cloned()
}

fn normalize(mood: &str) -> String {
    mood.trim().to_lowercase()
}
