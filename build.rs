//! Build script for the VibeCheck CLI.
//!
//! Seeds the user's local data directory with the files the application looks
//! for at runtime: the `.env.example` configuration template and the bundled
//! `data/moods.json` mood table.
//!
//! # Destination Location
//!
//! - Linux: `~/.local/share/vibecheck/`
//! - macOS: `~/Library/Application Support/vibecheck/`
//! - Windows: `%LOCALAPPDATA%/vibecheck/`
//!
//! The template is always refreshed. An existing `moods.json` is left alone so
//! local edits survive rebuilds. Missing sources only produce a cargo warning.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");
    println!("cargo:rerun-if-changed=data/moods.json");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("vibecheck");
    fs::create_dir_all(&out_dir)?;

    let env_example_path = manifest_dir.join(".env.example");
    if env_example_path.is_file() {
        fs::copy(&env_example_path, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    let moods_path = manifest_dir.join("data").join("moods.json");
    let moods_target = out_dir.join("moods.json");
    if !moods_path.is_file() {
        println!(
            "cargo:warning=moods.json not found at {}",
            moods_path.display()
        );
    } else if !moods_target.exists() {
        fs::copy(&moods_path, &moods_target)?;
    }

    Ok(())
}
