use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A generated, playable preview item.
///
/// Immutable once synthesized except for `duration`, which the playback
/// subsystem fills in once the file's metadata has been probed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Derived from mood, catalog id and generation timestamp, so every
    /// generation gets a distinct id.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub mood: String,
    pub genre: String,
    pub audio_path: PathBuf,
    #[serde(default)]
    pub duration: Option<Duration>,
}

/// One seeded catalog entry. Read-only reference data with no lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Audio path relative to the configured assets directory.
    pub path: &'static str,
}

/// A mood the user can pick, with its display name and badge glyph.
#[derive(Debug, Clone, Copy)]
pub struct MoodInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
}

/// A genre the user can pick, with its display name and badge glyph.
#[derive(Debug, Clone, Copy)]
pub struct GenreInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
}
