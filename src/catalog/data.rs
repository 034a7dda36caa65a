//! Seed data bundled with the application.
//!
//! Four moods, four entries each. The audio paths are relative to the
//! configured assets directory.

use super::model::{CatalogEntry, GenreInfo, MoodInfo};

/// Badge glyph used when a mood id is not part of [`MOODS`].
pub const MOOD_FALLBACK_GLYPH: &str = "🎵";
/// Badge glyph used when a genre id is not part of [`GENRES`].
pub const GENRE_FALLBACK_GLYPH: &str = "🎶";

pub const MOODS: &[MoodInfo] = &[
    MoodInfo {
        id: "chill",
        name: "Chill",
        glyph: "😌",
    },
    MoodInfo {
        id: "energetic",
        name: "Energetic",
        glyph: "⚡",
    },
    MoodInfo {
        id: "happy",
        name: "Happy",
        glyph: "😊",
    },
    MoodInfo {
        id: "sad",
        name: "Sad",
        glyph: "😢",
    },
];

pub const GENRES: &[GenreInfo] = &[
    GenreInfo {
        id: "any",
        name: "Any",
        glyph: "🎶",
    },
    GenreInfo {
        id: "lofi",
        name: "Lo-Fi",
        glyph: "🎧",
    },
    GenreInfo {
        id: "electronic",
        name: "Electronic",
        glyph: "🎛️",
    },
    GenreInfo {
        id: "acoustic",
        name: "Acoustic",
        glyph: "🎸",
    },
    GenreInfo {
        id: "pop",
        name: "Pop",
        glyph: "🎤",
    },
    GenreInfo {
        id: "cinematic",
        name: "Cinematic",
        glyph: "🎬",
    },
];

const CHILL: &[CatalogEntry] = &[
    CatalogEntry {
        id: 1,
        name: "Chill Vibes",
        description: "Relaxing and soothing music to unwind.",
        path: "chill/1.mp3",
    },
    CatalogEntry {
        id: 2,
        name: "Evening Calm",
        description: "Soft tunes for a peaceful evening.",
        path: "chill/2.mp3",
    },
    CatalogEntry {
        id: 3,
        name: "Morning Serenity",
        description: "Gentle melodies to start your day.",
        path: "chill/3.mp3",
    },
    CatalogEntry {
        id: 4,
        name: "Nature's Embrace",
        description: "Sounds of nature blended with soft music.",
        path: "chill/4.mp3",
    },
];

const ENERGETIC: &[CatalogEntry] = &[
    CatalogEntry {
        id: 5,
        name: "Upbeat Energy",
        description: "High-energy tracks to get you moving.",
        path: "energetic/1.mp3",
    },
    CatalogEntry {
        id: 6,
        name: "Dance Fever",
        description: "Catchy beats to dance to.",
        path: "energetic/2.mp3",
    },
    CatalogEntry {
        id: 7,
        name: "Workout Motivation",
        description: "Pumping tracks to fuel your workout.",
        path: "energetic/3.mp3",
    },
    CatalogEntry {
        id: 8,
        name: "Party Anthems",
        description: "Lively tunes to keep the party going.",
        path: "energetic/4.mp3",
    },
];

const HAPPY: &[CatalogEntry] = &[
    CatalogEntry {
        id: 9,
        name: "Joyful Moments",
        description: "Uplifting music to brighten your day.",
        path: "happy/1.mp3",
    },
    CatalogEntry {
        id: 10,
        name: "Sunny Days",
        description: "Feel-good tracks for a sunny disposition.",
        path: "happy/2.mp3",
    },
    CatalogEntry {
        id: 11,
        name: "Celebration Time",
        description: "Music for celebrating life's little victories.",
        path: "happy/3.mp3",
    },
    CatalogEntry {
        id: 12,
        name: "Feel Good Vibes",
        description: "Positive tunes to lift your spirits.",
        path: "happy/4.mp3",
    },
];

const SAD: &[CatalogEntry] = &[
    CatalogEntry {
        id: 13,
        name: "Melancholy Moments",
        description: "Reflective music for quiet moments.",
        path: "sad/1.mp3",
    },
    CatalogEntry {
        id: 14,
        name: "Heartfelt Tunes",
        description: "Emotional tracks for introspection.",
        path: "sad/2.mp3",
    },
    CatalogEntry {
        id: 15,
        name: "Quiet Reflections",
        description: "Soft melodies for contemplation.",
        path: "sad/3.mp3",
    },
    CatalogEntry {
        id: 16,
        name: "Sombre Sounds",
        description: "Deep and moving music for somber times.",
        path: "sad/4.mp3",
    },
];

/// Catalog entries seeded for `mood`, empty for unknown moods.
pub fn entries_for(mood: &str) -> &'static [CatalogEntry] {
    match mood {
        "chill" => CHILL,
        "energetic" => ENERGETIC,
        "happy" => HAPPY,
        "sad" => SAD,
        _ => &[],
    }
}

/// Badge glyph for a mood id, with a placeholder for unknown ids.
pub fn mood_glyph(id: &str) -> &'static str {
    MOODS
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.glyph)
        .unwrap_or(MOOD_FALLBACK_GLYPH)
}

/// Badge glyph for a genre id, with a placeholder for unknown ids.
pub fn genre_glyph(id: &str) -> &'static str {
    GENRES
        .iter()
        .find(|g| g.id == id)
        .map(|g| g.glyph)
        .unwrap_or(GENRE_FALLBACK_GLYPH)
}

/// Display name for a mood id; unknown ids display as themselves.
pub fn mood_name(id: &str) -> &str {
    MOODS
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.name)
        .unwrap_or(id)
}

/// Display name for a genre id; unknown ids display as themselves.
pub fn genre_name(id: &str) -> &str {
    GENRES
        .iter()
        .find(|g| g.id == id)
        .map(|g| g.name)
        .unwrap_or(id)
}
