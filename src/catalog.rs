//! Static catalog and reference data: moods, genres and the seeded
//! preview entries each mood can "generate" from.

mod data;
pub mod generate;
mod model;

pub use data::{GENRES, MOODS, entries_for, genre_glyph, genre_name, mood_glyph, mood_name};
pub use model::{CatalogEntry, GenreInfo, MoodInfo, Track};

#[cfg(test)]
mod tests;
