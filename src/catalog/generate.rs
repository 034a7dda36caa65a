//! Track "generation": a uniform random pick from the seeded catalog,
//! held pending behind a fixed simulated delay.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::Rng;
use thiserror::Error;

use super::data;
use super::model::{CatalogEntry, Track};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The only failure mode: the selected mood has nothing seeded.
    #[error("no catalog entries for mood {0:?}")]
    EmptyCatalog(String),
}

/// Source of pick indices. Injectable so tests can supply deterministic
/// sequences instead of the thread-local RNG.
pub trait Picker {
    /// Return an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by the thread-local RNG.
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// A synthesized track waiting out the simulated generation delay.
///
/// The snapshot is immutable once created: a selection change while the
/// delay runs does not cancel or alter it, the completion always applies.
#[derive(Debug, Clone)]
pub struct PendingGeneration {
    pub track: Track,
    pub ready_at: Instant,
}

impl PendingGeneration {
    pub fn is_ready(&self, now: Instant) -> bool {
        now >= self.ready_at
    }
}

/// Milliseconds since the Unix epoch, used to timestamp-qualify track ids.
pub fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Build a `Track` from a catalog entry and the current selection.
pub fn synthesize(
    mood: &str,
    genre: &str,
    entry: &CatalogEntry,
    assets_dir: &Path,
    timestamp_ms: u128,
) -> Track {
    Track {
        id: format!("{}_{}_{}", mood, entry.id, timestamp_ms),
        title: entry.name.to_string(),
        description: Some(entry.description.to_string()),
        mood: mood.to_string(),
        genre: genre.to_string(),
        audio_path: assets_dir.join(entry.path),
        duration: None,
    }
}

/// Pick a random entry for `mood` and start the simulated generation.
pub fn begin(
    mood: &str,
    genre: &str,
    assets_dir: &Path,
    delay: Duration,
    picker: &mut dyn Picker,
) -> Result<PendingGeneration, GenerateError> {
    let entries = data::entries_for(mood);
    if entries.is_empty() {
        return Err(GenerateError::EmptyCatalog(mood.to_string()));
    }

    let entry = &entries[picker.pick(entries.len())];
    let track = synthesize(mood, genre, entry, assets_dir, unix_millis());

    Ok(PendingGeneration {
        track,
        ready_at: Instant::now() + delay,
    })
}
