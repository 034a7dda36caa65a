use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::Track;

use super::backend::StoreBackend;

/// Hard cap on the recent list; the oldest entry is evicted first.
pub const RECENT_CAP: usize = 10;

/// The persisted record. Versionless, written wholesale on each mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredLists {
    pub liked_tracks: Vec<Track>,
    pub recent_tracks: Vec<Track>,
}

/// Liked and recent track lists.
///
/// Liked has set semantics by id (unordered as far as callers care);
/// recent is most-recent-first, deduplicated by id and capped at
/// [`RECENT_CAP`]. Every mutation saves through the backend.
pub struct TrackStore {
    lists: StoredLists,
    backend: Box<dyn StoreBackend>,
}

impl TrackStore {
    /// Open a store over `backend`, loading whatever it has persisted.
    /// An unreadable record is logged and treated as empty.
    pub fn open(backend: Box<dyn StoreBackend>) -> Self {
        let lists = match backend.load() {
            Ok(Some(lists)) => lists,
            Ok(None) => StoredLists::default(),
            Err(e) => {
                warn!("store: failed to load persisted lists: {e}");
                StoredLists::default()
            }
        };
        Self { lists, backend }
    }

    pub fn liked(&self) -> &[Track] {
        &self.lists.liked_tracks
    }

    pub fn recent(&self) -> &[Track] {
        &self.lists.recent_tracks
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.lists.liked_tracks.iter().any(|t| t.id == id)
    }

    /// Add to liked. An existing entry with the same id is replaced, so
    /// the list never holds duplicates.
    pub fn add_liked(&mut self, track: Track) {
        self.lists.liked_tracks.retain(|t| t.id != track.id);
        self.lists.liked_tracks.push(track);
        self.save();
    }

    /// Remove from liked. Removing a non-member is a no-op.
    pub fn remove_liked(&mut self, id: &str) {
        let before = self.lists.liked_tracks.len();
        self.lists.liked_tracks.retain(|t| t.id != id);
        if self.lists.liked_tracks.len() != before {
            self.save();
        }
    }

    /// Insert at the head of recent, deduplicating by id and truncating
    /// to [`RECENT_CAP`].
    pub fn add_recent(&mut self, track: Track) {
        self.lists.recent_tracks.retain(|t| t.id != track.id);
        self.lists.recent_tracks.insert(0, track);
        self.lists.recent_tracks.truncate(RECENT_CAP);
        self.save();
    }

    pub fn clear_liked(&mut self) {
        self.lists.liked_tracks.clear();
        self.save();
    }

    pub fn clear_recent(&mut self) {
        self.lists.recent_tracks.clear();
        self.save();
    }

    fn save(&self) {
        if let Err(e) = self.backend.save(&self.lists) {
            warn!("store: failed to persist lists: {e}");
        }
    }
}
