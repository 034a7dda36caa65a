//! Liked/recent track lists with save-on-mutation persistence.
//!
//! Persistence goes through the `StoreBackend` trait so the UI never
//! touches a process-wide singleton and tests can substitute an
//! in-memory backend.

mod backend;
mod model;

pub use backend::{JsonFileBackend, StoreBackend, StoreError};
pub use model::{RECENT_CAP, StoredLists, TrackStore};

#[cfg(test)]
mod tests;
