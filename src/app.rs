//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the current selection,
//! pending generation, current track and playback-related flags.

mod model;

pub use model::*;
