//! Playback subsystem: one background thread driving a single rodio sink
//! for the current track. The UI talks to it over a command channel and
//! observes progress through a shared snapshot.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::{AudioCmd, PlaybackHandle, PlaybackInfo};

#[cfg(test)]
mod tests;
