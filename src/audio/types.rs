//! Audio-related small types and handles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::catalog::Track;

#[derive(Debug)]
pub enum AudioCmd {
    /// Stop whatever is loaded and prepare `track` paused at position zero.
    Load(Track),
    /// Toggle pause/resume. After the track has ended, resumes from the top.
    TogglePause,
    /// Seek to an absolute position. Ignored until the duration is known.
    SeekTo(Duration),
    /// Drop the current track and reset the snapshot.
    Stop,
    /// Quit the audio thread.
    Quit,
}

/// Runtime playback snapshot shared with the UI.
#[derive(Debug, Clone, Default)]
pub struct PlaybackInfo {
    /// Id of the currently loaded track (if any).
    pub track_id: Option<String>,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Total duration, present once the file's metadata has been probed.
    pub duration: Option<Duration>,
    /// Whether playback is currently active.
    pub playing: bool,
}

impl PlaybackInfo {
    /// Percent progress, `elapsed / duration * 100`. Zero until the
    /// duration is known.
    pub fn progress_percent(&self) -> f64 {
        match self.duration {
            Some(d) if !d.is_zero() => {
                (self.elapsed.as_secs_f64() / d.as_secs_f64() * 100.0).min(100.0)
            }
            _ => 0.0,
        }
    }

    /// Absolute seek position `delta_secs` away from the current one,
    /// clamped to `[0, duration]`. `None` until the duration is known;
    /// seeking is a no-op before metadata arrives.
    pub fn seek_target(&self, delta_secs: i64) -> Option<Duration> {
        let duration = self.duration?;
        let elapsed = self.elapsed.as_secs() as i64;
        let target = (elapsed + delta_secs).clamp(0, duration.as_secs() as i64);
        Some(Duration::from_secs(target as u64))
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
