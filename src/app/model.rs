//! Application model types: `App`, `Pane` and `Theme`.
//!
//! The `App` struct holds the mood/genre selection, the pending
//! generation, the current track and the flags the UI and runtime read.

use std::time::{Duration, Instant};

use crate::audio::{PlaybackHandle, PlaybackInfo};
use crate::catalog::{self, Track};
use crate::catalog::generate::PendingGeneration;

/// How long a transient status line stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(5);

/// Which pane owns the cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pane {
    Moods,
    Genres,
    Recent,
    Liked,
}

/// Binary color scheme flag. Session-scoped; the default comes from config.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// The main application model.
pub struct App {
    pub mood_cursor: usize,
    pub genre_cursor: usize,
    /// Committed selections, indices into `catalog::MOODS` / `catalog::GENRES`.
    pub selected_mood: Option<usize>,
    pub selected_genre: Option<usize>,

    pub focus: Pane,
    pub recent_cursor: usize,
    pub liked_cursor: usize,

    pub current: Option<Track>,
    pub pending: Option<PendingGeneration>,
    /// Frame counter for the decorative generation animation. Fixed-step,
    /// unrelated to real elapsed time.
    pub spinner_frame: usize,

    pub playing: bool,
    pub playback_handle: Option<PlaybackHandle>,

    pub theme: Theme,
    /// One-line transient message (generation failures, download results).
    pub status: Option<String>,
    pub status_deadline: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        Self {
            mood_cursor: 0,
            genre_cursor: 0,
            selected_mood: None,
            selected_genre: None,
            focus: Pane::Moods,
            recent_cursor: 0,
            liked_cursor: 0,
            current: None,
            pending: None,
            spinner_frame: 0,
            playing: false,
            playback_handle: None,
            theme: Theme::Dark,
            status: None,
            status_deadline: None,
        }
    }

    /// Attach the shared snapshot used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Generation is allowed only with both selections made and nothing
    /// already in flight.
    pub fn can_generate(&self) -> bool {
        self.selected_mood.is_some() && self.selected_genre.is_some() && self.pending.is_none()
    }

    pub fn selected_mood_id(&self) -> Option<&'static str> {
        self.selected_mood.map(|i| catalog::MOODS[i].id)
    }

    pub fn selected_genre_id(&self) -> Option<&'static str> {
        self.selected_genre.map(|i| catalog::GENRES[i].id)
    }

    /// Commit the cursor of the focused selection pane.
    pub fn commit_selection(&mut self) {
        match self.focus {
            Pane::Moods => self.selected_mood = Some(self.mood_cursor),
            Pane::Genres => self.selected_genre = Some(self.genre_cursor),
            Pane::Recent | Pane::Liked => {}
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Moods => Pane::Genres,
            Pane::Genres => Pane::Recent,
            Pane::Recent => Pane::Liked,
            Pane::Liked => Pane::Moods,
        };
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            Pane::Moods => Pane::Liked,
            Pane::Genres => Pane::Moods,
            Pane::Recent => Pane::Genres,
            Pane::Liked => Pane::Recent,
        };
    }

    /// Move the focused pane's cursor by `delta`, wrapping at the ends.
    /// List lengths for the store-backed panes come from the caller.
    pub fn move_cursor(&mut self, delta: i32, recent_len: usize, liked_len: usize) {
        let (cursor, len) = match self.focus {
            Pane::Moods => (&mut self.mood_cursor, catalog::MOODS.len()),
            Pane::Genres => (&mut self.genre_cursor, catalog::GENRES.len()),
            Pane::Recent => (&mut self.recent_cursor, recent_len),
            Pane::Liked => (&mut self.liked_cursor, liked_len),
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        let len = len as i32;
        let next = (*cursor as i32 + delta).rem_euclid(len);
        *cursor = next as usize;
    }

    /// Keep the store-backed cursors valid after list mutations.
    pub fn clamp_cursors(&mut self, recent_len: usize, liked_len: usize) {
        if self.recent_cursor >= recent_len {
            self.recent_cursor = recent_len.saturating_sub(1);
        }
        if self.liked_cursor >= liked_len {
            self.liked_cursor = liked_len.saturating_sub(1);
        }
    }

    /// Publish `track` as current; playback starts paused with progress zero.
    pub fn set_current(&mut self, track: Track) {
        self.current = Some(track);
        self.playing = false;
    }

    /// Take the pending generation's track once its deadline has passed.
    pub fn take_ready_generation(&mut self, now: Instant) -> Option<Track> {
        if self.pending.as_ref().is_some_and(|p| p.is_ready(now)) {
            self.pending.take().map(|p| p.track)
        } else {
            None
        }
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Snapshot of the shared playback info; default when unattached.
    pub fn playback_snapshot(&self) -> PlaybackInfo {
        self.playback_handle
            .as_ref()
            .and_then(|h| h.lock().ok().map(|info| info.clone()))
            .unwrap_or_default()
    }

    /// Fold a playback snapshot into the model. Fills in the current
    /// track's duration once known, the only post-construction mutation
    /// a `Track` sees.
    pub fn apply_playback(&mut self, info: &PlaybackInfo) {
        self.playing = info.playing;

        if let (Some(track), Some(duration)) = (self.current.as_mut(), info.duration) {
            if track.duration.is_none() && info.track_id.as_deref() == Some(track.id.as_str()) {
                track.duration = Some(duration);
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn set_status(&mut self, msg: String) {
        self.status = Some(msg);
        self.status_deadline = Some(Instant::now() + STATUS_TTL);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
        self.status_deadline = None;
    }

    /// Drop an expired status line. Called once per tick.
    pub fn expire_status(&mut self, now: Instant) {
        if self.status_deadline.is_some_and(|d| now >= d) {
            self.clear_status();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
