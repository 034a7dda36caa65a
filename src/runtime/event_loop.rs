use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::{App, Pane};
use crate::audio::{AudioCmd, AudioPlayer};
use crate::catalog::generate::{self, Picker, RandomPicker};
use crate::config;
use crate::store::TrackStore;
use crate::ui;

use super::download;

/// Main terminal event loop: completes pending generations, syncs the
/// playback snapshot, draws and handles input. Returns when shutdown is
/// requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    store: &mut TrackStore,
    audio_player: &AudioPlayer,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut picker = RandomPicker;

    loop {
        let now = Instant::now();
        app.expire_status(now);

        // Complete a generation whose simulated delay has elapsed. The
        // completion applies even if the selection changed meanwhile;
        // only the most recent completion is ever shown.
        if let Some(track) = app.take_ready_generation(now) {
            info!(id = %track.id, mood = %track.mood, "generated track ready");
            store.add_recent(track.clone());
            let _ = audio_player.send(AudioCmd::Load(track.clone()));
            app.set_current(track);
            app.clamp_cursors(store.recent().len(), store.liked().len());
        }

        if app.pending.is_some() {
            app.advance_spinner();
        }

        let snapshot = app.playback_snapshot();
        app.apply_playback(&snapshot);

        terminal.draw(|f| {
            ui::draw(
                f,
                app,
                store,
                &snapshot,
                &settings.ui,
                settings.controls.seek_seconds,
            )
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, store, audio_player, &mut picker)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    store: &mut TrackStore,
    audio_player: &AudioPlayer,
    picker: &mut dyn Picker,
) -> Result<bool, Box<dyn std::error::Error>> {
    match key.code {
        KeyCode::Char('q') => {
            audio_player.quit();
            return Ok(true);
        }
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::BackTab => app.cycle_focus_back(),
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_cursor(1, store.recent().len(), store.liked().len());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_cursor(-1, store.recent().len(), store.liked().len());
        }
        KeyCode::Enter => match app.focus {
            Pane::Moods | Pane::Genres => app.commit_selection(),
            Pane::Recent => {
                if let Some(track) = store.recent().get(app.recent_cursor).cloned() {
                    play_from_list(app, audio_player, track);
                }
            }
            Pane::Liked => {
                if let Some(track) = store.liked().get(app.liked_cursor).cloned() {
                    play_from_list(app, audio_player, track);
                }
            }
        },
        KeyCode::Char('g') => start_generation(app, settings, audio_player, picker),
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            if app.current.is_some() {
                let _ = audio_player.send(AudioCmd::TogglePause);
            }
        }
        KeyCode::Char('L') => {
            seek_by(app, audio_player, settings.controls.seek_seconds as i64);
        }
        KeyCode::Char('H') => {
            seek_by(app, audio_player, -(settings.controls.seek_seconds as i64));
        }
        KeyCode::Char('f') => toggle_like(app, store),
        KeyCode::Char('d') => download_current(app),
        KeyCode::Char('c') => clear_focused_list(app, store),
        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }

    Ok(false)
}

/// Start a generation: reset the current track, pick a random catalog
/// entry for the mood and hold it behind the simulated delay. The empty
/// catalog is the only error path and is non-fatal.
fn start_generation(
    app: &mut App,
    settings: &config::Settings,
    audio_player: &AudioPlayer,
    picker: &mut dyn Picker,
) {
    if !app.can_generate() {
        return;
    }
    let (Some(mood), Some(genre)) = (app.selected_mood_id(), app.selected_genre_id()) else {
        return;
    };

    app.current = None;
    app.playing = false;
    app.clear_status();
    let _ = audio_player.send(AudioCmd::Stop);

    let assets_dir = Path::new(&settings.generation.assets_dir);
    let delay = Duration::from_millis(settings.generation.delay_ms);

    match generate::begin(mood, genre, assets_dir, delay, picker) {
        Ok(pending) => {
            app.spinner_frame = 0;
            app.pending = Some(pending);
        }
        Err(e) => {
            warn!("generation failed: {e}");
            app.set_status(format!("generation failed: {e}"));
        }
    }
}

/// Replay a stored track: published as current, attached paused with
/// progress reset to zero.
fn play_from_list(app: &mut App, audio_player: &AudioPlayer, track: crate::catalog::Track) {
    let _ = audio_player.send(AudioCmd::Load(track.clone()));
    app.set_current(track);
}

/// Seek relative to the current position. A no-op until the duration is
/// known; the target is clamped to `[0, duration]`.
fn seek_by(app: &App, audio_player: &AudioPlayer, delta_secs: i64) {
    if app.current.is_none() {
        return;
    }
    let Some(target) = app.playback_snapshot().seek_target(delta_secs) else {
        return;
    };
    let _ = audio_player.send(AudioCmd::SeekTo(target));
}

fn toggle_like(app: &mut App, store: &mut TrackStore) {
    let Some(track) = app.current.clone() else {
        return;
    };

    if store.is_liked(&track.id) {
        store.remove_liked(&track.id);
    } else {
        store.add_liked(track);
    }
    app.clamp_cursors(store.recent().len(), store.liked().len());
}

fn download_current(app: &mut App) {
    let Some(track) = app.current.as_ref() else {
        return;
    };

    match download::download_to(track, &download::default_download_dir()) {
        Ok(dest) => {
            info!(id = %track.id, dest = %dest.display(), "track downloaded");
            app.set_status(format!("saved to {}", dest.display()));
        }
        Err(e) => {
            warn!("download failed: {e}");
            app.set_status(format!("download failed: {e}"));
        }
    }
}

/// `c` clears whichever list pane has focus; elsewhere it does nothing.
fn clear_focused_list(app: &mut App, store: &mut TrackStore) {
    match app.focus {
        Pane::Recent => {
            store.clear_recent();
            app.recent_cursor = 0;
        }
        Pane::Liked => {
            store.clear_liked();
            app.liked_cursor = 0;
        }
        Pane::Moods | Pane::Genres => {}
    }
}
