use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Theme};
use crate::audio::AudioPlayer;
use crate::config::ThemeSetting;
use crate::store::{JsonFileBackend, TrackStore};

mod download;
mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    // Keep the appender guard alive for the lifetime of the run.
    let _log_guard = logging::init();

    let store_path = settings
        .storage
        .path
        .as_ref()
        .map(PathBuf::from)
        .or_else(JsonFileBackend::default_path)
        .unwrap_or_else(|| PathBuf::from("quicktune-store.json"));
    let mut store = TrackStore::open(Box::new(JsonFileBackend::new(store_path)));

    let audio_player = AudioPlayer::new();
    let mut app = App::new();
    app.theme = match settings.ui.theme {
        ThemeSetting::Dark => Theme::Dark,
        ThemeSetting::Light => Theme::Light,
    };
    app.set_playback_handle(audio_player.playback_handle());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut store, &audio_player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
