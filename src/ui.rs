//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.
//! Everything here is a pure function of the app model, the store and
//! the latest playback snapshot.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, Pane, Theme};
use crate::audio::PlaybackInfo;
use crate::catalog;
use crate::config::UiSettings;
use crate::store::TrackStore;

/// Colors for one theme.
struct Palette {
    bg: Color,
    fg: Color,
    accent: Color,
    dim: Color,
    like: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            bg: Color::Black,
            fg: Color::Gray,
            accent: Color::Magenta,
            dim: Color::DarkGray,
            like: Color::Red,
        },
        Theme::Light => Palette {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            dim: Color::Gray,
            like: Color::Red,
        },
    }
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `elapsed / total` time label; total shows `--:--` until known.
fn time_label(info: &PlaybackInfo) -> String {
    match info.duration {
        Some(total) => format!("{} / {}", format_mmss(info.elapsed), format_mmss(total)),
        None => format!("{} / --:--", format_mmss(info.elapsed)),
    }
}

fn mood_badge(id: &str) -> String {
    format!("{} {}", catalog::mood_glyph(id), catalog::mood_name(id))
}

fn genre_badge(id: &str) -> String {
    format!("{} {}", catalog::genre_glyph(id), catalog::genre_name(id))
}

const GEN_BAR_WIDTH: usize = 24;
const GEN_BAR_BLOCK: usize = 4;

/// Decorative indeterminate bar: a block sweeping a fixed-width track,
/// one cell per frame. Purely cosmetic, unrelated to real progress.
fn generation_bar(frame: usize) -> String {
    let pos = frame % GEN_BAR_WIDTH;
    (0..GEN_BAR_WIDTH)
        .map(|i| {
            let offset = (i + GEN_BAR_WIDTH - pos) % GEN_BAR_WIDTH;
            if offset < GEN_BAR_BLOCK { '█' } else { '░' }
        })
        .collect()
}

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_seconds: u64) -> String {
    format!(
        "[tab] pane | [j/k] move | [enter] select/play | [g] generate | [space/p] play-pause \
         | [H/L] seek -/+{seek_seconds}s | [f] like | [d] download | [c] clear list | [t] theme | [q] quit"
    )
}

fn pane_block(title: &str, focused: bool, p: &Palette) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(p.accent)
    } else {
        Style::default().fg(p.dim)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {title} "))
}

fn selection_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    cursor: usize,
    focused: bool,
    p: &Palette,
) {
    let list = List::new(items)
        .block(pane_block(title, focused, p))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    state.select(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into the provided `frame`.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    store: &TrackStore,
    snapshot: &PlaybackInfo,
    ui_settings: &UiSettings,
    seek_seconds: u64,
) {
    let p = palette(app.theme);

    // Paint the themed background first.
    frame.render_widget(
        Block::default().style(Style::default().bg(p.bg).fg(p.fg)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let theme_tag = match app.theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.dim))
                .title(" quicktune ")
                .title_alignment(Alignment::Center)
                .title_bottom(format!(" theme: {theme_tag} (t) ")),
        );
    frame.render_widget(header, chunks[0]);

    // Mood / genre selection
    {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let mood_items: Vec<ListItem> = catalog::MOODS
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let marker = if app.selected_mood == Some(i) { "●" } else { " " };
                ListItem::new(format!("{marker} {} {}", m.glyph, m.name))
            })
            .collect();
        selection_list(
            frame,
            cols[0],
            "mood",
            mood_items,
            app.mood_cursor,
            app.focus == Pane::Moods,
            &p,
        );

        let genre_items: Vec<ListItem> = catalog::GENRES
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let marker = if app.selected_genre == Some(i) { "●" } else { " " };
                ListItem::new(format!("{marker} {} {}", g.glyph, g.name))
            })
            .collect();
        selection_list(
            frame,
            cols[1],
            "genre",
            genre_items,
            app.genre_cursor,
            app.focus == Pane::Genres,
            &p,
        );
    }

    // Generation panel
    {
        let text = if app.pending.is_some() {
            format!("{}  Generating your track…", generation_bar(app.spinner_frame))
        } else if let Some(status) = &app.status {
            status.clone()
        } else if app.can_generate() {
            "press g to generate".to_string()
        } else {
            "select a mood and a genre, then press g".to_string()
        };

        let style = if app.pending.is_some() {
            Style::default().fg(p.accent)
        } else {
            Style::default().fg(p.dim)
        };

        let gen_panel = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.dim))
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" generate "),
        );
        frame.render_widget(gen_panel, chunks[2]);
    }

    // Now playing
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.dim))
            .padding(Padding {
                left: 1,
                right: 1,
                top: 0,
                bottom: 0,
            })
            .title(" now playing ");
        let inner = block.inner(chunks[3]);
        frame.render_widget(block, chunks[3]);

        if let Some(track) = &app.current {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(inner);

            let liked = store.is_liked(&track.id);
            let like_marker = if liked { "♥ liked" } else { "♡" };
            let state = if app.playing { "Playing" } else { "Paused" };

            let mut lines = vec![track.title.clone()];
            if let Some(desc) = &track.description {
                lines.push(desc.clone());
            }
            lines.push(format!(
                "{}  {}  {}",
                mood_badge(&track.mood),
                genre_badge(&track.genre),
                like_marker
            ));
            lines.push(format!("{state}  {}", time_label(snapshot)));

            let info = Paragraph::new(lines.join("\n")).wrap(Wrap { trim: true });
            frame.render_widget(info, rows[0]);

            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(p.accent).bg(p.dim))
                .ratio((snapshot.progress_percent() / 100.0).clamp(0.0, 1.0))
                .label(time_label(snapshot));
            frame.render_widget(gauge, rows[1]);
        } else {
            let empty = Paragraph::new("nothing yet — pick a mood and a genre")
                .style(Style::default().fg(p.dim));
            frame.render_widget(empty, inner);
        }
    }

    // Recent & liked lists
    {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[4]);

        let recent_items: Vec<ListItem> = store
            .recent()
            .iter()
            .map(|t| ListItem::new(format!("{} {}", catalog::mood_glyph(&t.mood), t.title)))
            .collect();
        let recent_cursor = app.recent_cursor.min(store.recent().len().saturating_sub(1));
        selection_list(
            frame,
            cols[0],
            "recent",
            recent_items,
            recent_cursor,
            app.focus == Pane::Recent,
            &p,
        );

        let liked_items: Vec<ListItem> = store
            .liked()
            .iter()
            .map(|t| {
                ListItem::new(format!("♥ {} {}", catalog::mood_glyph(&t.mood), t.title))
                    .style(Style::default().fg(p.like))
            })
            .collect();
        let liked_cursor = app.liked_cursor.min(store.liked().len().saturating_sub(1));
        selection_list(
            frame,
            cols[1],
            "liked",
            liked_items,
            liked_cursor,
            app.focus == Pane::Liked,
            &p,
        );
    }

    // Footer
    let footer = Paragraph::new(controls_text(seek_seconds))
        .style(Style::default().fg(p.dim))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.dim))
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_mmss_zero_pads() {
        assert_eq!(format_mmss(Duration::from_secs(0)), "00:00");
        assert_eq!(format_mmss(Duration::from_secs(65)), "01:05");
        assert_eq!(format_mmss(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn time_label_shows_placeholder_until_duration_known() {
        let mut info = PlaybackInfo {
            track_id: None,
            elapsed: Duration::from_secs(5),
            duration: None,
            playing: false,
        };
        assert_eq!(time_label(&info), "00:05 / --:--");

        info.duration = Some(Duration::from_secs(90));
        assert_eq!(time_label(&info), "00:05 / 01:30");
    }

    #[test]
    fn generation_bar_is_fixed_width_and_advances_per_frame() {
        let a = generation_bar(0);
        let b = generation_bar(1);
        assert_eq!(a.chars().count(), GEN_BAR_WIDTH);
        assert_eq!(b.chars().count(), GEN_BAR_WIDTH);
        assert_ne!(a, b);
        // The animation loops.
        assert_eq!(generation_bar(0), generation_bar(GEN_BAR_WIDTH));
    }

    #[test]
    fn badges_fall_back_for_unknown_ids() {
        assert_eq!(mood_badge("chill"), "😌 Chill");
        assert_eq!(mood_badge("mystery"), "🎵 mystery");
        assert_eq!(genre_badge("mystery"), "🎶 mystery");
    }
}
