//! The audio thread: owns the output stream and the single active sink,
//! processes commands and keeps the shared playback snapshot current.

use std::path::Path;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use lofty::prelude::*;
use rodio::{OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use crate::catalog::Track;

use super::sink::create_sink_at;
use super::types::{AudioCmd, PlaybackHandle};

/// Probe the total duration of an audio file. The "metadata loaded"
/// moment: the result lands in the shared snapshot asynchronously
/// relative to the UI.
fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()),
        Err(e) => {
            warn!("audio: failed to probe duration of {path:?}: {e}");
            None
        }
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let mut current: Option<Track> = None;
        let mut sink: Option<Sink> = None;
        let mut paused = true;
        let mut duration: Option<Duration> = None;

        // Ticker thread advancing the shared elapsed time while playing.
        let info_for_ticker = playback_info.clone();
        thread::spawn(move || {
            loop {
                thread::sleep(Duration::from_millis(500));
                if let Ok(mut info) = info_for_ticker.lock() {
                    if info.playing {
                        info.elapsed += Duration::from_millis(500);
                        if let Some(d) = info.duration {
                            info.elapsed = info.elapsed.min(d);
                        }
                    }
                }
            }
        });

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load(track) => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        paused = true;
                        duration = probe_duration(&track.audio_path);

                        match create_sink_at(&stream, &track, Duration::ZERO) {
                            Ok(new_sink) => sink = Some(new_sink),
                            // Unplayable file: stay loaded but stopped.
                            Err(e) => warn!("audio: {e}"),
                        }

                        if let Ok(mut info) = playback_info.lock() {
                            info.track_id = Some(track.id.clone());
                            info.elapsed = Duration::ZERO;
                            info.duration = duration;
                            info.playing = false;
                        }
                        debug!(id = %track.id, "audio: track loaded");
                        current = Some(track);
                    }

                    AudioCmd::TogglePause => {
                        if sink.is_none() {
                            // The sink drained (or never decoded). Resume
                            // means starting over from the top.
                            if let Some(track) = current.as_ref() {
                                match create_sink_at(&stream, track, Duration::ZERO) {
                                    Ok(s) => {
                                        sink = Some(s);
                                        paused = true;
                                        if let Ok(mut info) = playback_info.lock() {
                                            info.elapsed = Duration::ZERO;
                                        }
                                    }
                                    Err(e) => warn!("audio: {e}"),
                                }
                            }
                        }

                        if let Some(s) = sink.as_ref() {
                            if paused {
                                s.play();
                            } else {
                                s.pause();
                            }
                            paused = !paused;
                            if let Ok(mut info) = playback_info.lock() {
                                info.playing = !paused;
                            }
                        }
                    }

                    AudioCmd::SeekTo(target) => {
                        let Some(track) = current.as_ref() else {
                            continue;
                        };
                        // Seeking needs a known duration to clamp against.
                        let Some(total) = duration else {
                            continue;
                        };
                        let target = target.min(total);

                        match create_sink_at(&stream, track, target) {
                            Ok(new_sink) => {
                                if let Some(old) = sink.take() {
                                    old.stop();
                                }
                                if !paused {
                                    new_sink.play();
                                }
                                sink = Some(new_sink);
                                if let Ok(mut info) = playback_info.lock() {
                                    info.elapsed = target;
                                }
                            }
                            Err(e) => warn!("audio: {e}"),
                        }
                    }

                    AudioCmd::Stop => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        current = None;
                        paused = true;
                        duration = None;
                        if let Ok(mut info) = playback_info.lock() {
                            info.track_id = None;
                            info.elapsed = Duration::ZERO;
                            info.duration = None;
                            info.playing = false;
                        }
                    }

                    AudioCmd::Quit => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // Periodic ended-check: a drained sink resets progress
                    // but keeps the current track loaded. No auto-advance.
                    if let Some(s) = sink.as_ref() {
                        if !paused && s.empty() {
                            sink = None;
                            paused = true;
                            if let Ok(mut info) = playback_info.lock() {
                                info.playing = false;
                                info.elapsed = Duration::ZERO;
                            }
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
