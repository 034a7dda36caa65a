use std::path::Path;
use std::time::Duration;

use super::generate::{self, GenerateError, PendingGeneration, Picker};
use super::*;

/// Deterministic picker yielding a fixed sequence of indices.
struct SeqPicker(Vec<usize>);

impl Picker for SeqPicker {
    fn pick(&mut self, len: usize) -> usize {
        let i = self.0.remove(0);
        assert!(i < len, "test sequence out of range");
        i
    }
}

#[test]
fn every_mood_has_four_seeded_entries() {
    for mood in MOODS {
        assert_eq!(entries_for(mood.id).len(), 4, "mood {}", mood.id);
    }
}

#[test]
fn unknown_mood_has_empty_catalog() {
    assert!(entries_for("angry").is_empty());
    assert!(entries_for("").is_empty());
}

#[test]
fn badge_lookups_fall_back_to_placeholder_glyphs() {
    assert_eq!(mood_glyph("chill"), "😌");
    assert_eq!(mood_glyph("no-such-mood"), "🎵");
    assert_eq!(genre_glyph("lofi"), "🎧");
    assert_eq!(genre_glyph("no-such-genre"), "🎶");
    assert_eq!(mood_name("no-such-mood"), "no-such-mood");
    assert_eq!(genre_name("pop"), "Pop");
}

#[test]
fn synthesize_derives_id_from_mood_entry_and_timestamp() {
    let entry = &entries_for("chill")[0];
    let track = generate::synthesize("chill", "lofi", entry, Path::new("assets"), 1234);

    assert_eq!(track.id, "chill_1_1234");
    assert_eq!(track.mood, "chill");
    assert_eq!(track.genre, "lofi");
    assert_eq!(track.title, "Chill Vibes");
    assert_eq!(track.audio_path, Path::new("assets").join("chill/1.mp3"));
    assert_eq!(track.duration, None);
}

#[test]
fn synthesize_with_distinct_timestamps_yields_distinct_ids() {
    let entry = &entries_for("happy")[2];
    let a = generate::synthesize("happy", "any", entry, Path::new("a"), 1);
    let b = generate::synthesize("happy", "any", entry, Path::new("a"), 2);
    assert_ne!(a.id, b.id);
}

#[test]
fn begin_fails_on_empty_catalog() {
    let mut picker = SeqPicker(vec![]);
    let err = generate::begin(
        "nope",
        "any",
        Path::new("assets"),
        Duration::ZERO,
        &mut picker,
    )
    .unwrap_err();
    assert_eq!(err, GenerateError::EmptyCatalog("nope".to_string()));
}

#[test]
fn begin_picks_the_requested_entry_and_tags_the_mood() {
    let mut picker = SeqPicker(vec![2]);
    let pending = generate::begin(
        "energetic",
        "electronic",
        Path::new("assets"),
        Duration::ZERO,
        &mut picker,
    )
    .unwrap();

    assert_eq!(pending.track.mood, "energetic");
    assert_eq!(pending.track.genre, "electronic");
    assert_eq!(pending.track.title, "Workout Motivation");
    assert!(pending.track.id.starts_with("energetic_7_"));
}

#[test]
fn chill_generation_resolves_to_a_seeded_chill_path() {
    let seeded: Vec<_> = entries_for("chill")
        .iter()
        .map(|e| Path::new("assets").join(e.path))
        .collect();

    for i in 0..4 {
        let mut picker = SeqPicker(vec![i]);
        let pending = generate::begin(
            "chill",
            "any",
            Path::new("assets"),
            Duration::ZERO,
            &mut picker,
        )
        .unwrap();
        assert!(seeded.contains(&pending.track.audio_path));
    }
}

#[test]
fn pending_generation_is_ready_only_after_its_deadline() {
    let mut picker = SeqPicker(vec![0]);
    let pending = generate::begin(
        "sad",
        "any",
        Path::new("assets"),
        Duration::from_secs(60),
        &mut picker,
    )
    .unwrap();

    let now = std::time::Instant::now();
    assert!(!pending.is_ready(now));
    assert!(pending.is_ready(now + Duration::from_secs(61)));

    let immediate = PendingGeneration {
        track: pending.track,
        ready_at: now,
    };
    assert!(immediate.is_ready(now));
}
