use std::time::Duration;

use super::types::PlaybackInfo;

#[test]
fn progress_percent_is_elapsed_over_duration() {
    let info = PlaybackInfo {
        track_id: Some("chill_1_1".into()),
        elapsed: Duration::from_secs(30),
        duration: Some(Duration::from_secs(120)),
        playing: true,
    };
    assert!((info.progress_percent() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn progress_percent_is_zero_without_a_known_duration() {
    let info = PlaybackInfo {
        track_id: Some("chill_1_1".into()),
        elapsed: Duration::from_secs(30),
        duration: None,
        playing: true,
    };
    assert_eq!(info.progress_percent(), 0.0);

    let zero = PlaybackInfo {
        duration: Some(Duration::ZERO),
        ..info
    };
    assert_eq!(zero.progress_percent(), 0.0);
}

#[test]
fn progress_percent_saturates_at_one_hundred() {
    let info = PlaybackInfo {
        track_id: None,
        elapsed: Duration::from_secs(500),
        duration: Some(Duration::from_secs(120)),
        playing: false,
    };
    assert_eq!(info.progress_percent(), 100.0);
}

#[test]
fn seek_target_is_none_until_the_duration_is_known() {
    let info = PlaybackInfo {
        track_id: Some("chill_1_1".into()),
        elapsed: Duration::from_secs(30),
        duration: None,
        playing: true,
    };
    assert_eq!(info.seek_target(5), None);
    assert_eq!(info.seek_target(-5), None);
}

#[test]
fn seek_target_clamps_to_the_track_bounds() {
    let info = PlaybackInfo {
        track_id: Some("chill_1_1".into()),
        elapsed: Duration::from_secs(10),
        duration: Some(Duration::from_secs(120)),
        playing: true,
    };
    assert_eq!(info.seek_target(5), Some(Duration::from_secs(15)));
    assert_eq!(info.seek_target(-30), Some(Duration::ZERO));
    assert_eq!(info.seek_target(500), Some(Duration::from_secs(120)));
}
