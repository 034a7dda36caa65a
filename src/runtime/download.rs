//! Download affordance: copy the current track's audio file into the
//! user's downloads directory, named after the track title.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::Track;

/// Strip path-hostile characters from a track title for use as a filename.
fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| {
            if matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '_'
            } else {
                c
            }
        })
        .collect();
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        "track".to_string()
    } else {
        cleaned
    }
}

/// Copy `track`'s audio file into `dir` as `{title}.{ext}`, keeping the
/// source extension (`mp3` when the source has none).
pub fn download_to(track: &Track, dir: &Path) -> io::Result<PathBuf> {
    let ext = track
        .audio_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("mp3");
    let dest = dir.join(format!("{}.{ext}", sanitize_title(&track.title)));

    fs::create_dir_all(dir)?;
    fs::copy(&track.audio_path, &dest)?;
    Ok(dest)
}

/// Platform downloads directory, falling back to the current directory.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn track_at(path: PathBuf, title: &str) -> Track {
        Track {
            id: "chill_1_1".into(),
            title: title.into(),
            description: None,
            mood: "chill".into(),
            genre: "any".into(),
            audio_path: path,
            duration: None,
        }
    }

    #[test]
    fn sanitize_title_replaces_separators_and_never_returns_empty() {
        assert_eq!(sanitize_title("Chill Vibes"), "Chill Vibes");
        assert_eq!(sanitize_title("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_title("   "), "track");
    }

    #[test]
    fn download_copies_the_file_named_after_the_title() {
        let src_dir = tempdir().unwrap();
        let dst_dir = tempdir().unwrap();

        let src = src_dir.path().join("1.mp3");
        std::fs::write(&src, b"not really audio").unwrap();

        let track = track_at(src, "Evening Calm");
        let dest = download_to(&track, dst_dir.path()).unwrap();

        assert_eq!(dest, dst_dir.path().join("Evening Calm.mp3"));
        assert_eq!(std::fs::read(&dest).unwrap(), b"not really audio");
    }

    #[test]
    fn download_keeps_the_source_extension() {
        let src_dir = tempdir().unwrap();
        let dst_dir = tempdir().unwrap();

        let src = src_dir.path().join("4.ogg");
        std::fs::write(&src, b"ogg bytes").unwrap();

        let track = track_at(src, "Nature's Embrace");
        let dest = download_to(&track, dst_dir.path()).unwrap();
        assert_eq!(dest, dst_dir.path().join("Nature's Embrace.ogg"));
    }

    #[test]
    fn download_of_a_missing_source_fails() {
        let dst_dir = tempdir().unwrap();
        let track = track_at(PathBuf::from("/no/such/file.mp3"), "Ghost");
        assert!(download_to(&track, dst_dir.path()).is_err());
    }
}
