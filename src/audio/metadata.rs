//! Reading duration and title from audio files when they are added
//!
//! Nothing here fails: a file whose duration or tags cannot be read still
//! becomes a track, with zero duration and a title taken from its name.

use std::fs::File;
use std::path::Path;

use lofty::{Accessor, AudioFile, TaggedFileExt};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::core::Track;

/// Build a track from a file on disk (best-effort)
pub fn acquire_track(path: &Path) -> Track {
    let source_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

    let original_filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let title = read_title(path).unwrap_or_else(|| file_stem_title(path));

    let duration = match get_audio_duration(path) {
        Ok(d) => d,
        Err(e) => {
            log::debug!("No duration for {:?}: {}", path, e);
            0.0
        }
    };

    Track::new(source_path, title, duration, original_filename)
}

impl Track {
    /// Build a track from a file on disk. See [`acquire_track`].
    pub fn from_file(path: &Path) -> Self {
        acquire_track(path)
    }
}

/// File name without its extension, used when no title tag is present
pub fn file_stem_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Read the embedded title tag, if there is a non-blank one
pub fn read_title(path: &Path) -> Option<String> {
    let tagged_file = match lofty::read_from_path(path) {
        Ok(f) => f,
        Err(e) => {
            log::debug!("Could not read tags from {:?}: {}", path, e);
            return None;
        }
    };

    let tag = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag())?;

    tag.title()
        .map(|t| t.to_string())
        .filter(|t| !t.trim().is_empty())
}

/// Duration in seconds
///
/// Symphonia's frame count is used when the container reports one;
/// otherwise lofty's estimate from the stream properties.
pub fn get_audio_duration(path: &Path) -> Result<f64, String> {
    match probe_duration(path) {
        Ok(duration) => Ok(duration),
        Err(probe_err) => {
            let tagged_file = lofty::read_from_path(path)
                .map_err(|e| format!("{}; lofty: {}", probe_err, e))?;
            let duration = tagged_file.properties().duration().as_secs_f64();
            if duration > 0.0 {
                Ok(duration)
            } else {
                Err(probe_err)
            }
        }
    }
}

fn probe_duration(path: &Path) -> Result<f64, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(&ext.to_string_lossy());
    }

    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| format!("Failed to probe audio format: {}", e))?;

    let track = probed
        .format
        .default_track()
        .ok_or_else(|| "No default track found".to_string())?;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| "Unknown sample rate".to_string())?;
    let n_frames = track
        .codec_params
        .n_frames
        .ok_or_else(|| "Unknown frame count".to_string())?;

    Ok(n_frames as f64 / sample_rate as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{write_silent_mp3, write_tagged_mp3, FixtureTags};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_stem_title() {
        assert_eq!(file_stem_title(Path::new("/music/01 Intro.mp3")), "01 Intro");
        assert_eq!(file_stem_title(Path::new("no_ext")), "no_ext");
    }

    #[test]
    fn test_unreadable_file_degrades_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Broken Song.mp3");
        fs::write(&path, b"definitely not audio").unwrap();

        let track = acquire_track(&path);
        assert_eq!(track.title, "Broken Song");
        assert_eq!(track.duration_secs(), 0.0);
        assert_eq!(track.original_filename, "Broken Song.mp3");
        assert!(track.source_path.is_absolute());
    }

    #[test]
    fn test_missing_file_degrades_to_defaults() {
        let track = acquire_track(Path::new("/nonexistent/dir/Ghost.mp3"));
        assert_eq!(track.title, "Ghost");
        assert_eq!(track.duration_secs(), 0.0);
        assert_eq!(track.source_path, Path::new("/nonexistent/dir/Ghost.mp3"));
    }

    #[test]
    fn test_untagged_mp3_uses_file_stem() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Plain.mp3");
        write_silent_mp3(&path, 40);

        let track = Track::from_file(&path);
        assert_eq!(track.title, "Plain");
        assert!(track.duration_secs() >= 0.0);
    }

    #[test]
    fn test_title_tag_preferred_over_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("track01.mp3");
        write_tagged_mp3(
            &path,
            &FixtureTags {
                title: Some("Sunrise"),
                ..Default::default()
            },
        );

        assert_eq!(read_title(&path), Some("Sunrise".to_string()));
        let track = acquire_track(&path);
        assert_eq!(track.title, "Sunrise");
        assert_eq!(track.original_filename, "track01.mp3");
    }

    #[test]
    fn test_blank_title_tag_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Fallback.mp3");
        write_tagged_mp3(
            &path,
            &FixtureTags {
                title: Some("   "),
                ..Default::default()
            },
        );

        assert_eq!(acquire_track(&path).title, "Fallback");
    }
}
