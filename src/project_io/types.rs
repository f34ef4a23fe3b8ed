//! On-disk project file format
//!
//! A flat JSON record. `version` and `saved_at` are written on save but
//! optional on load, so hand-written or older files still open.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::{AlbumProject, Track};

/// Current version of the project file format
pub const FORMAT_VERSION: &str = "1.0";

/// A saved album project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// When the file was written (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,

    #[serde(default)]
    pub band_name: String,

    #[serde(default)]
    pub album_name: String,

    /// Tracks in album order
    #[serde(default)]
    pub tracks: Vec<SavedTrack>,
}

/// A saved track descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub source_path: String,
    pub title: String,
    pub duration_secs: f64,
    pub original_filename: String,
}

impl SavedProject {
    /// Snapshot a project for saving, stamped with the current time
    pub fn from_project(project: &AlbumProject) -> Self {
        Self {
            version: Some(FORMAT_VERSION.to_string()),
            saved_at: Some(chrono::Utc::now().to_rfc3339()),
            band_name: project.band_name.clone(),
            album_name: project.album_name.clone(),
            tracks: project.tracks.iter().map(SavedTrack::from_track).collect(),
        }
    }

    pub fn into_project(self) -> AlbumProject {
        AlbumProject {
            band_name: self.band_name,
            album_name: self.album_name,
            tracks: self.tracks.into_iter().map(SavedTrack::into_track).collect(),
        }
    }
}

impl SavedTrack {
    pub fn from_track(track: &Track) -> Self {
        Self {
            source_path: track.source_path.to_string_lossy().to_string(),
            title: track.title.clone(),
            duration_secs: track.duration_secs(),
            original_filename: track.original_filename.clone(),
        }
    }

    pub fn into_track(self) -> Track {
        Track::new(
            PathBuf::from(self.source_path),
            self.title,
            self.duration_secs,
            self.original_filename,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_file_parses_with_defaults() {
        let project: SavedProject = serde_json::from_str("{}").unwrap();
        assert!(project.version.is_none());
        assert!(project.band_name.is_empty());
        assert!(project.album_name.is_empty());
        assert!(project.tracks.is_empty());
    }

    #[test]
    fn test_track_requires_all_fields() {
        let result: Result<SavedProject, _> =
            serde_json::from_str(r#"{"tracks": [{"source_path": "/a.mp3", "title": "A"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_duration_clamped_on_load() {
        let saved = SavedTrack {
            source_path: "/a.mp3".to_string(),
            title: "A".to_string(),
            duration_secs: -4.0,
            original_filename: "a.mp3".to_string(),
        };
        assert_eq!(saved.into_track().duration_secs(), 0.0);
    }

    #[test]
    fn test_from_project_stamps_version_and_time() {
        let mut project = AlbumProject::new();
        project.band_name = "Band".to_string();
        project.push_track(Track::new(
            PathBuf::from("/music/a.mp3"),
            "A".to_string(),
            12.0,
            "a.mp3".to_string(),
        ));

        let saved = SavedProject::from_project(&project);
        assert_eq!(saved.version.as_deref(), Some(FORMAT_VERSION));
        assert!(chrono::DateTime::parse_from_rfc3339(saved.saved_at.as_deref().unwrap()).is_ok());
        assert_eq!(saved.tracks[0].source_path, "/music/a.mp3");
        assert_eq!(saved.into_project(), project);
    }
}
