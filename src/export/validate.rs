use std::collections::HashMap;

use super::sanitize::sanitize;
use crate::core::AlbumProject;
use crate::error::ValidationError;

/// Check that an album can be exported, without touching the disk
///
/// On success returns the sanitized title of every track, in order.
pub fn validate(project: &AlbumProject) -> Result<Vec<String>, ValidationError> {
    if project.tracks.is_empty() {
        return Err(ValidationError::EmptyTrackList);
    }
    if project.album_name.trim().is_empty() {
        return Err(ValidationError::MissingAlbumName);
    }

    let titles: Vec<String> = project.tracks.iter().map(|t| sanitize(&t.title)).collect();

    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(titles.len());
    for (index, title) in titles.iter().enumerate() {
        if let Some(&first) = seen.get(title.as_str()) {
            return Err(ValidationError::DuplicateTitle {
                title: title.clone(),
                first: first + 1,
                second: index + 1,
            });
        }
        seen.insert(title.as_str(), index);
    }

    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Track;
    use std::path::PathBuf;

    fn project(album: &str, titles: &[&str]) -> AlbumProject {
        let mut project = AlbumProject {
            album_name: album.to_string(),
            ..Default::default()
        };
        for (i, title) in titles.iter().enumerate() {
            project.push_track(Track::new(
                PathBuf::from(format!("/music/{}.mp3", i)),
                title.to_string(),
                60.0,
                format!("{}.mp3", i),
            ));
        }
        project
    }

    #[test]
    fn test_empty_track_list() {
        assert_eq!(validate(&project("Demo", &[])), Err(ValidationError::EmptyTrackList));
    }

    #[test]
    fn test_empty_track_list_reported_before_album_name() {
        assert_eq!(validate(&project("", &[])), Err(ValidationError::EmptyTrackList));
    }

    #[test]
    fn test_missing_album_name() {
        assert_eq!(validate(&project("", &["a"])), Err(ValidationError::MissingAlbumName));
        assert_eq!(
            validate(&project("  \t ", &["a"])),
            Err(ValidationError::MissingAlbumName)
        );
    }

    #[test]
    fn test_duplicate_after_sanitizing() {
        assert_eq!(
            validate(&project("Demo", &["A/B", "AB"])),
            Err(ValidationError::DuplicateTitle {
                title: "AB".to_string(),
                first: 1,
                second: 2,
            })
        );
    }

    #[test]
    fn test_first_duplicate_wins() {
        // Track 4 repeats track 2 before track 5 repeats track 1
        assert_eq!(
            validate(&project("Demo", &["x", "y", "z", "y.", "x"])),
            Err(ValidationError::DuplicateTitle {
                title: "y".to_string(),
                first: 2,
                second: 4,
            })
        );
    }

    #[test]
    fn test_empty_titles_collide_as_untitled() {
        assert_eq!(
            validate(&project("Demo", &["", "Song", "???"])),
            Err(ValidationError::DuplicateTitle {
                title: "Untitled".to_string(),
                first: 1,
                second: 3,
            })
        );
    }

    #[test]
    fn test_valid_returns_sanitized_titles() {
        assert_eq!(
            validate(&project("Demo", &["Intro", "Why?", "Outro"])).unwrap(),
            vec!["Intro", "Why", "Outro"]
        );
    }
}
