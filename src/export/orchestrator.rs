//! Album export: validate, copy every track into a numbered file, retag
//!
//! Layout: `{destination}/{album}/{NN}. {title}.mp3`
//!
//! Export is not transactional. Validation happens before anything is
//! written, but a copy or tag failure part way through leaves the earlier
//! files in place; exporting again overwrites them.

use std::fs::{self, FileTimes, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use super::sanitize::sanitize;
use super::validate::validate;
use crate::audio::{write_export_tags, ExportTags};
use crate::core::AlbumProject;
use crate::error::ExportError;

/// Folder an album is exported into
pub fn album_dir(destination_root: &Path, album_name: &str) -> PathBuf {
    destination_root.join(sanitize(album_name))
}

/// File name for the track at 1-based `position`
///
/// The number is zero-padded to two digits and widens past 99.
pub fn export_file_name(position: usize, title: &str) -> String {
    format!("{:02}. {}.mp3", position, sanitize(title))
}

/// Export an album into `destination_root`
///
/// Returns the created file paths in track order.
pub fn export_album(
    project: &AlbumProject,
    destination_root: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    let safe_titles = validate(project)?;

    let dir = album_dir(destination_root, &project.album_name);
    fs::create_dir_all(&dir).map_err(|source| ExportError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    log::info!(
        "Exporting \"{}\" ({} tracks) to {}",
        project.album_name,
        project.tracks.len(),
        dir.display()
    );

    let artist = if project.band_name.trim().is_empty() {
        None
    } else {
        Some(project.band_name.clone())
    };

    let mut created = Vec::with_capacity(project.tracks.len());

    for (index, (track, safe_title)) in project.tracks.iter().zip(&safe_titles).enumerate() {
        let position = index + 1;
        let dest = dir.join(format!("{:02}. {}.mp3", position, safe_title));

        copy_with_times(&track.source_path, &dest).map_err(|source| ExportError::Copy {
            position,
            title: track.title.clone(),
            source,
        })?;

        let tags = ExportTags {
            track_number: u32::try_from(position).unwrap_or(u32::MAX),
            album: project.album_name.clone(),
            artist: artist.clone(),
            title: track.title.clone(),
        };
        write_export_tags(&dest, &tags).map_err(|message| ExportError::Tag {
            position,
            title: track.title.clone(),
            message,
        })?;

        log::debug!("Exported {:?} -> {:?}", track.source_path, dest);
        created.push(dest);
    }

    log::info!("Export finished: {} files in {}", created.len(), dir.display());
    Ok(created)
}

/// Copy a file, overwriting the destination, and carry over its timestamps
fn copy_with_times(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst)?;

    let metadata = fs::metadata(src)?;
    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    let file = OpenOptions::new().write(true).open(dst)?;
    file.set_times(times)
}
