//! Metadata writing for exported files
//!
//! Rewrites the album, artist, title and track number of an MP3's ID3v2
//! tag. The tag is edited in place, so every other frame already in the
//! file (genre, artwork, comments...) survives.

use std::fs::File;
use std::path::Path;

use lofty::id3::v2::Id3v2Tag;
use lofty::mpeg::MpegFile;
use lofty::{Accessor, AudioFile, ParseOptions, TagExt};

/// Tag values written to one exported track
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTags {
    /// 1-based position in the album
    pub track_number: u32,
    pub album: String,
    /// None leaves any existing artist untouched
    pub artist: Option<String>,
    pub title: String,
}

/// Write export tags to an MP3, creating an ID3v2 tag if the file has none
pub fn write_export_tags(path: &Path, tags: &ExportTags) -> Result<(), String> {
    let mut tag = read_id3v2(path)?.unwrap_or_default();

    // Drop any "n/total" form so the frame holds just the position
    tag.remove_track();
    tag.set_track(tags.track_number);
    tag.set_album(tags.album.clone());
    if let Some(artist) = &tags.artist {
        tag.set_artist(artist.clone());
    }
    tag.set_title(tags.title.clone());

    tag.save_to_path(path)
        .map_err(|e| format!("Failed to save tag: {}", e))?;

    Ok(())
}

/// Read the existing ID3v2 tag of an MP3, if any
fn read_id3v2(path: &Path) -> Result<Option<Id3v2Tag>, String> {
    let mut file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;

    let mpeg = MpegFile::read_from(&mut file, ParseOptions::new().read_properties(false))
        .map_err(|e| format!("Failed to read file: {}", e))?;

    Ok(mpeg.id3v2().cloned())
}
