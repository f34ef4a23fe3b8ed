//! Test fixtures for audio file tests
//!
//! Generates small but valid MP3 files (silent MPEG-1 Layer III frames)
//! so tag reading and writing can be tested without an external encoder.

#![cfg(test)]

use std::path::Path;

use lofty::id3::v2::Id3v2Tag;
use lofty::{Accessor, TagExt, TaggedFileExt};

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo, no CRC
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];

/// 144 * 128000 / 44100, no padding
const FRAME_LEN: usize = 417;

/// Write an untagged MP3 made of `frames` silent frames
pub fn write_silent_mp3(path: &Path, frames: usize) {
    let mut data = Vec::with_capacity(frames * FRAME_LEN);
    for _ in 0..frames {
        data.extend_from_slice(&FRAME_HEADER);
        data.resize(data.len() + FRAME_LEN - FRAME_HEADER.len(), 0);
    }
    std::fs::write(path, data).expect("Failed to write fixture MP3");
}

/// Tags to embed in a fixture file
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTags<'a> {
    pub title: Option<&'a str>,
    pub artist: Option<&'a str>,
    pub genre: Option<&'a str>,
}

/// Write an MP3 with an ID3v2 tag holding the given fields
pub fn write_tagged_mp3(path: &Path, tags: &FixtureTags<'_>) {
    write_silent_mp3(path, 20);

    let mut tag = Id3v2Tag::default();
    if let Some(title) = tags.title {
        tag.set_title(title.to_string());
    }
    if let Some(artist) = tags.artist {
        tag.set_artist(artist.to_string());
    }
    if let Some(genre) = tags.genre {
        tag.set_genre(genre.to_string());
    }
    tag.save_to_path(path).expect("Failed to tag fixture MP3");
}

/// Tag values read back from a file
#[derive(Debug, Default)]
pub struct ReadTags {
    pub track: Option<u32>,
    pub album: Option<String>,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
}

/// Read back the primary tag of a file
pub fn read_fixture_tags(path: &Path) -> ReadTags {
    let tagged_file = lofty::read_from_path(path).expect("Failed to read fixture MP3");
    let Some(tag) = tagged_file.primary_tag() else {
        return ReadTags::default();
    };

    ReadTags {
        track: tag.track(),
        album: tag.album().map(|s| s.to_string()),
        artist: tag.artist().map(|s| s.to_string()),
        title: tag.title().map(|s| s.to_string()),
        genre: tag.genre().map(|s| s.to_string()),
    }
}

/// Write `count` distinct fixture files into `dir`, returning their paths
pub fn write_source_files(dir: &Path, count: usize) -> Vec<std::path::PathBuf> {
    (1..=count)
        .map(|i| {
            let path = dir.join(format!("source_{}.mp3", i));
            write_silent_mp3(&path, 10 + i);
            path
        })
        .collect()
}
