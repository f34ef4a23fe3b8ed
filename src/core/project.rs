//! The album being planned: band/album names plus an ordered track list
//!
//! Track order is significant: it becomes the track number on export.

use std::path::{Path, PathBuf};

/// Reference running time of the album (80 minutes)
pub const CAPACITY_SECS: f64 = 4800.0;

/// Running time above which the album is getting close to capacity (60 minutes)
pub const TIGHT_SECS: f64 = 3600.0;

/// One audio file in the album
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub source_path: PathBuf,
    /// Display name, editable by the user
    pub title: String,
    duration_secs: f64,
    /// File name at the time the track was added
    pub original_filename: String,
}

impl Track {
    /// Create a track. Negative or non-finite durations are stored as zero.
    pub fn new(
        source_path: PathBuf,
        title: String,
        duration_secs: f64,
        original_filename: String,
    ) -> Self {
        let duration_secs = if duration_secs.is_finite() && duration_secs > 0.0 {
            duration_secs
        } else {
            0.0
        };

        Self {
            source_path,
            title,
            duration_secs,
            original_filename,
        }
    }

    /// Duration in seconds, fixed when the track was acquired
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn source_exists(&self) -> bool {
        Path::new(&self.source_path).exists()
    }
}

/// How full the album is relative to [`CAPACITY_SECS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLevel {
    /// Up to 60 minutes
    Comfortable,
    /// Over 60 minutes, still within capacity
    Tight,
    /// Over capacity
    Over,
}

/// In-memory album aggregate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumProject {
    pub band_name: String,
    pub album_name: String,
    pub tracks: Vec<Track>,
}

impl AlbumProject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn push_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Remove the track at `index`, if there is one
    pub fn remove_track(&mut self, index: usize) -> Option<Track> {
        if index < self.tracks.len() {
            Some(self.tracks.remove(index))
        } else {
            None
        }
    }

    /// Remove several tracks at once (a multi-selection)
    ///
    /// Duplicate and out-of-range indices are ignored. Returns how many
    /// tracks were removed.
    pub fn remove_tracks(&mut self, indices: &[usize]) -> usize {
        let mut indices: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.tracks.len())
            .collect();
        indices.sort_unstable();
        indices.dedup();

        // Highest first so earlier indices stay valid
        for &i in indices.iter().rev() {
            self.tracks.remove(i);
        }
        indices.len()
    }

    /// Move a track so that it ends up at index `to`
    ///
    /// Returns false and leaves the list alone if either index is out of
    /// range or the indices are equal.
    pub fn move_track(&mut self, from: usize, to: usize) -> bool {
        let len = self.tracks.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let track = self.tracks.remove(from);
        self.tracks.insert(to, track);
        true
    }

    /// Change the display title of the track at `index`
    pub fn rename_track(&mut self, index: usize, title: impl Into<String>) -> bool {
        match self.tracks.get_mut(index) {
            Some(track) => {
                track.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Sum of all track durations in seconds
    pub fn total_duration(&self) -> f64 {
        self.tracks.iter().map(|t| t.duration_secs()).sum()
    }

    /// Time left before capacity is reached; never negative
    pub fn remaining(&self) -> f64 {
        (CAPACITY_SECS - self.total_duration()).max(0.0)
    }

    pub fn over_limit(&self) -> bool {
        self.total_duration() > CAPACITY_SECS
    }

    /// How far past capacity the album runs; zero when within capacity
    pub fn over_by(&self) -> f64 {
        (self.total_duration() - CAPACITY_SECS).max(0.0)
    }

    /// Share of capacity used, clamped to 1.0 (for progress bars)
    pub fn fill_ratio(&self) -> f64 {
        (self.total_duration() / CAPACITY_SECS).min(1.0)
    }

    pub fn capacity_level(&self) -> CapacityLevel {
        let total = self.total_duration();
        if total > CAPACITY_SECS {
            CapacityLevel::Over
        } else if total > TIGHT_SECS {
            CapacityLevel::Tight
        } else {
            CapacityLevel::Comfortable
        }
    }
}
