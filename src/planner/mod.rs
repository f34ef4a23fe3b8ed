//! Planner session - everything the user can do with an album
//!
//! Features:
//! - Adding MP3 files (single files, dropped payloads, whole folders)
//! - Removing, reordering and renaming tracks
//! - Capacity feedback against the 80 minute limit
//! - Export to the chosen output folder
//! - Saving and opening project files
//!
//! The presentation layer owns an [`AlbumPlanner`], calls these methods
//! from its event handlers, and shows returned errors in notifications.


use std::path::{Path, PathBuf};

use crate::audio::{acquire_track, find_mp3_files, is_mp3, parse_drop_paths};
use crate::core::{format_duration, AlbumProject, AppSettings, CapacityLevel, Track};
use crate::error::PlannerError;
use crate::export::export_album;
use crate::project_io::{load_project, save_project, with_project_extension, LoadedProject};

/// Why a path was not added as a track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotMp3,
    NotFound,
}

/// A path that was not added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFile {
    pub path: PathBuf,
    pub reason: RejectReason,
}

impl RejectedFile {
    /// Message suitable for a warning notification
    pub fn message(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string());
        match self.reason {
            RejectReason::NotMp3 => format!("Not an MP3:\n{}", name),
            RejectReason::NotFound => format!("File not found:\n{}", self.path.display()),
        }
    }
}

/// Outcome of adding files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddReport {
    pub added: usize,
    pub rejected: Vec<RejectedFile>,
}

/// Snapshot of running time against capacity, for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitySummary {
    pub total_secs: f64,
    pub remaining_secs: f64,
    pub over_by_secs: f64,
    /// 0.0..=1.0, for a progress bar
    pub fill_ratio: f64,
    pub level: CapacityLevel,
}

impl CapacitySummary {
    pub fn from_project(project: &AlbumProject) -> Self {
        Self {
            total_secs: project.total_duration(),
            remaining_secs: project.remaining(),
            over_by_secs: project.over_by(),
            fill_ratio: project.fill_ratio(),
            level: project.capacity_level(),
        }
    }

    pub fn total_label(&self) -> String {
        format_duration(self.total_secs)
    }

    pub fn remaining_label(&self) -> String {
        format_duration(self.remaining_secs)
    }

    /// "Over limit by m:ss" when over capacity
    pub fn warning(&self) -> Option<String> {
        match self.level {
            CapacityLevel::Over => {
                Some(format!("Over limit by {}", format_duration(self.over_by_secs)))
            }
            CapacityLevel::Comfortable | CapacityLevel::Tight => None,
        }
    }
}

/// An interactive album editing session
#[derive(Debug, Clone, Default)]
pub struct AlbumPlanner {
    project: AlbumProject,
    output_dir: Option<PathBuf>,
    project_path: Option<PathBuf>,
    has_unsaved_changes: bool,
    settings: AppSettings,
}

impl AlbumPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session that remembers the last used output folder
    pub fn with_settings(settings: AppSettings) -> Self {
        let output_dir = settings
            .last_output_dir
            .clone()
            .filter(|dir| dir.is_dir());
        Self {
            output_dir,
            settings,
            ..Self::default()
        }
    }

    pub fn project(&self) -> &AlbumProject {
        &self.project
    }

    pub fn tracks(&self) -> &[Track] {
        &self.project.tracks
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn project_path(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_unsaved_changes
    }

    /// Discard the current album and start an empty one
    pub fn new_project(&mut self) {
        self.project = AlbumProject::new();
        self.project_path = None;
        self.has_unsaved_changes = false;
    }

    /// Add MP3 files; directories contribute every MP3 inside them
    pub fn add_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> AddReport {
        let mut report = AddReport::default();

        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                for file in find_mp3_files(path) {
                    self.project.push_track(acquire_track(&file));
                    report.added += 1;
                }
                continue;
            }

            let reason = if !is_mp3(path) {
                Some(RejectReason::NotMp3)
            } else if !path.exists() {
                Some(RejectReason::NotFound)
            } else {
                None
            };

            match reason {
                Some(reason) => {
                    log::warn!("Skipping {:?}: {:?}", path, reason);
                    report.rejected.push(RejectedFile {
                        path: path.to_path_buf(),
                        reason,
                    });
                }
                None => {
                    self.project.push_track(acquire_track(path));
                    report.added += 1;
                }
            }
        }

        if report.added > 0 {
            self.has_unsaved_changes = true;
            log::info!("Added {} tracks", report.added);
        }
        report
    }

    /// Add the files named in a drag-and-drop payload
    pub fn add_dropped(&mut self, data: &str) -> AddReport {
        let paths: Vec<PathBuf> = parse_drop_paths(data)
            .into_iter()
            .map(PathBuf::from)
            .collect();
        self.add_files(&paths)
    }

    pub fn remove_track(&mut self, index: usize) -> Option<Track> {
        let removed = self.project.remove_track(index);
        if removed.is_some() {
            self.has_unsaved_changes = true;
        }
        removed
    }

    /// Remove the selected tracks
    pub fn remove_tracks(&mut self, indices: &[usize]) -> usize {
        let removed = self.project.remove_tracks(indices);
        if removed > 0 {
            self.has_unsaved_changes = true;
        }
        removed
    }

    /// Move a track so it ends up at `to` (drag-release)
    pub fn move_track(&mut self, from: usize, to: usize) -> bool {
        let moved = self.project.move_track(from, to);
        if moved {
            self.has_unsaved_changes = true;
        }
        moved
    }

    pub fn rename_track(&mut self, index: usize, title: impl Into<String>) -> bool {
        let renamed = self.project.rename_track(index, title);
        if renamed {
            self.has_unsaved_changes = true;
        }
        renamed
    }

    pub fn set_band_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.project.band_name != name {
            self.project.band_name = name;
            self.has_unsaved_changes = true;
        }
    }

    pub fn set_album_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.project.album_name != name {
            self.project.album_name = name;
            self.has_unsaved_changes = true;
        }
    }

    pub fn capacity(&self) -> CapacitySummary {
        CapacitySummary::from_project(&self.project)
    }

    /// Export is offered once there is at least one track
    pub fn can_export(&self) -> bool {
        !self.project.is_empty()
    }

    pub fn set_output_dir(&mut self, dir: impl Into<PathBuf>) {
        self.output_dir = Some(dir.into());
    }

    /// Export to the chosen output folder
    pub fn export(&mut self) -> Result<Vec<PathBuf>, PlannerError> {
        let dest = self.output_dir.clone().ok_or(PlannerError::NoOutputDir)?;
        self.export_to(&dest)
    }

    /// Export to `dest` and remember it as the output folder
    pub fn export_to(&mut self, dest: &Path) -> Result<Vec<PathBuf>, PlannerError> {
        let created = export_album(&self.project, dest)?;
        self.output_dir = Some(dest.to_path_buf());
        self.settings.last_output_dir = Some(dest.to_path_buf());
        Ok(created)
    }

    /// Save the project; the project extension is added if missing
    ///
    /// Returns the path actually written.
    pub fn save(&mut self, path: &Path) -> Result<PathBuf, PlannerError> {
        let path = with_project_extension(path);
        save_project(&self.project, &path)?;

        self.settings.add_recent_project(&path);
        self.project_path = Some(path.clone());
        self.has_unsaved_changes = false;
        Ok(path)
    }

    /// Replace the current album with one read from disk
    ///
    /// Returns the `original_filename`s of tracks whose source is missing.
    pub fn load(&mut self, path: &Path) -> Result<Vec<String>, PlannerError> {
        let LoadedProject {
            project,
            missing_files,
        } = load_project(path)?;

        self.project = project;
        self.settings.add_recent_project(path);
        self.project_path = Some(path.to_path_buf());
        self.has_unsaved_changes = false;
        Ok(missing_files)
    }
}
