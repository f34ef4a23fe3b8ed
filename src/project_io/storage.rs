//! Saving and loading `.albumplan` project files

use std::fs;
use std::path::{Path, PathBuf};

use super::types::SavedProject;
use crate::core::AlbumProject;
use crate::error::ProjectError;

/// File extension for project files
pub const PROJECT_EXTENSION: &str = "albumplan";

/// A project read from disk
#[derive(Debug, Clone)]
pub struct LoadedProject {
    pub project: AlbumProject,
    /// `original_filename` of every track whose source file is gone
    ///
    /// Those tracks are still part of `project`.
    pub missing_files: Vec<String>,
}

impl LoadedProject {
    pub fn has_missing_files(&self) -> bool {
        !self.missing_files.is_empty()
    }

    /// Warning text for the missing files, if there are any
    pub fn missing_files_message(&self) -> Option<String> {
        if self.missing_files.is_empty() {
            return None;
        }
        Some(format!(
            "These source files were not found:\n{}",
            self.missing_files.join("\n")
        ))
    }
}

/// Append the project extension if `path` has none
pub fn with_project_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(PROJECT_EXTENSION)
    }
}

/// Save a project to a file
pub fn save_project(project: &AlbumProject, path: &Path) -> Result<(), ProjectError> {
    let saved = SavedProject::from_project(project);
    let json = serde_json::to_string_pretty(&saved).map_err(ProjectError::Serialize)?;

    fs::write(path, json).map_err(|source| ProjectError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Saved project \"{}\" ({} tracks) to {}",
        project.album_name,
        project.tracks.len(),
        path.display()
    );
    Ok(())
}

/// Load a project from a file
///
/// Tracks whose source file no longer exists are kept and reported in
/// [`LoadedProject::missing_files`].
pub fn load_project(path: &Path) -> Result<LoadedProject, ProjectError> {
    let contents = fs::read_to_string(path).map_err(|source| ProjectError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let saved: SavedProject =
        serde_json::from_str(&contents).map_err(|source| ProjectError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let project = saved.into_project();
    let missing_files: Vec<String> = project
        .tracks
        .iter()
        .filter(|t| !t.source_exists())
        .map(|t| t.original_filename.clone())
        .collect();

    if !missing_files.is_empty() {
        log::warn!(
            "Project {} references {} missing source files: {:?}",
            path.display(),
            missing_files.len(),
            missing_files
        );
    }
    log::info!(
        "Loaded project \"{}\" ({} tracks) from {}",
        project.album_name,
        project.tracks.len(),
        path.display()
    );

    Ok(LoadedProject {
        project,
        missing_files,
    })
}
