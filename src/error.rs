//! Error types
//!
//! Every error here is meant to end up in a modal notification, so the
//! `Display` text is written for the user.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons an album cannot be exported, detected before touching the disk
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No tracks to export")]
    EmptyTrackList,

    #[error("Album name is required")]
    MissingAlbumName,

    /// Two tracks produce the same file name. Positions are 1-based.
    #[error("Duplicate title \"{title}\" (tracks {first} and {second})")]
    DuplicateTitle {
        title: String,
        first: usize,
        second: usize,
    },
}

/// Failure during an export run
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to create album folder {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy track {position} \"{title}\": {source}")]
    Copy {
        position: usize,
        title: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to tag track {position} \"{title}\": {message}")]
    Tag {
        position: usize,
        title: String,
        message: String,
    },
}

impl ExportError {
    /// The validation failure, if this error happened before any file was written
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ExportError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Failure reading or writing a project file
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Failed to read project file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse project file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize project: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write project file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure reported by the audio output
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Playback failed: {0}")]
pub struct PlaybackError(pub String);

/// Errors surfaced by the planner session
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No output folder selected")]
    NoOutputDir,

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Project(#[from] ProjectError),
}
