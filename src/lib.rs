//! Album Planner
//!
//! Assemble audio files into a named album, reorder and rename tracks,
//! watch the running time against an 80 minute capacity, and export the
//! result as numbered, tagged MP3 copies.
//!
//! The crate has no UI of its own. A presentation layer drives it through
//! [`planner::AlbumPlanner`] and shows the returned errors to the user.

pub mod audio;
pub mod core;
pub mod error;
pub mod export;
pub mod logging;
pub mod planner;
pub mod playback;
pub mod project_io;

#[cfg(test)]
mod test_fixtures;

pub use crate::core::{AlbumProject, CapacityLevel, Track, CAPACITY_SECS};
pub use error::{ExportError, PlannerError, ProjectError, ValidationError};
pub use export::{export_album, sanitize};
pub use planner::AlbumPlanner;
