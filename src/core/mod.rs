//! Core application model and state
//!
//! This module contains:
//! - The album aggregate and its track descriptors
//! - Capacity feedback (running time against the 80 minute limit)
//! - Application-wide settings
//! - Duration formatting for display

mod format;
mod project;
mod state;

pub use format::format_duration;
pub use project::{AlbumProject, CapacityLevel, Track, CAPACITY_SECS, TIGHT_SECS};
pub use state::{AppSettings, MAX_RECENT_PROJECTS};
