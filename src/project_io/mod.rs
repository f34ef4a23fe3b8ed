// Project file module - saving and loading album projects

pub mod storage;
pub mod types;

pub use storage::{
    load_project, save_project, with_project_extension, LoadedProject, PROJECT_EXTENSION,
};
pub use types::{SavedProject, SavedTrack, FORMAT_VERSION};
