//! Export pipeline
//!
//! - [`sanitize`] turns free-form titles into safe file names
//! - [`validate`] rejects albums that cannot be exported, before any I/O
//! - [`export_album`] copies and retags every track in order

mod orchestrator;
mod sanitize;
mod validate;


pub use orchestrator::{album_dir, export_album, export_file_name};
pub use sanitize::{sanitize, UNTITLED};
pub use validate::validate;
