// Audio module - file detection, metadata reading on acquisition, and tag writing on export

pub mod detection;
pub mod metadata;
pub mod metadata_writer;

pub use detection::{find_mp3_files, is_mp3, parse_drop_paths};
pub use metadata::{acquire_track, file_stem_title, get_audio_duration, read_title};
pub use metadata_writer::{write_export_tags, ExportTags};
