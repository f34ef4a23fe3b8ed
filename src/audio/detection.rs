use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check if a file is an MP3 based on its extension
pub fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

/// Find all MP3 files under a directory, sorted by path
pub fn find_mp3_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && is_mp3(e.path()))
        .map(|e| e.into_path())
        .collect();

    files.sort();
    files
}

/// Split a drag-and-drop payload into individual paths
///
/// Paths containing spaces arrive wrapped in braces (`{/my music/a.mp3}`);
/// everything else is separated by single spaces.
pub fn parse_drop_paths(data: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut rest = data;

    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }

        if let Some(inner) = rest.strip_prefix('{') {
            match inner.find('}') {
                Some(end) => {
                    paths.push(inner[..end].to_string());
                    rest = &inner[end + 1..];
                }
                None => {
                    // Unterminated brace: take the remainder as one path
                    paths.push(inner.to_string());
                    break;
                }
            }
        } else {
            let end = rest.find(' ').unwrap_or(rest.len());
            paths.push(rest[..end].to_string());
            rest = &rest[end..];
        }
    }

    paths
}
