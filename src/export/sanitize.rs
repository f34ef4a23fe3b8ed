/// Name used when sanitizing leaves nothing behind
pub const UNTITLED: &str = "Untitled";

/// Characters not allowed in file names on common file systems
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Make a string safe to use as a file or folder name
///
/// Illegal characters are removed (not replaced), then leading and
/// trailing dots and spaces are trimmed. Distinct inputs can map to the
/// same output; the export validator reports those collisions.
pub fn sanitize(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| !ILLEGAL_CHARS.contains(c)).collect();
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == ' ');

    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}
