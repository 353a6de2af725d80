//! File-safe display names

/// Reduce a display name to characters that are safe in a path segment.
///
/// Keeps alphanumerics (any script), space and hyphen. Path separators
/// become spaces so the words around them stay apart; every other
/// character is dropped. The result is trimmed.
///
/// ```
/// use pcloud_fs::file_safe_name;
///
/// assert_eq!(file_safe_name("Song: Title/Test"), "Song Title Test");
/// ```
pub fn file_safe_name(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\') { ' ' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
        .collect::<String>()
        .trim()
        .to_string()
}
