//! Job label truncation

/// Appended to names cut at the maximum display length
pub const TRUNCATION_MARKER: &str = "...";

/// Default maximum number of characters shown for a job name
pub const DEFAULT_MAX_LABEL_LENGTH: usize = 16;

/// Truncates `name` to `max_length` characters, appending the marker when cut
///
/// Length is counted in characters, so multi-byte names are never split
/// inside a code point.
pub fn truncate_label(name: &str, max_length: usize) -> String {
    match name.char_indices().nth(max_length) {
        Some((cut, _)) => format!("{}{}", &name[..cut], TRUNCATION_MARKER),
        None => name.to_string(),
    }
}
