//! Common utility functions shared across the codebase.

/// Returns at most `max_chars` characters of `text`.
///
/// Counts characters rather than bytes, so multi-byte text is never split
/// inside a code point.
///
/// # Examples
///
/// ```
/// use resdupe::utils::truncate_chars;
///
/// assert_eq!(truncate_chars("Settings", 3), "Set");
/// assert_eq!(truncate_chars("Größe", 3), "Grö");
/// assert_eq!(truncate_chars("OK", 80), "OK");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Picks `singular` when `count` is one, `plural` otherwise.
pub fn pluralize(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}
