//! Character-index helpers for `str`

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a character index to a byte offset, clamping past-the-end to `text.len()`
pub fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Split at a character index (clamped)
pub fn split_at_char(text: &str, char_idx: usize) -> (&str, &str) {
    text.split_at(char_to_byte(text, char_idx))
}
