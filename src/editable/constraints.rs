//! Edit constraints: length limit and character filter for a field.

use super::buffer::DEFAULT_MAX_LENGTH;

/// Character filter function type
/// Returns true if character is allowed
pub type CharFilter = fn(char) -> bool;

/// Default filter: printable characters except the section sign and DEL.
pub fn is_allowed_character(ch: char) -> bool {
    ch != '§' && ch >= ' ' && ch != '\u{7f}'
}

/// Drop every character the filter rejects
pub fn filter_allowed(text: &str, filter: CharFilter) -> String {
    text.chars().filter(|&c| filter(c)).collect()
}

/// Constraints that limit what a field accepts.
#[derive(Debug, Clone, Copy)]
pub struct EditConstraints {
    /// Maximum length in characters
    pub max_length: usize,

    /// Characters that typing or pasting may insert
    pub char_filter: CharFilter,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            char_filter: is_allowed_character,
        }
    }
}

impl EditConstraints {
    /// No practical length limit, default filter
    pub fn unlimited() -> Self {
        Self {
            max_length: usize::MAX,
            char_filter: is_allowed_character,
        }
    }

    /// Numeric input constraints (digits only)
    pub fn numeric() -> Self {
        Self {
            max_length: 10,
            char_filter: |c| c.is_ascii_digit(),
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Check if a character passes the filter
    pub fn is_char_allowed(&self, ch: char) -> bool {
        (self.char_filter)(ch)
    }

    /// Strip disallowed characters from raw input
    pub fn sanitize(&self, raw: &str) -> String {
        filter_allowed(raw, self.char_filter)
    }
}
