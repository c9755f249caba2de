//! Length-limited, validated text storage for a single-line field.
//!
//! All positions in the public API are character indices; the backing
//! `String` is only ever sliced through `util::char_to_byte`.

use std::fmt;

use crate::util::{char_len, char_to_byte};

/// Content validator: returns `true` when a candidate text is acceptable.
pub type Validator = Box<dyn Fn(&str) -> bool>;

/// Default maximum length of a field, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// Errors from read-only buffer queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A range was reversed or reached past the end of the content.
    InvalidRange { start: usize, end: usize, len: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::InvalidRange { start, end, len } => {
                write!(f, "invalid range {}..{} for length {}", start, end, len)
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// Text content with a maximum length and a pluggable validator.
///
/// The buffer knows nothing about cursors or scrolling; callers re-place
/// the selection after every successful mutation.
pub struct TextBuffer {
    text: String,
    max_length: usize,
    validator: Validator,
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("text", &self.text)
            .field("max_length", &self.max_length)
            .finish_non_exhaustive()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl TextBuffer {
    /// Create an empty buffer that accepts any content up to `max_length`.
    pub fn new(max_length: usize) -> Self {
        Self {
            text: String::new(),
            max_length,
            validator: Box::new(|_| true),
        }
    }

    /// Replace the validator used by every subsequent mutation
    pub fn set_validator(&mut self, validator: impl Fn(&str) -> bool + 'static) {
        self.validator = Box::new(validator);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Slice by character indices. Fails if `start > end` or `end > len`.
    pub fn slice(&self, start: usize, end: usize) -> Result<&str, BufferError> {
        let len = self.len();
        if start > end || end > len {
            return Err(BufferError::InvalidRange { start, end, len });
        }
        Ok(&self.text[char_to_byte(&self.text, start)..char_to_byte(&self.text, end)])
    }

    /// Everything from character `start` to the end (clamped).
    pub fn tail(&self, start: usize) -> &str {
        &self.text[char_to_byte(&self.text, start)..]
    }

    /// Everything before character `end` (clamped).
    pub fn head(&self, end: usize) -> &str {
        &self.text[..char_to_byte(&self.text, end)]
    }

    /// Truncate `candidate` to the maximum length, validate it, and store it.
    ///
    /// Returns `true` when the content was replaced.
    pub fn set_content(&mut self, candidate: &str) -> bool {
        let truncated = truncate_chars(candidate, self.max_length);
        if !(self.validator)(truncated) {
            tracing::debug!(candidate = truncated, "validator rejected content");
            return false;
        }
        self.text = truncated.to_string();
        true
    }

    /// Validate the whole of `text`, then store it cut to the maximum length.
    ///
    /// Used for wholesale replacement, where the validator must see the
    /// caller's input before anything is dropped.
    pub fn replace_all(&mut self, text: &str) -> bool {
        if !(self.validator)(text) {
            tracing::debug!(candidate = text, "validator rejected content");
            return false;
        }
        self.text = truncate_chars(text, self.max_length).to_string();
        true
    }

    /// Store content without consulting the validator (history restore).
    pub fn restore(&mut self, content: &str) {
        self.text = truncate_chars(content, self.max_length).to_string();
    }

    /// Change the maximum length, truncating content that no longer fits.
    ///
    /// Returns `true` if the content was shortened.
    pub fn set_max_length(&mut self, max_length: usize) -> bool {
        self.max_length = max_length;
        let byte_len = truncate_chars(&self.text, max_length).len();
        if byte_len < self.text.len() {
            self.text.truncate(byte_len);
            true
        } else {
            false
        }
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
