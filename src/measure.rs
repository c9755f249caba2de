//! Text measurement for viewport and hit-testing.
//!
//! The engine never rasterizes glyphs. It only needs to know how wide a
//! run of characters is and which prefix/suffix fits a pixel budget.

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;
use fontdue::{Font, FontSettings};

/// Pixel-width measurement of text.
///
/// Implementors supply per-character advances; the fitting helpers are
/// derived from them by summing advances left to right (or right to left).
pub trait TextMeasure {
    /// Horizontal advance of one character, in pixels
    fn char_width(&self, ch: char) -> f32;

    /// Rendered width of `text`
    fn width(&self, text: &str) -> f32 {
        text.chars().map(|c| self.char_width(c)).sum()
    }

    /// Longest prefix of `text` whose width is at most `max_width`
    fn fit<'a>(&self, text: &'a str, max_width: f32) -> &'a str {
        let mut used = 0.0;
        for (idx, ch) in text.char_indices() {
            used += self.char_width(ch);
            if used > max_width {
                return &text[..idx];
            }
        }
        text
    }

    /// Longest suffix of `text` whose width is at most `max_width`
    fn fit_from_end<'a>(&self, text: &'a str, max_width: f32) -> &'a str {
        let mut used = 0.0;
        let mut start = text.len();
        for (idx, ch) in text.char_indices().rev() {
            used += self.char_width(ch);
            if used > max_width {
                break;
            }
            start = idx;
        }
        &text[start..]
    }
}

/// Every character has the same advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl MonospaceMeasure {
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(6.0)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn char_width(&self, _ch: char) -> f32 {
        self.advance
    }
}

/// Advances taken from a real font via fontdue, cached per character.
pub struct FontMeasure {
    font: Font,
    font_size: f32,
    advances: RefCell<HashMap<char, f32>>,
}

impl FontMeasure {
    pub fn new(font: Font, font_size: f32) -> Self {
        Self {
            font,
            font_size,
            advances: RefCell::new(HashMap::new()),
        }
    }

    /// Parse a TTF/OTF font from raw bytes
    pub fn from_bytes(data: &[u8], font_size: f32) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to load font: {}", e))?;
        Ok(Self::new(font, font_size))
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

impl TextMeasure for FontMeasure {
    fn char_width(&self, ch: char) -> f32 {
        if let Some(&advance) = self.advances.borrow().get(&ch) {
            return advance;
        }
        let advance = self.font.metrics(ch, self.font_size).advance_width;
        self.advances.borrow_mut().insert(ch, advance);
        advance
    }
}
