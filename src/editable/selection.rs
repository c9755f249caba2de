//! Cursor and selection anchor over a single-line buffer.

/// Clamp a signed position into `[0, len]`
pub fn clamp_position(pos: isize, len: usize) -> usize {
    if pos <= 0 {
        0
    } else {
        (pos as usize).min(len)
    }
}

/// A text selection with a cursor (caret) and an anchor (the other edge).
///
/// `cursor == anchor` means nothing is selected. Both are character
/// indices and are kept inside `[0, len]` by every setter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where typed text goes
    pub cursor: usize,
    /// The non-cursor edge of the selection
    pub anchor: usize,
}

impl Selection {
    pub fn new(cursor: usize, anchor: usize) -> Self {
        Self { cursor, anchor }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            cursor: pos,
            anchor: pos,
        }
    }

    /// Check if there is a non-empty selection
    pub fn has_selection(&self) -> bool {
        self.cursor != self.anchor
    }

    /// Lower edge of the selection
    pub fn low(&self) -> usize {
        self.cursor.min(self.anchor)
    }

    /// Upper edge of the selection
    pub fn high(&self) -> usize {
        self.cursor.max(self.anchor)
    }

    /// Number of selected characters
    pub fn span(&self) -> usize {
        self.high() - self.low()
    }

    /// Move the cursor and collapse the selection onto it
    pub fn set_cursor(&mut self, pos: isize, len: usize) {
        let pos = clamp_position(pos, len);
        self.cursor = pos;
        self.anchor = pos;
    }

    /// Move only the anchor, keeping the cursor (shift-extension)
    pub fn set_anchor(&mut self, pos: isize, len: usize) {
        self.anchor = clamp_position(pos, len);
    }

    /// Collapse to `anchor + delta`.
    ///
    /// Resolves from the anchor, not the cursor. Callers wanting a
    /// collapse toward a particular edge must place the anchor first.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        self.set_cursor((self.anchor as isize).saturating_add(delta), len);
    }

    /// Re-clamp both edges after the buffer shrank
    pub fn clamp_to(&mut self, len: usize) {
        self.cursor = self.cursor.min(len);
        self.anchor = self.anchor.min(len);
    }
}
