//! Horizontal scroll state for a single-line field.

use crate::measure::TextMeasure;
use crate::util::{char_len, split_at_char};

/// Index of the first visible character.
///
/// Always within `[0, len]` of the content it was last recomputed against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_offset: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the scroll offset so `target` stays visible within `width` pixels.
    ///
    /// When the target sits exactly on the left edge the window jumps left
    /// by as much preceding text as fits, so backward edits keep context in
    /// view. Otherwise the window scrolls the minimum needed to reveal the
    /// target on the right or left edge.
    pub fn recompute(
        &mut self,
        content: &str,
        target: usize,
        width: f32,
        measure: &dyn TextMeasure,
    ) {
        let len = char_len(content);
        if self.scroll_offset > len {
            self.scroll_offset = len;
        }

        let (before, after) = split_at_char(content, self.scroll_offset);
        let visible_end = self.scroll_offset + char_len(measure.fit(after, width));

        if target == self.scroll_offset {
            let context = char_len(measure.fit_from_end(before, width));
            self.scroll_offset -= context;
        } else if target > visible_end {
            self.scroll_offset += target - visible_end;
        } else if target <= self.scroll_offset {
            self.scroll_offset = target;
        }

        self.scroll_offset = self.scroll_offset.min(len);
        tracing::trace!(
            caret = target,
            visible_end,
            scroll_offset = self.scroll_offset,
            "viewport recompute"
        );
    }

    /// Shift by whole characters, clamped to `[0, len]` (drag auto-scroll).
    pub fn scroll_by(&mut self, delta: isize, len: usize) {
        let next = (self.scroll_offset as isize).saturating_add(delta);
        self.scroll_offset = next.clamp(0, len as isize) as usize;
    }

    /// The slice of `content` currently on screen
    pub fn visible<'a>(&self, content: &'a str, width: f32, measure: &dyn TextMeasure) -> &'a str {
        let (_, after) = split_at_char(content, self.scroll_offset);
        measure.fit(after, width)
    }
}
