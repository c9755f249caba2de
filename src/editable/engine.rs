//! EditEngine - buffer, selection, viewport and history for one field.
//!
//! Every command leaves the field consistent: cursor and anchor inside
//! `[0, len]`, the scroll offset recomputed, and the listener told about
//! the new text at most once. A command whose candidate text is rejected
//! by the validator changes nothing.

use std::fmt;

use crate::measure::TextMeasure;
use crate::util::char_len;

use super::buffer::{truncate_chars, TextBuffer};
use super::constraints::{filter_allowed, CharFilter, EditConstraints};
use super::history::{EditHistory, FieldSnapshot};
use super::listener::{ChangeListener, FieldId};
use super::selection::{clamp_position, Selection};
use super::viewport::Viewport;
use super::word::word_boundary;

/// Editing state and commands for a single-line field.
pub struct EditEngine {
    id: FieldId,
    buffer: TextBuffer,
    selection: Selection,
    viewport: Viewport,
    history: EditHistory,
    char_filter: CharFilter,
    measure: Box<dyn TextMeasure>,
    listener: Option<Box<dyn ChangeListener>>,
    /// Pixel width available to the text
    width: f32,
}

impl fmt::Debug for EditEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditEngine")
            .field("id", &self.id)
            .field("buffer", &self.buffer)
            .field("selection", &self.selection)
            .field("viewport", &self.viewport)
            .field("history", &self.history)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl EditEngine {
    pub fn new(
        id: FieldId,
        constraints: EditConstraints,
        measure: impl TextMeasure + 'static,
        width: f32,
    ) -> Self {
        Self {
            id,
            buffer: TextBuffer::new(constraints.max_length),
            selection: Selection::default(),
            viewport: Viewport::new(),
            history: EditHistory::new(),
            char_filter: constraints.char_filter,
            measure: Box::new(measure),
            listener: None,
            width,
        }
    }

    /// Attach the owner's change callback
    pub fn with_listener(mut self, listener: impl ChangeListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Gate every mutation on `validator`
    pub fn with_validator(mut self, validator: impl Fn(&str) -> bool + 'static) -> Self {
        self.buffer.set_validator(validator);
        self
    }

    /// Keep at most `depth` undo steps
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history = EditHistory::with_max_size(depth);
        self
    }

    /// Seed initial content without notifying or recording history
    pub fn with_text(mut self, text: &str) -> Self {
        self.buffer.restore(text);
        self.set_cursor(self.buffer.len() as isize);
        self
    }

    pub fn set_listener(&mut self, listener: Option<Box<dyn ChangeListener>>) {
        self.listener = listener;
    }

    pub fn set_validator(&mut self, validator: impl Fn(&str) -> bool + 'static) {
        self.buffer.set_validator(validator);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.buffer.max_length()
    }

    pub fn cursor(&self) -> usize {
        self.selection.cursor
    }

    pub fn anchor(&self) -> usize {
        self.selection.anchor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        self.selection.has_selection()
    }

    pub fn selected_text(&self) -> &str {
        self.buffer
            .slice(self.selection.low(), self.selection.high())
            .unwrap_or_default()
    }

    pub fn scroll_offset(&self) -> usize {
        self.viewport.scroll_offset
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn measure(&self) -> &dyn TextMeasure {
        self.measure.as_ref()
    }

    /// The part of the text that fits in the field starting at the scroll offset
    pub fn visible_text(&self) -> &str {
        self.viewport
            .visible(self.buffer.as_str(), self.width, self.measure.as_ref())
    }

    /// Text from the scroll offset to the end, regardless of width
    pub fn scrolled_text(&self) -> &str {
        self.buffer.tail(self.viewport.scroll_offset)
    }

    /// Character index under a pixel offset from the left edge of the text area
    pub fn position_at(&self, x: f32) -> usize {
        let visible = self.visible_text();
        let hit = self.measure.fit(visible, x.max(0.0));
        char_len(hit) + self.viewport.scroll_offset
    }

    pub fn is_char_allowed(&self, ch: char) -> bool {
        (self.char_filter)(ch)
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new(
            self.buffer.as_str(),
            self.selection.cursor,
            self.selection.anchor,
        )
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Index `steps` words away from the cursor, skipping whitespace
    pub fn word_boundary_from_cursor(&self, steps: isize) -> usize {
        self.word_boundary_from(self.selection.cursor, steps)
    }

    /// Index `steps` words away from `pos`, skipping whitespace
    pub fn word_boundary_from(&self, pos: usize, steps: isize) -> usize {
        word_boundary(self.buffer.as_str(), pos, steps, true)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move the cursor and collapse the selection
    pub fn set_cursor(&mut self, pos: isize) {
        self.selection.set_cursor(pos, self.buffer.len());
        self.refresh_viewport();
    }

    /// Move the anchor only, extending or shrinking the selection
    pub fn set_anchor(&mut self, pos: isize) {
        self.selection.set_anchor(pos, self.buffer.len());
        self.refresh_viewport();
    }

    /// Collapse to `anchor + delta`
    pub fn move_by(&mut self, delta: isize) {
        self.selection.move_by(delta, self.buffer.len());
        self.refresh_viewport();
    }

    pub fn cursor_to_start(&mut self) {
        self.set_cursor(0);
    }

    pub fn cursor_to_end(&mut self) {
        self.set_cursor(self.buffer.len() as isize);
    }

    /// Cursor at the end, anchor at the start
    pub fn select_all(&mut self) {
        self.cursor_to_end();
        self.set_anchor(0);
    }

    /// Change the pixel width available to the text
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.refresh_viewport();
    }

    /// Place the anchor without touching the scroll offset (drag-selection)
    pub fn drag_anchor_to(&mut self, pos: usize) {
        self.selection.set_anchor(pos as isize, self.buffer.len());
    }

    /// Shift the visible window by whole characters (drag auto-scroll)
    pub fn scroll_by(&mut self, delta: isize) {
        self.viewport.scroll_by(delta, self.buffer.len());
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Replace the selection with `raw`, filtered and cut to the space left.
    ///
    /// Returns `true` if the validator accepted the result.
    pub fn insert_text(&mut self, raw: &str) -> bool {
        self.record_before_mutation();
        self.write_text(raw)
    }

    /// Delete `count` characters from the cursor (negative = backward).
    ///
    /// An active selection is deleted instead, whatever `count` is.
    pub fn delete_from_cursor(&mut self, count: isize) -> bool {
        self.record_before_mutation();
        self.delete_chars(count)
    }

    /// Delete up to the word boundary `count` words from the cursor
    pub fn delete_words(&mut self, count: isize) -> bool {
        self.record_before_mutation();
        if self.buffer.is_empty() {
            return false;
        }
        if self.selection.has_selection() {
            return self.write_text("");
        }
        let boundary = self.word_boundary_from_cursor(count) as isize;
        self.delete_chars(boundary - self.selection.cursor as isize)
    }

    /// Replace all content and move the cursor to the end.
    ///
    /// The validator sees `text` before it is cut to the maximum length.
    /// Not recorded in history. Notifies only if the text actually changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        let previous = self.buffer.as_str().to_string();
        if !self.buffer.replace_all(text) {
            return false;
        }
        self.cursor_to_end();
        if self.buffer.as_str() != previous {
            self.notify();
        }
        true
    }

    /// Change the maximum length, truncating and notifying if content shrank
    pub fn set_max_length(&mut self, max_length: usize) {
        if self.buffer.set_max_length(max_length) {
            self.selection.clamp_to(self.buffer.len());
            self.refresh_viewport();
            self.notify();
        }
    }

    /// Restore the state before the last recorded edit
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        let Some(previous) = self.history.undo(current) else {
            return false;
        };
        self.apply_snapshot(&previous);
        self.history.end_restore();
        true
    }

    /// Re-apply the state the last undo replaced
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        let Some(next) = self.history.redo(current) else {
            return false;
        };
        self.apply_snapshot(&next);
        self.history.end_restore();
        true
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn record_before_mutation(&mut self) {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
    }

    fn write_text(&mut self, raw: &str) -> bool {
        let filtered = filter_allowed(raw, self.char_filter);
        let low = self.selection.low();
        let high = self.selection.high();

        let available = self
            .buffer
            .max_length()
            .saturating_add(self.selection.span())
            .saturating_sub(self.buffer.len());
        let inserted = truncate_chars(&filtered, available);
        let inserted_len = char_len(inserted);

        let candidate = format!(
            "{}{}{}",
            self.buffer.head(low),
            inserted,
            self.buffer.tail(high)
        );
        if !self.buffer.set_content(&candidate) {
            return false;
        }

        self.set_cursor((low + inserted_len) as isize);
        self.notify();
        true
    }

    fn delete_chars(&mut self, count: isize) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        if self.selection.has_selection() {
            return self.write_text("");
        }

        let len = self.buffer.len();
        let cursor = self.selection.cursor as isize;
        let backward = count < 0;
        let (start, end) = if backward {
            (cursor.saturating_add(count), cursor)
        } else {
            (cursor, cursor.saturating_add(count))
        };

        let candidate = format!(
            "{}{}",
            self.buffer.head(clamp_position(start, len)),
            self.buffer.tail(clamp_position(end, len))
        );
        if !self.buffer.set_content(&candidate) {
            return false;
        }

        if backward {
            self.move_by(count);
        } else {
            self.selection.clamp_to(self.buffer.len());
            self.refresh_viewport();
        }
        self.notify();
        true
    }

    fn apply_snapshot(&mut self, snapshot: &FieldSnapshot) {
        let changed = self.buffer.as_str() != snapshot.text;
        self.buffer.restore(&snapshot.text);
        self.set_cursor(snapshot.cursor as isize);
        self.set_anchor(snapshot.anchor as isize);
        if changed {
            self.notify();
        }
    }

    fn refresh_viewport(&mut self) {
        self.viewport.recompute(
            self.buffer.as_str(),
            self.selection.anchor,
            self.width,
            self.measure.as_ref(),
        );
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_value_changed(self.id, self.buffer.as_str());
        }
    }
}
