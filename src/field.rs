//! TextField - an [`EditEngine`] placed on screen.
//!
//! Adds geometry, focus and enabled state, mouse placement and
//! drag-selection on top of the engine. Drawing is left to the host:
//! [`TextField::render_state`] describes what is visible.

use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::editable::{EditConstraints, EditEngine, FieldId};
use crate::measure::TextMeasure;
use crate::util::{char_len, split_at_char};

/// Horizontal inset of the text area when the background is drawn
pub const BACKGROUND_INSET: f32 = 4.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// What a renderer needs to draw a field.
///
/// All indices are relative to `visible_text`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub visible_text: String,
    pub scroll_offset: usize,
    /// Caret index, `None` when it is scrolled out of view
    pub caret: Option<usize>,
    /// Pixel offset of the caret from the left of the text area
    pub caret_x: Option<f32>,
    /// Selected range clipped to the visible slice
    pub selection: Option<(usize, usize)>,
    pub focused: bool,
    pub enabled: bool,
    pub draw_background: bool,
}

#[derive(Debug)]
pub struct TextField {
    engine: EditEngine,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    draw_background: bool,
    focused: bool,
    enabled: bool,
    visible: bool,
    can_lose_focus: bool,
    dragging: bool,
    last_scroll_ms: u64,
    drag_scroll_interval_ms: u64,
}

impl TextField {
    pub fn new(engine: EditEngine, x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut field = Self {
            engine,
            x,
            y,
            width,
            height,
            draw_background: true,
            focused: false,
            enabled: true,
            visible: true,
            can_lose_focus: true,
            dragging: false,
            last_scroll_ms: 0,
            drag_scroll_interval_ms: 40,
        };
        field.sync_text_width();
        field
    }

    /// Build a field with geometry left at zero; place it with [`TextField::set_bounds`]
    pub fn from_config(
        id: FieldId,
        config: &FieldConfig,
        measure: impl TextMeasure + 'static,
    ) -> Self {
        let constraints = EditConstraints::default().with_max_length(config.max_length);
        let engine = EditEngine::new(id, constraints, measure, 0.0)
            .with_history_depth(config.history_depth);

        let mut field = Self::new(engine, 0.0, 0.0, 0.0, 0.0);
        field.draw_background = config.draw_background;
        field.drag_scroll_interval_ms = config.drag_scroll_interval_ms;
        field.sync_text_width();
        field
    }

    pub fn engine(&self) -> &EditEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut EditEngine {
        &mut self.engine
    }

    pub fn text(&self) -> &str {
        self.engine.text()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn set_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self.sync_text_width();
    }

    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.width, self.height)
    }

    pub fn set_draw_background(&mut self, draw_background: bool) {
        self.draw_background = draw_background;
        self.sync_text_width();
    }

    pub fn draw_background(&self) -> bool {
        self.draw_background
    }

    /// Width available to text after the background inset
    pub fn inner_width(&self) -> f32 {
        if self.draw_background {
            (self.width - 2.0 * BACKGROUND_INSET).max(0.0)
        } else {
            self.width
        }
    }

    /// Left edge of the text area
    pub fn text_x(&self) -> f32 {
        if self.draw_background {
            self.x + BACKGROUND_INSET
        } else {
            self.x
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    fn sync_text_width(&mut self) {
        let inner = self.inner_width();
        self.engine.set_width(inner);
    }

    // =========================================================================
    // State flags
    // =========================================================================

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Losing focus collapses the selection and ends any drag
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.engine.move_by(0);
            self.dragging = false;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn can_lose_focus(&self) -> bool {
        self.can_lose_focus
    }

    pub fn set_can_lose_focus(&mut self, can_lose_focus: bool) {
        self.can_lose_focus = can_lose_focus;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_drag_scroll_interval(&mut self, interval_ms: u64) {
        self.drag_scroll_interval_ms = interval_ms;
    }

    // =========================================================================
    // Mouse
    // =========================================================================

    /// Handle a press at `(px, py)`.
    ///
    /// Returns `true` when the press placed the cursor, which also starts
    /// drag-selection for the primary button.
    pub fn mouse_clicked(&mut self, px: f32, py: f32, button: MouseButton) -> bool {
        let inside = self.contains(px, py);
        if self.can_lose_focus {
            self.set_focused(inside);
        }

        let handled = self.focused && inside && button == MouseButton::Primary;
        if handled {
            let pos = self.engine.position_at(px - self.text_x());
            self.engine.set_cursor(pos as isize);
            tracing::debug!(cursor = pos, "mouse placed cursor");
        }
        self.dragging = handled;
        handled
    }

    /// Advance drag-selection for one frame.
    ///
    /// While the pointer is held outside the text area the view scrolls
    /// one character toward it, at most once per scroll interval. The
    /// anchor then follows the pointer within the visible slice.
    pub fn tick(&mut self, now_ms: u64, pointer_x: f32, pointer_down: bool) {
        if !(self.dragging && self.visible && self.focused) {
            return;
        }
        if !pointer_down {
            self.dragging = false;
            return;
        }

        let text_x = self.text_x();
        let text_width = self.inner_width();

        let step = if pointer_x < text_x {
            -1
        } else if pointer_x > text_x + text_width
            && self.engine.measure().width(self.engine.scrolled_text()) > text_width
        {
            1
        } else {
            0
        };

        if step != 0 && now_ms.saturating_sub(self.last_scroll_ms) > self.drag_scroll_interval_ms {
            self.engine.scroll_by(step);
            self.last_scroll_ms = now_ms;
        }

        let anchor = self.engine.position_at(pointer_x - text_x);
        self.engine.drag_anchor_to(anchor);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn render_state(&self) -> FieldView {
        let visible = self.engine.visible_text();
        let visible_len = char_len(visible);
        let scroll = self.engine.scroll_offset();

        let caret = self
            .engine
            .cursor()
            .checked_sub(scroll)
            .filter(|&c| c <= visible_len);
        let caret_x = caret.map(|c| self.engine.measure().width(split_at_char(visible, c).0));

        let selection = self.engine.selection();
        let clip = |pos: usize| pos.saturating_sub(scroll).min(visible_len);
        let (start, end) = (clip(selection.low()), clip(selection.high()));

        FieldView {
            visible_text: visible.to_string(),
            scroll_offset: scroll,
            caret,
            caret_x,
            selection: (start < end).then_some((start, end)),
            focused: self.focused,
            enabled: self.enabled,
            draw_background: self.draw_background,
        }
    }
}
