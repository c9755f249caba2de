//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use linefield::clipboard::MemoryClipboard;
use linefield::editable::{EditConstraints, EditEngine, FieldId};
use linefield::field::TextField;
use linefield::keymap::{parse_key_string, KeyDispatcher};
use linefield::measure::MonospaceMeasure;

/// Engine with 1px monospace glyphs and room for 100 characters on screen
pub fn test_engine(text: &str, max_length: usize) -> EditEngine {
    narrow_engine(text, max_length, 100.0)
}

/// Engine whose text area is `width` characters wide
pub fn narrow_engine(text: &str, max_length: usize, width: f32) -> EditEngine {
    EditEngine::new(
        1,
        EditConstraints::default().with_max_length(max_length),
        MonospaceMeasure::new(1.0),
        width,
    )
    .with_text(text)
}

/// Notifications received by a listener, in order
#[derive(Debug, Clone, Default)]
pub struct ChangeLog(Rc<RefCell<Vec<(FieldId, String)>>>);

impl ChangeLog {
    pub fn texts(&self) -> Vec<String> {
        self.0.borrow().iter().map(|(_, t)| t.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Attach a recording listener to `engine`
pub fn with_log(engine: EditEngine) -> (EditEngine, ChangeLog) {
    let log = ChangeLog::default();
    let sink = Rc::clone(&log.0);
    let engine = engine.with_listener(move |id: FieldId, text: &str| {
        sink.borrow_mut().push((id, text.to_string()));
    });
    (engine, log)
}

/// Focused field, no background inset, `width` characters wide, cursor at end
pub fn test_field(text: &str, width: f32) -> TextField {
    let mut field = TextField::new(test_engine(text, 64), 0.0, 0.0, width, 10.0);
    field.set_draw_background(false);
    field.set_focused(true);
    field.engine_mut().cursor_to_end();
    field
}

/// Keyboard harness: dispatcher with embedded bindings plus an in-memory clipboard
pub struct Keyboard {
    pub dispatcher: KeyDispatcher,
    pub clipboard: MemoryClipboard,
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            dispatcher: KeyDispatcher::default(),
            clipboard: MemoryClipboard::new(),
        }
    }

    /// Press a key described like "cmd+shift+left"
    pub fn press(&mut self, field: &mut TextField, key: &str) -> bool {
        let keystroke = parse_key_string(key).expect("valid key in test");
        self.dispatcher
            .dispatch(field, keystroke, None, &mut self.clipboard)
    }

    /// Type each character of `text`
    pub fn type_text(&mut self, field: &mut TextField, text: &str) {
        for ch in text.chars() {
            let keystroke = linefield::keymap::Keystroke::char(ch);
            self.dispatcher
                .dispatch(field, keystroke, Some(ch), &mut self.clipboard);
        }
    }
}
