//! Keystroke → field command execution

use crate::clipboard::Clipboard;
use crate::field::TextField;

use super::command::Command;
use super::defaults::{embedded_bindings, load_default_keymap};
use super::keymap::Keymap;
use super::types::Keystroke;

/// Routes keystrokes from a focused field to engine commands.
#[derive(Debug, Clone)]
pub struct KeyDispatcher {
    keymap: Keymap,
}

impl Default for KeyDispatcher {
    /// Embedded bindings only, ignoring any user keymap
    fn default() -> Self {
        Self::new(Keymap::with_bindings(embedded_bindings()))
    }
}

impl KeyDispatcher {
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap }
    }

    /// Embedded bindings merged with the user's keymap.yaml
    pub fn with_user_keymap() -> Self {
        Self::new(Keymap::with_bindings(load_default_keymap()))
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Handle one key press on `field`.
    ///
    /// `typed` is the character the key produced, if any. Returns `true`
    /// when the key was consumed. Unfocused fields consume nothing.
    /// Disabled fields consume bound editing keys but do not apply them;
    /// undo and redo are left unconsumed.
    pub fn dispatch(
        &self,
        field: &mut TextField,
        keystroke: Keystroke,
        typed: Option<char>,
        clipboard: &mut dyn Clipboard,
    ) -> bool {
        if !field.is_focused() {
            return false;
        }

        if let Some(command) = self.keymap.lookup(&keystroke) {
            tracing::debug!(%keystroke, ?command, "dispatch");
            if command.is_edit() && !field.is_enabled() {
                tracing::debug!(?command, "field disabled, ignoring");
                return !command.is_history();
            }
            execute(field, command, clipboard);
            return true;
        }

        match typed {
            Some(ch) if field.engine().is_char_allowed(ch) => {
                if field.is_enabled() {
                    field.engine_mut().insert_text(ch.encode_utf8(&mut [0; 4]));
                }
                true
            }
            _ => false,
        }
    }
}

fn execute(field: &mut TextField, command: Command, clipboard: &mut dyn Clipboard) {
    let engine = field.engine_mut();

    match command {
        Command::MoveLeft => engine.move_by(-1),
        Command::MoveRight => engine.move_by(1),
        Command::MoveWordLeft => {
            let pos = engine.word_boundary_from_cursor(-1);
            engine.set_cursor(pos as isize);
        }
        Command::MoveWordRight => {
            let pos = engine.word_boundary_from_cursor(1);
            engine.set_cursor(pos as isize);
        }
        Command::MoveLineStart => engine.cursor_to_start(),
        Command::MoveLineEnd => engine.cursor_to_end(),

        Command::SelectLeft => {
            let pos = engine.anchor() as isize - 1;
            engine.set_anchor(pos);
        }
        Command::SelectRight => {
            let pos = engine.anchor() as isize + 1;
            engine.set_anchor(pos);
        }
        Command::SelectWordLeft => {
            let pos = engine.word_boundary_from(engine.anchor(), -1);
            engine.set_anchor(pos as isize);
        }
        Command::SelectWordRight => {
            let pos = engine.word_boundary_from(engine.anchor(), 1);
            engine.set_anchor(pos as isize);
        }
        Command::SelectToLineStart => engine.set_anchor(0),
        Command::SelectToLineEnd => {
            let len = engine.len() as isize;
            engine.set_anchor(len);
        }
        Command::SelectAll => engine.select_all(),

        Command::DeleteBackward => {
            engine.delete_from_cursor(-1);
        }
        Command::DeleteForward => {
            engine.delete_from_cursor(1);
        }
        Command::DeleteWordBackward => {
            engine.delete_words(-1);
        }
        Command::DeleteWordForward => {
            engine.delete_words(1);
        }

        Command::Copy => clipboard.set_text(engine.selected_text()),
        Command::Cut => {
            clipboard.set_text(engine.selected_text());
            engine.insert_text("");
        }
        Command::Paste => {
            let text = clipboard.get_text().unwrap_or_default();
            engine.insert_text(&text);
        }

        Command::Undo => {
            engine.undo();
        }
        Command::Redo => {
            engine.redo();
        }

        Command::Unbound => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::editable::{EditConstraints, EditEngine};
    use crate::keymap::types::{KeyCode, Modifiers};
    use crate::measure::MonospaceMeasure;

    fn focused(text: &str) -> TextField {
        let engine = EditEngine::new(
            0,
            EditConstraints::default(),
            MonospaceMeasure::new(1.0),
            100.0,
        )
        .with_text(text);
        let mut field = TextField::new(engine, 0.0, 0.0, 108.0, 12.0);
        field.set_focused(true);
        field
    }

    fn key(code: KeyCode, mods: Modifiers) -> Keystroke {
        Keystroke::new(code, mods)
    }

    #[test]
    fn test_unfocused_consumes_nothing() {
        let d = KeyDispatcher::default();
        let mut f = focused("abc");
        f.set_focused(false);
        let mut cb = MemoryClipboard::new();
        assert!(!d.dispatch(&mut f, key(KeyCode::Backspace, Modifiers::NONE), None, &mut cb));
        assert!(!d.dispatch(&mut f, Keystroke::char('x'), Some('x'), &mut cb));
        assert_eq!(f.text(), "abc");
    }

    #[test]
    fn test_typed_char_inserts() {
        let d = KeyDispatcher::default();
        let mut f = focused("ab");
        let mut cb = MemoryClipboard::new();
        assert!(d.dispatch(&mut f, Keystroke::char('c'), Some('c'), &mut cb));
        assert_eq!(f.text(), "abc");
    }

    #[test]
    fn test_disallowed_char_not_consumed() {
        let d = KeyDispatcher::default();
        let mut f = focused("ab");
        let mut cb = MemoryClipboard::new();
        assert!(!d.dispatch(&mut f, key(KeyCode::Tab, Modifiers::NONE), Some('\t'), &mut cb));
        assert!(!d.dispatch(&mut f, key(KeyCode::Escape, Modifiers::NONE), None, &mut cb));
        assert_eq!(f.text(), "ab");
    }

    #[test]
    fn test_disabled_field_consumes_but_ignores_edits() {
        let d = KeyDispatcher::default();
        let mut f = focused("abc");
        f.set_enabled(false);
        let mut cb = MemoryClipboard::with_text("zz");

        assert!(d.dispatch(&mut f, key(KeyCode::Backspace, Modifiers::NONE), None, &mut cb));
        assert!(d.dispatch(&mut f, Keystroke::char_with_mods('v', Modifiers::cmd()), None, &mut cb));
        assert!(d.dispatch(&mut f, Keystroke::char('x'), Some('x'), &mut cb));
        assert_eq!(f.text(), "abc");

        assert!(!d.dispatch(&mut f, Keystroke::char_with_mods('z', Modifiers::cmd()), None, &mut cb));
        assert!(!d.dispatch(&mut f, Keystroke::char_with_mods('y', Modifiers::cmd()), None, &mut cb));
        assert_eq!(f.text(), "abc");

        // Navigation still works
        assert!(d.dispatch(&mut f, key(KeyCode::Home, Modifiers::NONE), None, &mut cb));
        assert_eq!(f.engine().cursor(), 0);
    }

    #[test]
    fn test_shift_left_moves_anchor() {
        let d = KeyDispatcher::default();
        let mut f = focused("hello");
        let mut cb = MemoryClipboard::new();
        d.dispatch(&mut f, key(KeyCode::Left, Modifiers::SHIFT), None, &mut cb);
        d.dispatch(&mut f, key(KeyCode::Left, Modifiers::SHIFT), None, &mut cb);
        assert_eq!(f.engine().cursor(), 5);
        assert_eq!(f.engine().anchor(), 3);
        assert_eq!(f.engine().selected_text(), "lo");
    }

    #[test]
    fn test_plain_arrow_collapses_from_anchor() {
        let d = KeyDispatcher::default();
        let mut f = focused("hello");
        f.engine_mut().set_anchor(2);
        let mut cb = MemoryClipboard::new();
        d.dispatch(&mut f, key(KeyCode::Right, Modifiers::NONE), None, &mut cb);
        assert_eq!(f.engine().cursor(), 3);
        assert!(!f.engine().has_selection());
    }

    #[test]
    fn test_ctrl_shift_z_is_not_undo() {
        let d = KeyDispatcher::default();
        let mut f = focused("");
        let mut cb = MemoryClipboard::new();
        f.engine_mut().insert_text("a");

        let stroke = Keystroke::char_with_mods('z', Modifiers::cmd() | Modifiers::SHIFT);
        assert!(!d.dispatch(&mut f, stroke, None, &mut cb));
        assert_eq!(f.text(), "a");

        let stroke = Keystroke::char_with_mods('z', Modifiers::cmd());
        assert!(d.dispatch(&mut f, stroke, None, &mut cb));
        assert_eq!(f.text(), "");
    }

    #[test]
    fn test_cut_copy_paste() {
        let d = KeyDispatcher::default();
        let mut f = focused("hello world");
        let mut cb = MemoryClipboard::new();
        let cmd = Modifiers::cmd();

        f.engine_mut().set_anchor(6);
        d.dispatch(&mut f, Keystroke::char_with_mods('c', cmd), None, &mut cb);
        assert_eq!(cb.contents(), Some("world"));
        assert_eq!(f.text(), "hello world");

        d.dispatch(&mut f, Keystroke::char_with_mods('x', cmd), None, &mut cb);
        assert_eq!(f.text(), "hello ");

        d.dispatch(&mut f, key(KeyCode::Home, Modifiers::NONE), None, &mut cb);
        d.dispatch(&mut f, Keystroke::char_with_mods('v', cmd), None, &mut cb);
        assert_eq!(f.text(), "worldhello ");
    }
}
