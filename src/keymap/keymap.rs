//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// Stores bindings and resolves keystrokes to commands.
///
/// Modifiers must match exactly. When two bindings share a keystroke the
/// later one wins.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Index into `bindings` for each keystroke
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.insert(binding.keystroke, idx);
        self.bindings.push(binding);
    }

    /// Resolve a keystroke. `Unbound` entries resolve to `None`.
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        let idx = *self.lookup.get(keystroke)?;
        match self.bindings[idx].command {
            Command::Unbound => None,
            command => Some(command),
        }
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    fn ctrl(c: char) -> Keystroke {
        Keystroke::new(KeyCode::Char(c), Modifiers::CTRL)
    }

    #[test]
    fn test_single_binding_lookup() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl('a'), Command::SelectAll)]);

        assert_eq!(keymap.lookup(&ctrl('a')), Some(Command::SelectAll));
        assert_eq!(keymap.lookup(&ctrl('k')), None);
        assert_eq!(keymap.lookup(&Keystroke::char('a')), None);
    }

    #[test]
    fn test_later_binding_wins() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl('z'), Command::Undo),
            Keybinding::new(ctrl('z'), Command::Redo),
        ]);
        assert_eq!(keymap.lookup(&ctrl('z')), Some(Command::Redo));
    }

    #[test]
    fn test_unbound_resolves_to_none() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl('v'), Command::Unbound)]);
        assert_eq!(keymap.lookup(&ctrl('v')), None);
    }
}
