//! Keybinding struct mapping a keystroke to a command

use super::command::Command;
use super::types::Keystroke;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    pub fn matches(&self, keystroke: &Keystroke) -> bool {
        self.keystroke == *keystroke
    }
}
