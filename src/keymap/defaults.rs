//! Default keybindings for a field
//!
//! The shipped bindings live in keymap.yaml at the crate root and are
//! embedded at compile time. A hardcoded copy backs them up if the
//! embedded file ever fails to parse.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap source
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Bindings from the embedded keymap, or the hardcoded defaults if it fails to parse
pub fn embedded_bindings() -> Vec<Keybinding> {
    match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    }
}

/// Load and merge keymaps: embedded defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User config at ~/.config/linefield/keymap.yaml
pub fn load_default_keymap() -> Vec<Keybinding> {
    let user_path = crate::config_paths::keymap_file();
    load_keymap_layers(user_path.as_deref())
}

/// Embedded defaults merged with an optional user keymap file.
///
/// A missing user file is not an error; an unreadable or invalid one is
/// logged and skipped.
pub fn load_keymap_layers(user_path: Option<&Path>) -> Vec<Keybinding> {
    let bindings = embedded_bindings();

    let Some(user_path) = user_path else {
        return bindings;
    };
    if !user_path.exists() {
        return bindings;
    }

    match load_keymap_file(user_path) {
        Ok(user_bindings) => {
            tracing::info!(
                "Merging user keymap from {} ({} bindings)",
                user_path.display(),
                user_bindings.len()
            );
            merge_bindings(bindings, user_bindings)
        }
        Err(e) => {
            tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
            bindings
        }
    }
}

/// Merge user bindings into base bindings
///
/// - If user binding has the same keystroke → replaces base
/// - If user binding command is `Unbound` → removes matching base bindings
/// - Otherwise → user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default keybindings for the current platform
///
/// Uses Cmd on macOS, Ctrl on Windows/Linux for the "command" modifier.
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;
    let shift = Modifiers::SHIFT;
    let none = Modifiers::NONE;

    vec![
        bind(KeyCode::Char('a'), cmd, Command::SelectAll),
        bind(KeyCode::Char('c'), cmd, Command::Copy),
        bind(KeyCode::Char('x'), cmd, Command::Cut),
        bind(KeyCode::Char('v'), cmd, Command::Paste),
        bind(KeyCode::Char('z'), cmd, Command::Undo),
        bind(KeyCode::Char('y'), cmd, Command::Redo),
        bind(KeyCode::Backspace, none, Command::DeleteBackward),
        bind(KeyCode::Backspace, cmd, Command::DeleteWordBackward),
        bind(KeyCode::Delete, none, Command::DeleteForward),
        bind(KeyCode::Delete, cmd, Command::DeleteWordForward),
        bind(KeyCode::Home, none, Command::MoveLineStart),
        bind(KeyCode::End, none, Command::MoveLineEnd),
        bind(KeyCode::Left, none, Command::MoveLeft),
        bind(KeyCode::Right, none, Command::MoveRight),
        bind(KeyCode::Left, cmd, Command::MoveWordLeft),
        bind(KeyCode::Right, cmd, Command::MoveWordRight),
        bind(KeyCode::Home, shift, Command::SelectToLineStart),
        bind(KeyCode::End, shift, Command::SelectToLineEnd),
        bind(KeyCode::Left, shift, Command::SelectLeft),
        bind(KeyCode::Right, shift, Command::SelectRight),
        bind(KeyCode::Left, cmd_shift, Command::SelectWordLeft),
        bind(KeyCode::Right, cmd_shift, Command::SelectWordRight),
    ]
}

/// Helper to create a keybinding
fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
