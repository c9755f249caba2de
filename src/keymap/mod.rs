//! Configurable keyboard mapping for text fields
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to field commands
//! - Supports platform-specific modifier handling (Cmd on macOS, Ctrl elsewhere)
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! Keystroke → Keymap::lookup() → Command → KeyDispatcher → EditEngine
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Embedded defaults only
//! let keymap = Keymap::with_bindings(embedded_bindings());
//!
//! // Defaults merged with ~/.config/linefield/keymap.yaml
//! let keymap = Keymap::with_bindings(load_default_keymap());
//! ```

mod binding;
mod command;
mod config;
mod defaults;
mod dispatch;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{
    default_bindings, embedded_bindings, get_default_keymap_yaml, load_default_keymap,
    load_keymap_layers, merge_bindings,
};
pub use dispatch::KeyDispatcher;
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};

#[cfg(test)]
mod tests;
