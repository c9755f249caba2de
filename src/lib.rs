//! linefield - a single-line text field editing engine
//!
//! The engine owns the text, cursor, selection, horizontal scroll and
//! undo history of one field. Hosts feed it keystrokes, pointer events
//! and clipboard contents, and draw whatever [`field::TextField::render_state`]
//! reports.

pub mod clipboard;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod field;
pub mod keymap;
pub mod measure;
pub mod script;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::FieldConfig;
pub use editable::{EditConstraints, EditEngine};
pub use field::TextField;
pub use keymap::KeyDispatcher;
