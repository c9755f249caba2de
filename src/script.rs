//! Scripted editing sessions
//!
//! A session is a YAML file describing a field and a list of input
//! events. Replaying it drives a [`TextField`] exactly as a host would,
//! which makes behaviour reproducible outside a GUI.
//!
//! ```yaml
//! text: "hello world"
//! width: 60
//! focused: true
//! steps:
//!   - key: "cmd+a"
//!   - type: "bye"
//!   - click: { x: 10, y: 2 }
//!   - tick: { at: 100, x: 80, down: true }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::clipboard::Clipboard;
use crate::field::{MouseButton, TextField};
use crate::keymap::{parse_key_string, KeyCode, KeyDispatcher, KeymapError, Keystroke, Modifiers};
use crate::tracing::FieldTrace;

#[derive(Debug)]
pub enum ScriptError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_yaml::Error),
    InvalidKey { step: usize, source: KeymapError },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io { path, source } => {
                write!(f, "Failed to read session {}: {}", path.display(), source)
            }
            ScriptError::Parse(e) => write!(f, "Failed to parse session: {}", e),
            ScriptError::InvalidKey { step, source } => write!(f, "Step {}: {}", step, source),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io { source, .. } => Some(source),
            ScriptError::Parse(e) => Some(e),
            ScriptError::InvalidKey { source, .. } => Some(source),
        }
    }
}

fn default_height() -> f32 {
    20.0
}

fn default_true() -> bool {
    true
}

/// A field plus the input to replay against it
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Initial content, set without notifying or recording history
    #[serde(default)]
    pub text: String,
    /// Outer width of the field in pixels
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    /// Overrides the configured maximum length
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default = "default_true")]
    pub focused: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// A keystroke such as "cmd+shift+left"
    Key(String),
    /// Characters typed one at a time
    Type(String),
    Click {
        x: f32,
        y: f32,
        #[serde(default)]
        button: MouseButton,
    },
    /// One drag-selection frame at time `at` (ms)
    Tick {
        at: u64,
        x: f32,
        #[serde(default = "default_true")]
        down: bool,
    },
    Focus(bool),
    Undo,
    Redo,
}

impl Session {
    pub fn from_yaml(yaml: &str) -> Result<Self, ScriptError> {
        serde_yaml::from_str(yaml).map_err(ScriptError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Apply geometry, flags and initial text to `field`
    pub fn prepare(&self, field: &mut TextField) {
        field.set_bounds(0.0, 0.0, self.width, self.height);
        if let Some(max_length) = self.max_length {
            field.engine_mut().set_max_length(max_length);
        }
        field.engine_mut().set_text(&self.text);
        field.engine_mut().clear_history();
        field.set_enabled(self.enabled);
        field.set_focused(self.focused);
    }

    /// Run every step against `field`
    pub fn replay(
        &self,
        field: &mut TextField,
        dispatcher: &KeyDispatcher,
        clipboard: &mut dyn Clipboard,
    ) -> Result<(), ScriptError> {
        for (idx, step) in self.steps.iter().enumerate() {
            let before = FieldTrace::from_engine(field.engine());
            run_step(idx, step, field, dispatcher, clipboard)?;
            let after = FieldTrace::from_engine(field.engine());
            if let Some(change) = before.diff(&after) {
                tracing::debug!(step = idx, ?step, "{}", change);
            }
        }
        Ok(())
    }
}

fn run_step(
    idx: usize,
    step: &Step,
    field: &mut TextField,
    dispatcher: &KeyDispatcher,
    clipboard: &mut dyn Clipboard,
) -> Result<(), ScriptError> {
    match step {
        Step::Key(key) => {
            let keystroke = parse_key_string(key)
                .map_err(|source| ScriptError::InvalidKey { step: idx, source })?;
            let typed = typed_char(&keystroke);
            dispatcher.dispatch(field, keystroke, typed, clipboard);
        }
        Step::Type(text) => {
            for ch in text.chars() {
                dispatcher.dispatch(field, Keystroke::char(ch), Some(ch), clipboard);
            }
        }
        Step::Click { x, y, button } => {
            field.mouse_clicked(*x, *y, *button);
        }
        Step::Tick { at, x, down } => field.tick(*at, *x, *down),
        Step::Focus(focused) => field.set_focused(*focused),
        Step::Undo => {
            field.engine_mut().undo();
        }
        Step::Redo => {
            field.engine_mut().redo();
        }
    }
    Ok(())
}

/// The character a keystroke would type, if any
fn typed_char(keystroke: &Keystroke) -> Option<char> {
    let mods = keystroke.mods;
    if mods.is_chord() {
        return None;
    }
    match keystroke.key {
        KeyCode::Char(c) if mods.contains(Modifiers::SHIFT) => c.to_uppercase().next(),
        KeyCode::Char(c) => Some(c),
        KeyCode::Space => Some(' '),
        _ => None,
    }
}
