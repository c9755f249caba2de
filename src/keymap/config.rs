//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub platform: Option<String>,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let current_platform = get_current_platform();
    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        if let Some(ref platform) = entry.platform {
            if platform != current_platform {
                continue;
            }
        }

        let keystroke = parse_key_string(&entry.key)?;
        let command = parse_command(&entry.command)?;
        bindings.push(Keybinding::new(keystroke, command));
    }

    Ok(bindings)
}

/// Parse a key string like "cmd+shift+left" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in key_str.split('+') {
        let part_lower = part.trim().to_lowercase();
        match part_lower.as_str() {
            "cmd" => {
                // Platform command key
                mods = mods | Modifiers::cmd();
            }
            "ctrl" | "control" => {
                mods = mods | Modifiers::CTRL;
            }
            "shift" => {
                mods = mods | Modifiers::SHIFT;
            }
            "alt" | "option" | "opt" => {
                mods = mods | Modifiers::ALT;
            }
            "meta" | "super" | "win" => {
                mods = mods | Modifiers::META;
            }
            _ => {
                if key_part.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key_part = Some(parse_key_code(&part_lower)?);
            }
        }
    }

    let key = key_part
        .ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;

    Ok(Keystroke::new(key, mods))
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),

        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),

        _ => Err(KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Parse a command name string into a Command enum
fn parse_command(cmd: &str) -> Result<Command, KeymapError> {
    Command::from_str(cmd).map_err(|_| KeymapError::InvalidCommand(cmd.to_string()))
}

/// Get the current platform identifier
fn get_current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MoveLeft" => Ok(Command::MoveLeft),
            "MoveRight" => Ok(Command::MoveRight),
            "MoveWordLeft" => Ok(Command::MoveWordLeft),
            "MoveWordRight" => Ok(Command::MoveWordRight),
            "MoveLineStart" => Ok(Command::MoveLineStart),
            "MoveLineEnd" => Ok(Command::MoveLineEnd),

            "SelectLeft" => Ok(Command::SelectLeft),
            "SelectRight" => Ok(Command::SelectRight),
            "SelectWordLeft" => Ok(Command::SelectWordLeft),
            "SelectWordRight" => Ok(Command::SelectWordRight),
            "SelectToLineStart" => Ok(Command::SelectToLineStart),
            "SelectToLineEnd" => Ok(Command::SelectToLineEnd),
            "SelectAll" => Ok(Command::SelectAll),

            "DeleteBackward" => Ok(Command::DeleteBackward),
            "DeleteForward" => Ok(Command::DeleteForward),
            "DeleteWordBackward" => Ok(Command::DeleteWordBackward),
            "DeleteWordForward" => Ok(Command::DeleteWordForward),

            "Copy" => Ok(Command::Copy),
            "Cut" => Ok(Command::Cut),
            "Paste" => Ok(Command::Paste),

            "Undo" => Ok(Command::Undo),
            "Redo" => Ok(Command::Redo),

            "Unbound" => Ok(Command::Unbound),

            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let stroke = parse_key_string("a").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('a'));
        assert!(stroke.mods.is_empty());
    }

    #[test]
    fn test_parse_key_with_multiple_modifiers() {
        let stroke = parse_key_string("ctrl+shift+left").unwrap();
        assert_eq!(stroke.key, KeyCode::Left);
        assert_eq!(stroke.mods, Modifiers::CTRL | Modifiers::SHIFT);
    }

    #[test]
    fn test_parse_cmd_modifier() {
        let stroke = parse_key_string("cmd+z").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('z'));
        assert_eq!(stroke.mods, Modifiers::cmd());
    }

    #[test]
    fn test_parse_uppercase_normalizes() {
        assert_eq!(parse_key_string("Ctrl+A"), parse_key_string("ctrl+a"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_key_string("ctrl+a+b"),
            Err(KeymapError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("ctrl+shift"),
            Err(KeymapError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("pagedown"),
            Err(KeymapError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(Command::from_str("Undo"), Ok(Command::Undo));
        assert_eq!(Command::from_str("SelectWordLeft"), Ok(Command::SelectWordLeft));
        assert_eq!(Command::from_str("SaveFile"), Err(()));
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
bindings:
  - key: "ctrl+a"
    command: SelectAll
  - key: "backspace"
    command: DeleteBackward
"#;

        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].command, Command::SelectAll);
        assert_eq!(bindings[1].command, Command::DeleteBackward);
    }

    #[test]
    fn test_parse_yaml_unknown_command() {
        let yaml = r#"
bindings:
  - key: "ctrl+s"
    command: SaveFile
"#;
        assert_eq!(
            parse_keymap_yaml(yaml),
            Err(KeymapError::InvalidCommand("SaveFile".to_string()))
        );
    }

    #[test]
    fn test_parse_yaml_with_platform() {
        let yaml = r#"
bindings:
  - key: "ctrl+a"
    command: SelectAll
  - key: "meta+left"
    command: MoveLineStart
    platform: macos
"#;

        let bindings = parse_keymap_yaml(yaml).unwrap();

        #[cfg(target_os = "macos")]
        assert_eq!(bindings.len(), 2);

        #[cfg(not(target_os = "macos"))]
        assert_eq!(bindings.len(), 1);
    }
}
