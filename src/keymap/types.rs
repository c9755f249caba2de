//! Keystroke, Modifiers and KeyCode for field key handling

use std::fmt;

/// Held modifier keys. Matching is exact: Ctrl+Shift+Z is not Ctrl+Z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(1);
    pub const SHIFT: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    /// Cmd on macOS, Super/Win elsewhere
    pub const META: Modifiers = Modifiers(1 << 3);

    /// `true` if every modifier in `other` is held
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The platform shortcut modifier: Meta on macOS, Ctrl elsewhere
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }

    /// Held modifiers other than Shift; these suppress typed characters
    pub fn is_chord(self) -> bool {
        self.0 & !Modifiers::SHIFT.0 != 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

/// Writes the keymap-file spelling, e.g. `ctrl+shift`
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Modifiers::CTRL, "ctrl"),
            (Modifiers::SHIFT, "shift"),
            (Modifiers::ALT, "alt"),
            (Modifiers::META, "meta"),
        ];
        let held: Vec<&str> = names
            .iter()
            .filter(|(m, _)| self.contains(*m))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", held.join("+"))
    }
}

/// Keys a single-line field reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),
    Space,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Parsed so they can be rebound; no default binding
    Tab,
    Escape,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyCode::Char(c) => return write!(f, "{}", c),
            KeyCode::Space => "space",
            KeyCode::Backspace => "backspace",
            KeyCode::Delete => "delete",
            KeyCode::Left => "left",
            KeyCode::Right => "right",
            KeyCode::Home => "home",
            KeyCode::End => "end",
            KeyCode::Tab => "tab",
            KeyCode::Escape => "escape",
        };
        f.write_str(name)
    }
}

/// A key plus the exact set of modifiers held with it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub fn char(c: char) -> Self {
        Self::char_with_mods(c, Modifiers::NONE)
    }

    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c.to_ascii_lowercase()), mods)
    }
}

/// Same syntax `parse_key_string` reads
impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::parse_key_string;

    #[test]
    fn test_contains_and_chord() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
        assert!(mods.is_chord());

        assert!(!Modifiers::SHIFT.is_chord());
        assert!(!Modifiers::NONE.is_chord());
        assert!(Modifiers::NONE.is_empty());
    }

    #[test]
    fn test_exact_modifier_equality() {
        let ctrl_z = Keystroke::char_with_mods('z', Modifiers::CTRL);
        let ctrl_shift_z = Keystroke::char_with_mods('z', Modifiers::CTRL | Modifiers::SHIFT);
        assert_ne!(ctrl_z, ctrl_shift_z);
    }

    #[test]
    fn test_display_uses_keymap_syntax() {
        let stroke = Keystroke::new(KeyCode::Left, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(stroke.to_string(), "ctrl+shift+left");
        assert_eq!(Keystroke::key(KeyCode::Home).to_string(), "home");
        assert_eq!(parse_key_string(&stroke.to_string()), Ok(stroke));
    }

    #[test]
    fn test_char_keystroke_lowercases() {
        assert_eq!(Keystroke::char('A'), Keystroke::char('a'));
    }
}
