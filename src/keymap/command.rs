//! Command enum representing every action a key can trigger on a field

/// All field commands that can be bound to keys
///
/// Movement commands collapse the selection. `Select*` commands move the
/// anchor and leave the cursor in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Cursor Movement (collapses selection)
    // ========================================================================
    MoveLeft,
    MoveRight,
    /// Move cursor to the previous word start
    MoveWordLeft,
    /// Move cursor past the next run of spaces
    MoveWordRight,
    MoveLineStart,
    MoveLineEnd,

    // ========================================================================
    // Selection (moves the anchor)
    // ========================================================================
    SelectLeft,
    SelectRight,
    SelectWordLeft,
    SelectWordRight,
    SelectToLineStart,
    SelectToLineEnd,
    SelectAll,

    // ========================================================================
    // Editing
    // ========================================================================
    DeleteBackward,
    DeleteForward,
    DeleteWordBackward,
    DeleteWordForward,

    // Clipboard
    Copy,
    Cut,
    Paste,

    // Undo/Redo
    Undo,
    Redo,

    /// Removes a default binding when merged from a user keymap
    Unbound,
}

impl Command {
    /// Commands that change the text; disabled fields ignore them
    pub fn is_edit(self) -> bool {
        matches!(
            self,
            Command::DeleteBackward
                | Command::DeleteForward
                | Command::DeleteWordBackward
                | Command::DeleteWordForward
                | Command::Cut
                | Command::Paste
                | Command::Undo
                | Command::Redo
        )
    }

    /// Undo and redo; a disabled field lets these keys fall through
    pub fn is_history(self) -> bool {
        matches!(self, Command::Undo | Command::Redo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_edit() {
        assert!(Command::Paste.is_edit());
        assert!(Command::Undo.is_edit());
        assert!(!Command::Copy.is_edit());
        assert!(!Command::SelectAll.is_edit());
        assert!(!Command::MoveWordLeft.is_edit());
        assert!(Command::Redo.is_history());
        assert!(!Command::Paste.is_history());
    }
}
