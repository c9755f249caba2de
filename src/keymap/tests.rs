//! Integration tests for the keymap system

use super::*;

#[test]
fn test_embedded_yaml_parses() {
    let bindings = parse_keymap_yaml(get_default_keymap_yaml())
        .expect("Embedded keymap.yaml should parse successfully");

    assert!(!bindings.is_empty(), "Should have bindings");

    for command in [
        Command::SelectAll,
        Command::Copy,
        Command::Cut,
        Command::Paste,
        Command::Undo,
        Command::Redo,
    ] {
        assert!(
            bindings.iter().any(|b| b.command == command),
            "Missing binding for {:?}",
            command
        );
    }
}

#[test]
fn test_keymap_lookup_undo_redo() {
    let keymap = Keymap::with_bindings(embedded_bindings());
    let cmd = Modifiers::cmd();

    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Char('z'), cmd)),
        Some(Command::Undo)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Char('y'), cmd)),
        Some(Command::Redo)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(
            KeyCode::Char('z'),
            cmd | Modifiers::SHIFT
        )),
        None
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Char('z'), cmd | Modifiers::ALT)),
        None
    );
}

#[test]
fn test_keymap_lookup_arrow_keys() {
    let keymap = Keymap::with_bindings(embedded_bindings());
    let cmd = Modifiers::cmd();
    let shift = Modifiers::SHIFT;

    let cases = [
        (KeyCode::Left, Modifiers::NONE, Command::MoveLeft),
        (KeyCode::Right, Modifiers::NONE, Command::MoveRight),
        (KeyCode::Left, cmd, Command::MoveWordLeft),
        (KeyCode::Right, cmd, Command::MoveWordRight),
        (KeyCode::Left, shift, Command::SelectLeft),
        (KeyCode::Right, shift, Command::SelectRight),
        (KeyCode::Left, cmd | shift, Command::SelectWordLeft),
        (KeyCode::Right, cmd | shift, Command::SelectWordRight),
        (KeyCode::Home, Modifiers::NONE, Command::MoveLineStart),
        (KeyCode::End, shift, Command::SelectToLineEnd),
    ];

    for (key, mods, expected) in cases {
        assert_eq!(
            keymap.lookup(&Keystroke::new(key, mods)),
            Some(expected),
            "{:?}+{:?}",
            mods,
            key
        );
    }
}

#[test]
fn test_keymap_lookup_deletion() {
    let keymap = Keymap::with_bindings(embedded_bindings());
    let cmd = Modifiers::cmd();

    assert_eq!(
        keymap.lookup(&Keystroke::key(KeyCode::Backspace)),
        Some(Command::DeleteBackward)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Backspace, cmd)),
        Some(Command::DeleteWordBackward)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::key(KeyCode::Delete)),
        Some(Command::DeleteForward)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Delete, cmd)),
        Some(Command::DeleteWordForward)
    );
}

#[test]
fn test_user_override_via_yaml() {
    let user = parse_keymap_yaml(
        r#"
bindings:
  - key: "ctrl+shift+z"
    command: Redo
  - key: "cmd+y"
    command: Unbound
"#,
    )
    .unwrap();

    let keymap = Keymap::with_bindings(merge_bindings(embedded_bindings(), user));

    assert_eq!(
        keymap.lookup(&Keystroke::new(
            KeyCode::Char('z'),
            Modifiers::CTRL | Modifiers::SHIFT
        )),
        Some(Command::Redo)
    );
    assert_eq!(
        keymap.lookup(&Keystroke::new(KeyCode::Char('y'), Modifiers::cmd())),
        None
    );
}
