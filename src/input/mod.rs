//! Key-event to action mapping.
//!
//! The core never parses raw input; this thin table turns raw key names into
//! [`GameAction`]s and translates crossterm key codes into those raw names.
//! Keys with no entry are ignored.

use crossterm::event::{KeyCode, KeyEvent, ModifierKeyCode};

use crate::types::GameAction;

/// Map a raw key name to a game action.
///
/// The table:
/// ArrowDown -> MoveDown, ArrowLeft -> MoveLeft, ArrowRight -> MoveRight,
/// ArrowUp -> RotateCw, Control -> RotateCcw, Escape -> Pause.
/// Everything else is ignored.
pub fn action_for_key(name: &str) -> Option<GameAction> {
    match name {
        "ArrowDown" => Some(GameAction::MoveDown),
        "ArrowLeft" => Some(GameAction::MoveLeft),
        "ArrowRight" => Some(GameAction::MoveRight),
        "ArrowUp" => Some(GameAction::RotateCw),
        "Control" => Some(GameAction::RotateCcw),
        "Escape" => Some(GameAction::Pause),
        _ => None,
    }
}

/// Raw key name for a crossterm key code, where one exists.
///
/// `z` doubles as `Control` because many terminals never deliver a bare
/// modifier press.
pub fn raw_key_name(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::Down => Some("ArrowDown"),
        KeyCode::Left => Some("ArrowLeft"),
        KeyCode::Right => Some("ArrowRight"),
        KeyCode::Up => Some("ArrowUp"),
        KeyCode::Esc => Some("Escape"),
        KeyCode::Modifier(ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl) => {
            Some("Control")
        }
        KeyCode::Char('z') | KeyCode::Char('Z') => Some("Control"),
        _ => None,
    }
}

/// Translate a crossterm key event straight to a game action.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    raw_key_name(key.code).and_then(action_for_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_movement() {
        assert_eq!(action_for_key("ArrowDown"), Some(GameAction::MoveDown));
        assert_eq!(action_for_key("ArrowLeft"), Some(GameAction::MoveLeft));
        assert_eq!(action_for_key("ArrowRight"), Some(GameAction::MoveRight));
        assert_eq!(action_for_key("ArrowUp"), Some(GameAction::RotateCw));
    }

    #[test]
    fn control_and_escape_map_to_rotate_and_pause() {
        assert_eq!(action_for_key("Control"), Some(GameAction::RotateCcw));
        assert_eq!(action_for_key("Escape"), Some(GameAction::Pause));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(action_for_key("Space"), None);
        assert_eq!(action_for_key("a"), None);
        assert_eq!(action_for_key(""), None);
    }

    #[test]
    fn crossterm_codes_translate_to_raw_names() {
        assert_eq!(raw_key_name(KeyCode::Down), Some("ArrowDown"));
        assert_eq!(raw_key_name(KeyCode::Esc), Some("Escape"));
        assert_eq!(raw_key_name(KeyCode::Char('z')), Some("Control"));
        assert_eq!(raw_key_name(KeyCode::Char('x')), None);
    }
}
