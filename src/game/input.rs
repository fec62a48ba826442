use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

use crate::ai::Difficulty;
use crate::config::KeyBindings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    Rematch,
    LeftPaddleUp,
    LeftPaddleDown,
    RightPaddleUp,
    RightPaddleDown,
    /// Live difficulty switch (single-player mode, keys 1/2/3)
    SwitchDifficulty(Difficulty),
}

/// Translate a key-binding name from the config file into a key code.
/// Unknown names never match any key.
pub fn key_code(name: &str) -> Option<KeyCode> {
    match name {
        "Up" => Some(KeyCode::Up),
        "Down" => Some(KeyCode::Down),
        "Left" => Some(KeyCode::Left),
        "Right" => Some(KeyCode::Right),
        "Enter" => Some(KeyCode::Enter),
        "Esc" => Some(KeyCode::Esc),
        "Space" => Some(KeyCode::Char(' ')),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}

fn matches_binding(code: KeyCode, binding: &str) -> bool {
    match (key_code(binding), code) {
        (Some(KeyCode::Char(bound)), KeyCode::Char(pressed)) => {
            bound == pressed.to_ascii_lowercase()
        }
        (Some(bound), pressed) => bound == pressed,
        (None, _) => false,
    }
}

/// Poll pending key presses for the single-player mode: the human drives
/// the left paddle, 1/2/3 switch AI difficulty.
pub fn poll_input_player_left(keys: &KeyBindings) -> Result<Vec<InputAction>, io::Error> {
    poll_with(|code, actions| {
        if matches_binding(code, &keys.player_paddle_up) {
            actions.push(InputAction::LeftPaddleUp);
        } else if matches_binding(code, &keys.player_paddle_down) {
            actions.push(InputAction::LeftPaddleDown);
        } else if matches_binding(code, &keys.quit) || code == KeyCode::Esc {
            actions.push(InputAction::Quit);
        } else if matches_binding(code, &keys.rematch) {
            actions.push(InputAction::Rematch);
        } else {
            match code {
                KeyCode::Char('1') => actions.push(InputAction::SwitchDifficulty(Difficulty::Easy)),
                KeyCode::Char('2') => {
                    actions.push(InputAction::SwitchDifficulty(Difficulty::Medium))
                }
                KeyCode::Char('3') => actions.push(InputAction::SwitchDifficulty(Difficulty::Hard)),
                _ => {}
            }
        }
    })
}

/// Poll pending key presses for the local 2-player mode.
pub fn poll_input_local_2p(keys: &KeyBindings) -> Result<Vec<InputAction>, io::Error> {
    poll_with(|code, actions| {
        if matches_binding(code, &keys.left_paddle_up) {
            actions.push(InputAction::LeftPaddleUp);
        } else if matches_binding(code, &keys.left_paddle_down) {
            actions.push(InputAction::LeftPaddleDown);
        } else if matches_binding(code, &keys.right_paddle_up) {
            actions.push(InputAction::RightPaddleUp);
        } else if matches_binding(code, &keys.right_paddle_down) {
            actions.push(InputAction::RightPaddleDown);
        } else if matches_binding(code, &keys.quit) || code == KeyCode::Esc {
            actions.push(InputAction::Quit);
        } else if matches_binding(code, &keys.rematch) {
            actions.push(InputAction::Rematch);
        }
    })
}

/// Drain all pending Press events, mapping each through `map`.
fn poll_with(
    mut map: impl FnMut(KeyCode, &mut Vec<InputAction>),
) -> Result<Vec<InputAction>, io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                map(key.code, &mut actions);
            }
        }
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_code_named_keys() {
        assert_eq!(key_code("Up"), Some(KeyCode::Up));
        assert_eq!(key_code("Enter"), Some(KeyCode::Enter));
        assert_eq!(key_code("Esc"), Some(KeyCode::Esc));
    }

    #[test]
    fn test_key_code_single_char_lowercased() {
        assert_eq!(key_code("W"), Some(KeyCode::Char('w')));
        assert_eq!(key_code("s"), Some(KeyCode::Char('s')));
    }

    #[test]
    fn test_key_code_rejects_unknown_names() {
        assert_eq!(key_code("NotAKey"), None);
        assert_eq!(key_code(""), None);
    }

    #[test]
    fn test_matches_binding_case_insensitive() {
        assert!(matches_binding(KeyCode::Char('w'), "W"));
        assert!(matches_binding(KeyCode::Char('W'), "W"));
        assert!(!matches_binding(KeyCode::Char('x'), "W"));
    }
}
