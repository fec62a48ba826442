// Menu input handling

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

use super::state::{GameMode, MenuItem, MenuState};

/// Menu action result
pub enum MenuAction {
    /// Continue in menu
    None,
    /// Start a game mode
    StartGame(GameMode),
    /// Exit application
    Quit,
}

/// Handle menu input and return the next action
pub fn handle_menu_input(menu_state: &mut MenuState) -> Result<MenuAction, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key_press(menu_state, key.code));
            }
        }
    }

    Ok(MenuAction::None)
}

fn handle_key_press(menu_state: &mut MenuState, key_code: KeyCode) -> MenuAction {
    // Difficulty submenu captures input while open
    if menu_state.in_difficulty_select {
        return handle_difficulty_input(menu_state, key_code);
    }

    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            menu_state.select_previous();
            MenuAction::None
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            menu_state.select_next();
            MenuAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => handle_menu_selection(menu_state),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => MenuAction::Quit,
        _ => MenuAction::None,
    }
}

fn handle_menu_selection(menu_state: &mut MenuState) -> MenuAction {
    match menu_state.selected_item() {
        MenuItem::SinglePlayer => {
            menu_state.start_difficulty_select();
            MenuAction::None
        }
        MenuItem::LocalTwoPlayer => MenuAction::StartGame(GameMode::LocalTwoPlayer),
        MenuItem::Quit => MenuAction::Quit,
    }
}

fn handle_difficulty_input(menu_state: &mut MenuState, key_code: KeyCode) -> MenuAction {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            menu_state.select_previous_difficulty();
            MenuAction::None
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            menu_state.select_next_difficulty();
            MenuAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let difficulty = menu_state.submit_difficulty();
            MenuAction::StartGame(GameMode::SinglePlayer(difficulty))
        }
        KeyCode::Esc => {
            menu_state.cancel_difficulty_select();
            MenuAction::None
        }
        _ => MenuAction::None,
    }
}
