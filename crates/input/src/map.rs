//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrows, vi keys (`hjkl`) and `wasd` slide the board; `r` restarts.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    // Ctrl-modified keys belong to the terminal, not the game
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let dir = match key.code {
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Direction::Up,
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Direction::Down,
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Direction::Left,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Direction::Right,

        KeyCode::Char('r') | KeyCode::Char('R') => return Some(GameAction::Restart),

        _ => return None,
    };

    Some(GameAction::Move(dir))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
