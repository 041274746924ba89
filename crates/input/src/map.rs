//! Key mapping from terminal events to game commands.

use crate::types::{Command, Direction, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game command.
///
/// Enter is phase dependent: it starts the game from the menu and restarts it
/// after a session ended. Everything else maps the same way in every phase;
/// the simulation ignores commands that do not apply.
pub fn map_key(key: KeyEvent, phase: Phase) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Direction(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Direction(Direction::Up))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Direction(Direction::Left))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Direction(Direction::Down))
        }

        KeyCode::Enter => match phase {
            Phase::StartMenu => Some(Command::Start),
            Phase::Ended(_) => Some(Command::Restart),
            Phase::Playing | Phase::Terminated => None,
        },

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
