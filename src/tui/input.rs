//! Key bindings for the game controls.

use crossterm::event::KeyCode;

/// An engine-facing action requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click the cell at the given index (0-8).
    Click(usize),
    /// Start a fresh round (play again / reset game).
    ResetGame,
    /// Zero both scores.
    ResetScores,
    /// Toggle the computer opponent.
    ToggleMode,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an action, if any.
///
/// Digits 1-9 address the board cells row by row, matching the labels
/// drawn in empty cells.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Some(Action::Click(index))
        }
        KeyCode::Char('r') => Some(Action::ResetGame),
        KeyCode::Char('s') => Some(Action::ResetScores),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Click(0)));
        assert_eq!(action_for(KeyCode::Char('5')), Some(Action::Click(4)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Click(8)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(KeyCode::Char('r')), Some(Action::ResetGame));
        assert_eq!(action_for(KeyCode::Char('s')), Some(Action::ResetScores));
        assert_eq!(action_for(KeyCode::Char('m')), Some(Action::ToggleMode));
        assert_eq!(action_for(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(action_for(KeyCode::Char('0')), None);
        assert_eq!(action_for(KeyCode::Char('x')), None);
        assert_eq!(action_for(KeyCode::Enter), None);
    }
}
