//! View model: renderable state built from engine events.

use crate::game::{GameEvent, Mark};
use tracing::debug;

/// Renderable state for the terminal UI.
///
/// Updated exclusively by applying [`GameEvent`]s, so the screen always
/// reflects what the engine reported rather than a second copy of the
/// rules.
pub struct App {
    cells: [Option<Mark>; 9],
    score_x: u32,
    score_o: u32,
    status: String,
    overlay: Option<String>,
    vs_computer: bool,
}

impl App {
    /// Creates the initial view state for a fresh engine.
    pub fn new(vs_computer: bool) -> Self {
        Self {
            cells: [None; 9],
            score_x: 0,
            score_o: 0,
            status: "Player X's turn".to_string(),
            overlay: None,
            vs_computer,
        }
    }

    /// Applies an engine event to the view state.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Applying game event to view");

        match event {
            GameEvent::CellUpdated { index, mark } => {
                self.cells[index] = Some(mark);
            }
            GameEvent::TurnChanged { mark } => {
                self.status = format!("Player {mark}'s turn");
            }
            GameEvent::GameEnded { draw, winner } => {
                let message = if draw {
                    "Draw!".to_string()
                } else {
                    // A win event always carries the winner.
                    let mark = winner.expect("win without winner");
                    format!("Player {mark} wins!")
                };
                self.status = message.clone();
                self.overlay = Some(message);
            }
            GameEvent::ScoreboardUpdated { x, o } => {
                self.score_x = x;
                self.score_o = o;
            }
            GameEvent::BoardCleared => {
                self.cells = [None; 9];
                self.overlay = None;
                self.status = "Player X's turn".to_string();
            }
        }
    }

    /// Records the current mode for the mode line (no engine event exists
    /// for this; the input loop sets it after a toggle).
    pub fn set_vs_computer(&mut self, vs_computer: bool) {
        self.vs_computer = vs_computer;
    }

    /// Mark shown in each cell, `None` when empty.
    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.cells
    }

    /// Current scores as `(x, o)`.
    pub fn scores(&self) -> (u32, u32) {
        (self.score_x, self.score_o)
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Result overlay text, when a round has ended.
    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    /// True when playing against the computer.
    pub fn vs_computer(&self) -> bool {
        self.vs_computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_drive_view_state() {
        let mut app = App::new(true);

        app.handle_event(GameEvent::CellUpdated {
            index: 4,
            mark: Mark::X,
        });
        assert_eq!(app.cells()[4], Some(Mark::X));

        app.handle_event(GameEvent::TurnChanged { mark: Mark::O });
        assert_eq!(app.status(), "Player O's turn");

        app.handle_event(GameEvent::GameEnded {
            draw: false,
            winner: Some(Mark::X),
        });
        assert_eq!(app.overlay(), Some("Player X wins!"));

        app.handle_event(GameEvent::ScoreboardUpdated { x: 1, o: 0 });
        assert_eq!(app.scores(), (1, 0));

        app.handle_event(GameEvent::BoardCleared);
        assert!(app.cells().iter().all(|c| c.is_none()));
        assert_eq!(app.overlay(), None);
    }

    #[test]
    fn test_draw_overlay() {
        let mut app = App::new(false);
        app.handle_event(GameEvent::GameEnded {
            draw: true,
            winner: None,
        });
        assert_eq!(app.overlay(), Some("Draw!"));
    }
}
