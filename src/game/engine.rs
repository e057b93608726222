//! Turn orchestration, round lifecycle, and score tracking.

use super::board::{Board, Mark};
use super::event::GameEvent;
use super::player::Player;
use rand::Rng;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, instrument};

/// Engine phase: accepting moves, or terminal and awaiting a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active,
    Ended,
}

/// Token identifying one scheduled computer move.
///
/// Issued by [`GameEngine::handle_cell_click`] when a delayed opponent move
/// should be scheduled. The token captures the round it was issued for;
/// [`GameEngine::computer_move`] ignores tokens from earlier rounds, so a
/// delayed move that outlives a reset or mode toggle cannot touch the new
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn {
    round: u64,
}

/// The game engine: board, two players, and the turn state machine.
///
/// All state mutation happens through discrete input calls; each call emits
/// [`GameEvent`]s describing what changed. Illegal inputs (occupied cell,
/// ended round) are silent no-ops rather than errors.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    /// Fixed order: index 0 = X, index 1 = O.
    players: [Player; 2],
    /// Index of the player to move (0 or 1).
    current: usize,
    phase: Phase,
    vs_computer: bool,
    /// Monotonically increasing round id, bumped on every board reset.
    round: u64,
    events: UnboundedSender<GameEvent>,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move, and zero scores.
    #[instrument(skip(events))]
    pub fn new(vs_computer: bool, events: UnboundedSender<GameEvent>) -> Self {
        info!(vs_computer, "Creating game engine");
        Self {
            board: Board::new(),
            players: [Player::new(Mark::X), Player::new(Mark::O)],
            current: 0,
            phase: Phase::Active,
            vs_computer,
            round: 0,
            events,
        }
    }

    /// Handles a click on the given cell.
    ///
    /// No-op if the round has ended or the cell is occupied. Otherwise the
    /// current player's mark is placed there. Returns a [`ComputerTurn`]
    /// token when the caller should schedule [`Self::computer_move`] after
    /// the configured delay (round still active, computer mode on, and the
    /// new turn belongs to O).
    #[instrument(skip(self), fields(round = self.round))]
    pub fn handle_cell_click(&mut self, index: usize) -> Option<ComputerTurn> {
        if self.phase == Phase::Ended || !self.board.is_empty(index) {
            debug!(index, "Ignoring click (round over or cell occupied)");
            return None;
        }

        self.make_move(index);

        if self.phase == Phase::Active && self.vs_computer && self.current == 1 {
            debug!(round = self.round, "Computer move due");
            return Some(ComputerTurn { round: self.round });
        }
        None
    }

    /// Plays the computer's move: a uniformly random empty cell for O.
    ///
    /// Guards against stale scheduled calls: no-op unless the round is
    /// still active, it is O's turn, and the token matches the current
    /// round. Also a no-op if no empty cell remains, which the draw check
    /// rules out but the guard keeps the operation total.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self, turn: ComputerTurn) {
        self.computer_move_with_rng(turn, &mut rand::thread_rng());
    }

    /// [`Self::computer_move`] with an explicit random source.
    pub fn computer_move_with_rng<R: Rng>(&mut self, turn: ComputerTurn, rng: &mut R) {
        if self.phase == Phase::Ended || self.current != 1 || turn.round != self.round {
            debug!(
                token_round = turn.round,
                round = self.round,
                "Dropping stale computer move"
            );
            return;
        }

        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return;
        }

        let index = empty[rng.gen_range(0..empty.len())];
        debug!(index, "Computer plays");
        self.make_move(index);
    }

    /// Places the current player's mark and advances the state machine.
    fn make_move(&mut self, index: usize) {
        let mark = self.players[self.current].mark();
        self.board.set(index, mark);
        self.emit(GameEvent::CellUpdated { index, mark });

        if self.board.has_winner(mark) {
            self.end_game(false, Some(self.current));
        } else if self.board.is_full() {
            self.end_game(true, None);
        } else {
            self.current = 1 - self.current;
            self.emit(GameEvent::TurnChanged {
                mark: self.current_mark(),
            });
        }
    }

    /// Ends the round, crediting the winner unless it was a draw.
    fn end_game(&mut self, draw: bool, winner: Option<usize>) {
        self.phase = Phase::Ended;

        let winner_mark = winner.map(|i| {
            self.players[i].increment_score();
            self.players[i].mark()
        });
        info!(draw, winner = ?winner_mark, "Round over");

        self.emit(GameEvent::GameEnded {
            draw,
            winner: winner_mark,
        });
        self.emit_scoreboard();
    }

    /// Starts a fresh round: empty board, X to move. Scores are untouched.
    ///
    /// Bumps the round id, invalidating any pending [`ComputerTurn`].
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.phase = Phase::Active;
        self.current = 0;
        self.round += 1;
        info!(round = self.round, "Starting new round");

        self.emit(GameEvent::BoardCleared);
        self.emit(GameEvent::TurnChanged {
            mark: self.current_mark(),
        });
    }

    /// Zeroes both scores. Board and turn state are untouched.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.reset_score();
        }
        self.emit_scoreboard();
    }

    /// Flips computer mode and starts a fresh round.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) {
        self.vs_computer = !self.vs_computer;
        info!(vs_computer = self.vs_computer, "Toggled game mode");
        self.reset_game();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark of the player to move.
    pub fn current_mark(&self) -> Mark {
        self.players[self.current].mark()
    }

    /// True while the round is accepting moves.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// True when O's moves are generated automatically.
    pub fn vs_computer(&self) -> bool {
        self.vs_computer
    }

    /// Returns the scores as `(x, o)`.
    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].score(), self.players[1].score())
    }

    fn emit_scoreboard(&self) {
        let (x, o) = self.scores();
        self.emit(GameEvent::ScoreboardUpdated { x, o });
    }

    /// Sends an event to the view. A departed view is not an engine error.
    fn emit(&self, event: GameEvent) {
        let _ = self.events.send(event);
    }
}
