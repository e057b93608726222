//! Game-state engine: board, players, turn machine, and view events.

mod board;
mod engine;
mod event;
mod player;

pub use board::{Board, Cell, Mark, WIN_LINES};
pub use engine::{ComputerTurn, GameEngine};
pub use event::GameEvent;
pub use player::Player;
