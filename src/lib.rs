//! Tic-tac-toe with score tracking and a random computer opponent.
//!
//! # Architecture
//!
//! - **Engine** ([`GameEngine`]): turn order, move legality, win/draw
//!   detection, score tracking. Pure state machine; every mutation emits
//!   [`GameEvent`]s describing what changed.
//! - **View** ([`tui`]): a thin terminal adapter that forwards key presses
//!   as discrete inputs and renders the event stream.
//!
//! The computer opponent plays O with uniformly random moves after a short
//! delay. The delayed move carries a round token so that a reset or mode
//! toggle while it is pending safely invalidates it.
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{GameEngine, GameEvent};
//! use tokio::sync::mpsc;
//!
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! let mut engine = GameEngine::new(false, tx);
//!
//! engine.handle_cell_click(4); // X takes the center
//! assert!(matches!(
//!     rx.try_recv(),
//!     Ok(GameEvent::CellUpdated { index: 4, .. })
//! ));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod game;
pub mod tui;

pub use game::{Board, Cell, ComputerTurn, GameEngine, GameEvent, Mark, Player, WIN_LINES};
