//! Core Connect Four game logic: board representation, player types, and the
//! session that sequences human and computer turns.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use player::Player;
pub use session::{GameEvent, GameOutcome, Session, TurnReport};
