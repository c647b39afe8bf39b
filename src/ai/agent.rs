use crate::game::Board;

/// Interface for the computer side of a session.
///
/// Agents always play the computer's pieces and only see the board; the
/// session applies whatever column they return.
pub trait Agent {
    /// Pick a column to play, or `None` when no column is open.
    fn select_column(&mut self, board: &Board) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
