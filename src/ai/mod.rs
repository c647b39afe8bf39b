//! Computer opponents: the static evaluator, minimax search with alpha-beta
//! pruning, and the agents a session can play against.

mod agent;
pub mod evaluator;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use evaluator::{evaluate_board, evaluate_window, Heuristic, WindowHeuristic};
pub use minimax::{Minimax, MinimaxAgent, SearchResult, DEFAULT_DEPTH};
pub use random::RandomAgent;
