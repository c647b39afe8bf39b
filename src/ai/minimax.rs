use tracing::debug;

use crate::game::{Board, Player};

use super::agent::Agent;
use super::evaluator::{Heuristic, WindowHeuristic};

/// Plies searched by the computer unless configured otherwise.
pub const DEFAULT_DEPTH: usize = 4;

pub const NEG_INFINITY: i32 = i32::MIN;
pub const INFINITY: i32 = i32::MAX;

/// Outcome of a search: the best score found and the column that reaches it.
/// `column` is `None` at terminal nodes and when no column is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub column: Option<usize>,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Every child position is a fresh copy of its parent, so the board handed in
/// is never touched.
pub struct Minimax {
    heuristic: Box<dyn Heuristic>,
    maximizer: Player,
}

impl Minimax {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Minimax {
            heuristic,
            maximizer: Player::COMPUTER,
        }
    }

    /// Search `board` with the given window. `maximizing` says whether the
    /// maximizer is to move.
    pub fn minimax(
        &self,
        board: &Board,
        depth: usize,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        let mut nodes = 0;
        self.search(board, depth, alpha, beta, maximizing, &mut nodes)
    }

    /// Best move for the maximizer from a full window.
    pub fn best_move(&self, board: &Board, depth: usize) -> SearchResult {
        let mut nodes = 0u64;
        let result = self.search(board, depth, NEG_INFINITY, INFINITY, true, &mut nodes);
        debug!(depth, nodes, score = result.score, column = ?result.column, "search finished");
        result
    }

    fn is_terminal(&self, board: &Board, depth: usize) -> bool {
        // No anchor cell is known here, so neither win check can fire; the
        // depth cutoff and the heuristic stand in for game-end detection.
        depth == 0
            || board.check_win(None, self.maximizer.other())
            || board.check_win(None, self.maximizer)
            || board.check_tie()
    }

    fn search(
        &self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> SearchResult {
        *nodes += 1;

        if self.is_terminal(board, depth) {
            return SearchResult {
                score: self.heuristic.evaluate(board, self.maximizer),
                column: None,
            };
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.other()
        };
        let mut best = SearchResult {
            score: if maximizing { NEG_INFINITY } else { INFINITY },
            column: None,
        };

        for col in board.available_moves() {
            let mut child = board.clone();
            if child.apply_move(col, mover).is_err() {
                continue;
            }
            let score = self
                .search(&child, depth - 1, alpha, beta, !maximizing, nodes)
                .score;

            // Strict comparisons keep the leftmost of equally good columns.
            if maximizing {
                if score > best.score {
                    best = SearchResult { score, column: Some(col) };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult { score, column: Some(col) };
                }
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

/// Computer opponent that plays the minimax choice at a fixed depth.
pub struct MinimaxAgent {
    depth: usize,
    search: Minimax,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            search: Minimax::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, board: &Board) -> Option<usize> {
        self.search.best_move(board, self.depth).column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
