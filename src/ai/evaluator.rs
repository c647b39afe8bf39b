use crate::game::{Board, Cell, Player, CONNECT};

/// Directions a window can run in: across, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Trait for evaluating a board position from the maximizing player's side.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, maximizer: Player) -> i32;
}

/// Default heuristic: the sum of [`evaluate_window`] over every window.
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, maximizer: Player) -> i32 {
        evaluate_board(board, maximizer)
    }
}

/// Score four cells in a line.
///
/// Only windows still open for one side score. A completed four counts for the
/// maximizer alone.
pub fn evaluate_window(window: &[Cell; CONNECT], maximizer: Player) -> i32 {
    let own_cell = maximizer.to_cell();
    let opp_cell = maximizer.other().to_cell();
    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for &cell in window {
        match cell {
            c if c == own_cell => own += 1,
            c if c == opp_cell => opp += 1,
            _ => empty += 1,
        }
    }

    match (own, opp, empty) {
        (4, _, _) => 100,
        (3, _, 1) => 5,
        (2, _, 2) => 2,
        (_, 3, 1) => -5,
        (_, 2, 2) => -2,
        _ => 0,
    }
}

/// Sum the window scores over every horizontal, vertical and diagonal window.
/// Overlapping windows are each counted.
pub fn evaluate_board(board: &Board, maximizer: Player) -> i32 {
    let mut score = 0;
    for (row_dir, col_dir) in DIRECTIONS {
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                if let Some(window) = window_at(board, row, col, row_dir, col_dir) {
                    score += evaluate_window(&window, maximizer);
                }
            }
        }
    }
    score
}

fn window_at(
    board: &Board,
    row: usize,
    col: usize,
    row_dir: isize,
    col_dir: isize,
) -> Option<[Cell; CONNECT]> {
    let mut window = [Cell::Empty; CONNECT];
    for (i, slot) in window.iter_mut().enumerate() {
        let r = row as isize + row_dir * i as isize;
        let c = col as isize + col_dir * i as isize;
        if !board.in_bounds(r, c) {
            return None;
        }
        *slot = board.get(r as usize, c as usize);
    }
    Some(window)
}
