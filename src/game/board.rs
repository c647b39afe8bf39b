use std::fmt;

use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Pieces in a line needed to win.
pub const CONNECT: usize = 4;

/// Direction pairs walked by `check_win`. Vertical only walks downward since
/// nothing can sit above the piece that was just dropped.
const WIN_AXES: [&[(isize, isize)]; 4] = [
    &[(0, 1), (0, -1)],
    &[(1, 0)],
    &[(1, 1), (-1, -1)],
    &[(1, -1), (-1, 1)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Single character used by the text renderer.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'X',
            Cell::Yellow => 'O',
        }
    }
}

/// A Connect Four grid. Row 0 is the top, row `rows - 1` is the bottom.
///
/// Cells only change through [`Board::apply_move`], which keeps every column
/// stacked from the bottom with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 6x7 board
    pub fn new() -> Self {
        Self::with_size(ROWS, COLS)
    }

    /// Create a new empty board with the given dimensions
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Scan a column from the bottom up and return the first empty row
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn apply_move(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row * self.cols + col] = player.to_cell();
        Ok(row)
    }

    /// Length of the run of `player` pieces starting at (row, col) and walking
    /// in (row_dir, col_dir). The origin is included.
    pub fn count_connected(
        &self,
        row: usize,
        col: usize,
        player: Player,
        row_dir: isize,
        col_dir: isize,
    ) -> usize {
        let target = player.to_cell();
        let mut r = row as isize;
        let mut c = col as isize;
        let mut count = 0;
        while self.in_bounds(r, c) && self.get(r as usize, c as usize) == target {
            count += 1;
            r += row_dir;
            c += col_dir;
        }
        count
    }

    /// Check whether `player` won with the piece at `anchor`.
    ///
    /// Each axis adds up its directional runs, and every run includes the
    /// anchor, so the anchor is counted once per direction. Without an anchor
    /// there is nothing to walk from and the answer is always `false`.
    pub fn check_win(&self, anchor: Option<(usize, usize)>, player: Player) -> bool {
        let Some((row, col)) = anchor else {
            return false;
        };

        WIN_AXES.iter().any(|directions| {
            directions
                .iter()
                .map(|&(dr, dc)| self.count_connected(row, col, player, dr, dc))
                .sum::<usize>()
                >= CONNECT
        })
    }

    /// True when no empty cell remains
    pub fn check_tie(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Columns that can still take a piece, in ascending order
    pub fn available_moves(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Build a board from rows of `.`/`X`/`O`, top row first. Pieces are
    /// dropped column by column so gravity holds.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Board {
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let mut board = Board::with_size(grid.len(), grid[0].len());
        for col in 0..board.cols {
            for row in (0..board.rows).rev() {
                let player = match grid[row][col] {
                    'X' => Player::Red,
                    'O' => Player::Yellow,
                    _ => continue,
                };
                board.apply_move(col, player).unwrap();
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols).map(|col| self.get(row, col).symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
