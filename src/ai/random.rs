use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::Board;

use super::agent::Agent;

/// An agent that selects uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board) -> Option<usize> {
        let columns = board.available_moves();
        if columns.is_empty() {
            return None;
        }
        Some(columns[self.rng.random_range(0..columns.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, ROWS};

    #[test]
    fn test_random_agent_selects_legal_column() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.apply_move(4, Player::Red).unwrap();
        }
        let legal = board.available_moves();

        for _ in 0..100 {
            let col = agent.select_column(&board).unwrap();
            assert!(legal.contains(&col), "Column {col} is not legal");
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed(3);
        let mut b = RandomAgent::with_seed(3);
        for _ in 0..20 {
            assert_eq!(a.select_column(&board), b.select_column(&board));
        }
    }

    #[test]
    fn test_full_board_has_no_column() {
        let mut board = Board::with_size(4, 4);
        for col in 0..4 {
            for _ in 0..4 {
                board.apply_move(col, Player::Yellow).unwrap();
            }
        }
        assert_eq!(RandomAgent::new().select_column(&board), None);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
