use tracing::{debug, info, warn};

use super::{Board, Cell, Player};
use crate::ai::{Agent, MinimaxAgent, RandomAgent};
use crate::config::{AppConfig, OpponentKind};
use crate::error::{ConfigError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Something that happened while a turn was played, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Placed {
        player: Player,
        row: usize,
        col: usize,
    },
    /// The game ended. `board` is the final position; the session has already
    /// been reset when the caller sees this.
    GameOver { outcome: GameOutcome, board: Board },
}

/// Everything a single call into the session produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub events: Vec<GameEvent>,
}

impl TurnReport {
    /// How the game ended, if it ended during this turn
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.events.iter().find_map(|event| match event {
            GameEvent::GameOver { outcome, .. } => Some(*outcome),
            _ => None,
        })
    }

    /// Column the computer answered with, if it moved
    pub fn computer_column(&self) -> Option<usize> {
        self.events.iter().find_map(|event| match event {
            GameEvent::Placed { player, col, .. } if *player == Player::COMPUTER => Some(*col),
            _ => None,
        })
    }

    /// Final board of a game that ended during this turn
    pub fn final_board(&self) -> Option<&Board> {
        self.events.iter().find_map(|event| match event {
            GameEvent::GameOver { board, .. } => Some(board),
            _ => None,
        })
    }
}

/// A game between the human and a computer agent.
///
/// The session is the only owner of the board. Search only ever sees a shared
/// reference and works on its own copies.
pub struct Session {
    board: Board,
    current_player: Player,
    computer: Box<dyn Agent>,
}

impl Session {
    /// Start a new game with the board size and opponent from `config`.
    /// The config is validated first.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let computer: Box<dyn Agent> = match config.opponent.kind {
            OpponentKind::Minimax => Box::new(MinimaxAgent::new(config.search.depth)),
            OpponentKind::Random => match config.opponent.seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
        };
        Ok(Self::with_agent(
            Board::with_size(config.board.rows, config.board.cols),
            computer,
        ))
    }

    /// Start a new game on `board` against an arbitrary agent
    pub fn with_agent(board: Board, computer: Box<dyn Agent>) -> Self {
        info!(
            rows = board.rows(),
            cols = board.cols(),
            opponent = computer.name(),
            "new game"
        );
        Session {
            board,
            current_player: Player::HUMAN,
            computer,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read a single cell for rendering, `None` outside the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if !self.board.in_bounds(row as isize, col as isize) {
            return None;
        }
        Some(self.board.get(row, col))
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn opponent_name(&self) -> &str {
        self.computer.name()
    }

    /// Clear the board and give the first move back to the human
    pub fn reset(&mut self) {
        self.board = Board::with_size(self.board.rows(), self.board.cols());
        self.current_player = Player::HUMAN;
        debug!("session reset");
    }

    /// Play the human's piece in `col`. If the game goes on, the computer
    /// answers within the same call.
    pub fn play_human_move(&mut self, col: usize) -> Result<TurnReport, MoveError> {
        let mut report = TurnReport::default();
        let terminal = self.place(col, Player::HUMAN, &mut report)?;

        if !terminal && self.current_player == Player::COMPUTER {
            report.events.extend(self.computer_move().events);
        }
        Ok(report)
    }

    /// Ask the computer for a column and play it.
    pub fn computer_move(&mut self) -> TurnReport {
        let mut report = TurnReport::default();
        match self.computer.select_column(&self.board) {
            Some(col) => {
                if let Err(err) = self.place(col, Player::COMPUTER, &mut report) {
                    warn!(col, %err, "computer picked an unplayable column");
                    self.current_player = Player::HUMAN;
                }
            }
            None => {
                warn!("computer has no legal move");
                self.current_player = Player::HUMAN;
            }
        }
        report
    }

    /// Apply a move for `player` and settle the turn. Returns whether the game
    /// ended, in which case the session has been reset.
    fn place(
        &mut self,
        col: usize,
        player: Player,
        report: &mut TurnReport,
    ) -> Result<bool, MoveError> {
        let row = self.board.apply_move(col, player)?;
        debug!(player = player.name(), row, col, "piece placed");
        report.events.push(GameEvent::Placed { player, row, col });

        let outcome = if self.board.check_win(Some((row, col)), player) {
            Some(GameOutcome::Winner(player))
        } else if self.board.check_tie() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                info!(?outcome, "game over");
                report.events.push(GameEvent::GameOver {
                    outcome,
                    board: self.board.clone(),
                });
                self.reset();
                Ok(true)
            }
            None => {
                self.current_player = player.other();
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Plays a fixed list of columns, then gives up.
    struct ScriptedAgent {
        columns: VecDeque<usize>,
    }

    impl ScriptedAgent {
        fn boxed(columns: &[usize]) -> Box<dyn Agent> {
            Box::new(ScriptedAgent {
                columns: columns.iter().copied().collect(),
            })
        }
    }

    impl Agent for ScriptedAgent {
        fn select_column(&mut self, _board: &Board) -> Option<usize> {
            self.columns.pop_front()
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    fn scripted(columns: &[usize]) -> Session {
        Session::with_agent(Board::new(), ScriptedAgent::boxed(columns))
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(&AppConfig::default()).unwrap();
        assert_eq!(session.current_player(), Player::HUMAN);
        assert_eq!(session.board().occupied(), 0);
        assert_eq!(session.opponent_name(), "Minimax");
    }

    #[test]
    fn test_human_move_gets_reply() {
        let mut session = scripted(&[6]);
        let report = session.play_human_move(3).unwrap();

        assert_eq!(
            report.events,
            vec![
                GameEvent::Placed { player: Player::Red, row: 5, col: 3 },
                GameEvent::Placed { player: Player::Yellow, row: 5, col: 6 },
            ]
        );
        assert_eq!(report.computer_column(), Some(6));
        assert_eq!(report.outcome(), None);
        assert_eq!(session.current_player(), Player::HUMAN);
        assert_eq!(session.cell(5, 3), Some(Cell::Red));
        assert_eq!(session.cell(5, 6), Some(Cell::Yellow));
    }

    #[test]
    fn test_invalid_column_leaves_session_untouched() {
        let mut session = scripted(&[6]);
        assert_eq!(
            session.play_human_move(7),
            Err(MoveError::InvalidColumn { column: 7, cols: 7 })
        );
        assert_eq!(session.board().occupied(), 0);
        assert_eq!(session.current_player(), Player::HUMAN);
    }

    #[test]
    fn test_full_column_is_rejected() {
        let mut session = scripted(&[0, 0, 0]);
        for _ in 0..3 {
            session.play_human_move(0).unwrap();
        }
        assert!(session.board().is_column_full(0));

        let before = session.board().clone();
        assert_eq!(
            session.play_human_move(0),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(session.board(), &before);
        assert_eq!(session.current_player(), Player::HUMAN);
    }

    #[test]
    fn test_human_win_resets_session() {
        let mut session = scripted(&[6, 6]);
        session.play_human_move(0).unwrap();
        session.play_human_move(1).unwrap();
        let report = session.play_human_move(2).unwrap();

        // Three across the bottom already sums to four through the anchor.
        assert_eq!(report.outcome(), Some(GameOutcome::Winner(Player::HUMAN)));
        assert_eq!(report.computer_column(), None);
        let final_board = report.final_board().unwrap();
        assert_eq!(final_board.occupied(), 5);
        assert_eq!(final_board.get(5, 2), Cell::Red);

        assert_eq!(session.board().occupied(), 0);
        assert_eq!(session.current_player(), Player::HUMAN);
    }

    #[test]
    fn test_computer_win_resets_session() {
        let mut session = scripted(&[6, 6, 6, 6]);
        for col in [0, 2, 4] {
            let report = session.play_human_move(col).unwrap();
            assert_eq!(report.outcome(), None);
        }
        let report = session.play_human_move(0).unwrap();

        assert_eq!(report.computer_column(), Some(6));
        assert_eq!(report.outcome(), Some(GameOutcome::Winner(Player::COMPUTER)));
        assert_eq!(report.final_board().unwrap().occupied(), 8);
        assert_eq!(session.board().occupied(), 0);
        assert_eq!(session.current_player(), Player::HUMAN);
    }

    #[test]
    fn test_computer_without_move_hands_turn_back() {
        let mut session = scripted(&[]);
        let report = session.play_human_move(3).unwrap();
        assert_eq!(report.events.len(), 1);
        assert_eq!(session.current_player(), Player::HUMAN);
    }

    #[test]
    fn test_cell_outside_board_is_none() {
        let session = scripted(&[]);
        assert_eq!(session.cell(0, 0), Some(Cell::Empty));
        assert_eq!(session.cell(6, 0), None);
        assert_eq!(session.cell(0, 7), None);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(matches!(
            Session::new(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_draw_resets_session() {
        let mut session = Session::with_agent(
            Board::with_size(4, 4),
            ScriptedAgent::boxed(&[0, 0, 1, 2, 3, 2, 3, 2]),
        );
        let reports: Vec<TurnReport> = [0, 0, 1, 1, 1, 2, 3, 3]
            .into_iter()
            .map(|col| session.play_human_move(col).unwrap())
            .collect();
        let last = reports.last().unwrap();
        assert!(reports[..reports.len() - 1].iter().all(|r| r.outcome().is_none()));

        assert_eq!(last.outcome(), Some(GameOutcome::Draw));
        assert_eq!(last.final_board().unwrap().occupied(), 16);
        assert_eq!(session.board().occupied(), 0);
        assert_eq!(session.current_player(), Player::HUMAN);
    }

    #[test]
    fn test_reset() {
        let mut session = scripted(&[1]);
        session.play_human_move(3).unwrap();
        session.reset();
        assert_eq!(session.board().occupied(), 0);
        assert_eq!(session.current_player(), Player::HUMAN);
    }

    #[test]
    fn test_minimax_reply_on_opening() {
        // Depth-4 search answers a centre opening in column 1.
        let mut session = Session::new(&AppConfig::default()).unwrap();
        let report = session.play_human_move(3).unwrap();
        assert_eq!(report.computer_column(), Some(1));
        assert_eq!(session.cell(5, 1), Some(Cell::Yellow));
    }

    #[test]
    fn test_full_game_against_minimax_completes() {
        let mut human = RandomAgent::with_seed(11);
        let mut session = Session::new(&AppConfig::default()).unwrap();
        let mut finished = false;

        // 21 human turns fill a 6x7 board even if nobody wins.
        for _ in 0..21 {
            let col = human.select_column(session.board()).unwrap();
            let report = session.play_human_move(col).unwrap();
            if report.outcome().is_some() {
                finished = true;
                break;
            }
        }

        assert!(finished, "game should end within 21 human moves");
        assert_eq!(session.board().occupied(), 0);
    }
}
