use crate::error::MoveError;
use crate::game::{Board, GameOutcome, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: Session,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Final position of the last finished game, shown until the next key.
    finished_board: Option<Board>,
}

impl App {
    pub fn new(session: Session) -> Self {
        let selected_column = session.board().cols() / 2; // Start in middle
        App {
            session,
            selected_column,
            should_quit: false,
            message: None,
            finished_board: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message and the finished board on any key press
        self.message = None;
        self.finished_board = None;

        let cols = self.session.board().cols();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < cols {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.selected_column = cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column; the computer answers before this returns.
    fn drop_piece(&mut self) {
        match self.session.play_human_move(self.selected_column) {
            Ok(report) => {
                if let Some(outcome) = report.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("{} wins! A new game has started.", player.name())
                        }
                        GameOutcome::Draw => "It's a draw! A new game has started.".to_string(),
                    });
                    self.finished_board = report.final_board().cloned();
                } else if let Some(col) = report.computer_column() {
                    self.message = Some(format!(
                        "{} played column {}",
                        self.session.opponent_name(),
                        col + 1
                    ));
                }
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let board = self
            .finished_board
            .as_ref()
            .unwrap_or_else(|| self.session.board());
        super::game_view::render(
            frame,
            board,
            &self.session,
            self.selected_column,
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn arrows_move_the_selection_within_bounds() {
        let mut app = App::new(Session::new(&AppConfig::default()).unwrap());
        assert_eq!(app.selected_column, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn enter_plays_and_reports_the_reply() {
        let mut app = App::new(Session::new(&AppConfig::default()).unwrap());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.board().occupied(), 2);
        assert_eq!(app.message.as_deref(), Some("Minimax played column 2"));
    }

    #[test]
    fn digit_keys_drop_directly() {
        let mut app = App::new(Session::new(&AppConfig::default()).unwrap());
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selected_column, 0);
        assert_eq!(app.session.board().occupied(), 2);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.session.board().occupied(), 2);
    }

    #[test]
    fn quit_and_restart() {
        let mut app = App::new(Session::new(&AppConfig::default()).unwrap());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.board().occupied(), 0);
        assert_eq!(app.message.as_deref(), Some("New game started!"));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn renders_to_a_test_backend() {
        let app = App::new(Session::new(&AppConfig::default()).unwrap());
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Connect Four"));
    }
}
