use std::io::{self, BufRead, Write};

use crate::error::MoveError;
use crate::game::{Board, GameEvent, GameOutcome, Player, Session};

/// Play over plain text. Columns are typed 1-based; `r` restarts, `q` quits.
/// Returns when the input ends or the player quits.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "Connect Four vs {}. Enter a column 1-{}, 'r' to restart, 'q' to quit.",
        session.opponent_name(),
        session.board().cols()
    )?;
    render(session.board(), output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "r" | "restart" => {
                session.reset();
                writeln!(output, "New game started!")?;
                render(session.board(), output)?;
            }
            other => play(session, other, output)?,
        }
    }
    Ok(())
}

fn play<W: Write>(session: &mut Session, input: &str, output: &mut W) -> io::Result<()> {
    let cols = session.board().cols();
    let column = match input.parse::<usize>() {
        Ok(n) if n >= 1 => n - 1,
        _ => {
            writeln!(output, "Enter a column number between 1 and {cols}")?;
            return Ok(());
        }
    };

    let report = match session.play_human_move(column) {
        Ok(report) => report,
        Err(MoveError::ColumnFull { .. }) => {
            writeln!(output, "Column {} is full!", column + 1)?;
            return Ok(());
        }
        Err(MoveError::InvalidColumn { .. }) => {
            writeln!(output, "Invalid column!")?;
            return Ok(());
        }
    };

    for event in &report.events {
        match event {
            GameEvent::Placed { player, col, .. } if *player == Player::COMPUTER => {
                writeln!(
                    output,
                    "{} ({}) plays column {}",
                    player.name(),
                    session.opponent_name(),
                    col + 1
                )?;
            }
            GameEvent::Placed { .. } => {}
            GameEvent::GameOver { outcome, board } => {
                render(board, output)?;
                match outcome {
                    GameOutcome::Winner(player) => writeln!(output, "{} wins!", player.name())?,
                    GameOutcome::Draw => writeln!(output, "It's a draw!")?,
                }
                writeln!(output, "New game started!")?;
            }
        }
    }
    render(session.board(), output)
}

fn render<W: Write>(board: &Board, output: &mut W) -> io::Result<()> {
    write!(output, "{board}")?;
    let footer: String = (0..board.cols())
        .map(|col| char::from_digit(((col + 1) % 10) as u32, 10).unwrap_or('?'))
        .collect();
    writeln!(output, "{footer}")
}
