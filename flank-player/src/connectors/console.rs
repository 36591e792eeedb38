//! [`Connector`] for playing in a terminal.

use super::{Command, Connector};
use crate::search::SearchReport;
use async_std::io::{self, prelude::*};
use async_trait::async_trait;
use flank_othello::{Game, GameError, Location, Outcome, Player};
use log::error;

/// Reads commands from stdin and draws the board on stdout.
#[derive(Debug, Default)]
pub struct ConsoleConnector {
    // Avoid drawing the same position twice when input is rejected.
    last_drawn: Option<Game>,
}

impl ConsoleConnector {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw(&mut self, game: &Game) {
        if self.last_drawn.as_ref() != Some(game) {
            println!("\n{}\n", game);
            self.last_drawn = Some(*game);
        }
    }
}

/// Parse one line of input: a location ("D3"), zero-indexed coordinates
/// ("2 3"), "reset", or "quit".
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => return Some(Command::Quit),
        "reset" | "new" => return Some(Command::Reset),
        _ => {}
    }

    if let Ok(loc) = line.parse::<Location>() {
        return Some(Command::Place(loc));
    }

    let mut segments = line.split_whitespace();
    let row: usize = segments.next()?.parse().ok()?;
    let col: usize = segments.next()?.parse().ok()?;
    if segments.next().is_some() {
        return None;
    }

    Location::from_coords(row, col).map(Command::Place)
}

#[async_trait]
impl Connector for ConsoleConnector {
    async fn next_command(&mut self, game: &Game) -> Command {
        loop {
            self.draw(game);
            print!("{} to move {}: ", game.active_player(), game.legal_moves());
            if let Err(e) = io::stdout().flush().await {
                error!("Cannot write to stdout: {}", e);
                return Command::Quit;
            }

            let mut buffer = String::new();
            match io::stdin().read_line(&mut buffer).await {
                // End of input
                Ok(0) => return Command::Quit,
                Ok(_) => {}
                Err(e) => {
                    error!("Cannot read from stdin: {}", e);
                    return Command::Quit;
                }
            }

            match parse_command(&buffer) {
                Some(command) => return command,
                None => println!("Enter a move like \"D3\" or \"2 3\", \"reset\", or \"quit\"."),
            }
        }
    }

    fn show_engine_move(&mut self, game: &Game, report: &SearchReport) {
        if let Some(mv) = report.best_move {
            println!(
                "\nEngine played {} (depth {}, {} nodes examined, {:.2}s).",
                mv,
                report.depth_limit,
                report.nodes_examined,
                report.elapsed.as_secs_f32()
            );
        }
        self.draw(game);
    }

    fn show_pass(&mut self, _game: &Game, skipped: Player) {
        println!("{} has no legal move and passes.", skipped);
    }

    fn show_rejected(&mut self, game: &Game, error: &GameError) {
        println!("{}. Legal moves: {}", error, game.legal_moves());
    }

    fn announce_outcome(&mut self, outcome: &Outcome) {
        println!("\nGame over! {}\n", outcome);
        self.last_drawn = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(row: usize, col: usize) -> Option<Command> {
        Some(Command::Place(Location::from_coords(row, col).unwrap()))
    }

    #[test]
    fn parses_notation() {
        assert_eq!(parse_command("D3\n"), place(2, 3));
        assert_eq!(parse_command("  h8 "), place(7, 7));
    }

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_command("2 3\n"), place(2, 3));
        assert_eq!(parse_command("0 0"), place(0, 0));
        assert_eq!(parse_command("8 0"), None);
        assert_eq!(parse_command("1 2 3"), None);
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(parse_command("quit\n"), Some(Command::Quit));
        assert_eq!(parse_command("Reset"), Some(Command::Reset));
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("pass"), None);
    }
}
