use crate::search::SearchReport;
use async_trait::async_trait;
use flank_othello::{Game, GameError, Location, Outcome, Player};

/// A request from the human side of a game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Place(Location),
    Reset,
    Quit,
}

/// A player-facing abstract interface to whatever presents the game to a human.
///
/// Implementations only render and collect input; all rule checking happens in [`Game`].
#[async_trait]
pub trait Connector: Send {
    /// Wait for the human to act. `game` is the position they are acting on.
    async fn next_command(&mut self, game: &Game) -> Command;

    /// The automated player moved; `game` already includes the move.
    fn show_engine_move(&mut self, game: &Game, report: &SearchReport);

    /// `skipped` had no legal move and lost their turn.
    fn show_pass(&mut self, game: &Game, skipped: Player);

    /// The human's last command was not a legal move.
    fn show_rejected(&mut self, game: &Game, error: &GameError);

    /// Neither player can move any more.
    fn announce_outcome(&mut self, outcome: &Outcome);
}
