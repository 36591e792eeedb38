//! Drives one live game between a human connector and the automated player.

use crate::auto_player::AutoPlayer;
use crate::connectors::{Command, Connector};
use crate::eval::Evaluator;
use flank_othello::{Advance, Game, Location, Outcome, Player};
use log::{error, info, warn};

/// Why [`Session::run`] returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionEnd {
    /// The game was played out. The session has already reset for the next one.
    Finished(Outcome),
    /// The connector asked to stop, or the engine could not move.
    Quit,
}

/// Owns the live [`Game`]. The human side moves through the connector,
/// every other side through the [`AutoPlayer`], which only ever sees copies.
pub struct Session<C, E> {
    game: Game,
    connector: C,
    engine: AutoPlayer<E>,
    human: Option<Player>,
}

impl<C, E> Session<C, E>
where
    C: Connector,
    E: Evaluator + Send + Sync + 'static,
{
    /// With `human` set to None, the engine plays both sides.
    pub fn new(connector: C, engine: AutoPlayer<E>, human: Option<Player>) -> Self {
        Self {
            game: Game::new(),
            connector,
            engine,
            human,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn into_connector(self) -> C {
        self.connector
    }

    /// Play until the game ends or the connector quits.
    pub async fn run(&mut self) -> SessionEnd {
        loop {
            if let Some(outcome) = self.game.outcome() {
                info!("Game over after {} moves. {}", self.game.moves_played(), outcome);
                self.connector.announce_outcome(&outcome);
                self.game.reset();
                return SessionEnd::Finished(outcome);
            }

            let player = self.game.active_player();
            if Some(player) == self.human {
                match self.connector.next_command(&self.game).await {
                    Command::Place(loc) => self.human_move(loc),
                    Command::Reset => {
                        info!("Game reset by {}", player);
                        self.game.reset();
                    }
                    Command::Quit => return SessionEnd::Quit,
                }
            } else if !self.engine_move(player).await {
                return SessionEnd::Quit;
            }
        }
    }

    fn human_move(&mut self, loc: Location) {
        match self.game.play(loc) {
            Ok(advance) => self.after_move(advance),
            Err(e) => {
                warn!("Rejected move: {}", e);
                self.connector.show_rejected(&self.game, &e);
            }
        }
    }

    /// Returns false if the engine failed to produce a playable move.
    async fn engine_move(&mut self, player: Player) -> bool {
        let report = self.engine.choose(self.game.board(), player).await;

        let loc = match report.best_move {
            Some(loc) => loc,
            None => {
                error!("Engine found no move for {}\n{}", player, self.game.board());
                return false;
            }
        };

        info!(
            "{} plays {} (score: {:+}, depth: {}, nodes examined: {}, searched: {:.2}s)",
            player,
            loc,
            report.score,
            report.depth_limit,
            report.nodes_examined,
            report.elapsed.as_secs_f32()
        );

        match self.game.play(loc) {
            Ok(advance) => {
                self.connector.show_engine_move(&self.game, &report);
                self.after_move(advance);
                true
            }
            Err(e) => {
                error!("Engine chose an illegal move: {}", e);
                false
            }
        }
    }

    fn after_move(&mut self, advance: Advance) {
        if let Advance::Passed { skipped } = advance {
            info!("{} has no legal move and passes", skipped);
            self.connector.show_pass(&self.game, skipped);
        }
    }
}
