//! Implements game-level Othello logic: whose turn it is, and when the game ends.
//!
//! For correctness, this higher-level interface is preferred, but for
//! search you may work with [`Board`] values directly.

use crate::board::{Board, Outcome};
use crate::location::{Location, LocationList};
use crate::utils;
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Signed encoding of the player: +1 for Black, -1 for White.
    pub fn sign(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }
}

impl Default for Player {
    /// Gets the starting player (white).
    fn default() -> Self {
        Self::White
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Parse a player from its name or initial, ignoring case.
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Player::Black),
            "white" | "w" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// A move the rules do not allow.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum GameError {
    #[display(fmt = "{} is not a legal move for {}", location, player)]
    InvalidMove { location: Location, player: Player },
    #[display(fmt = "the game is already over")]
    GameOver,
}

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// No disc has been placed yet. White moves first.
    NotStarted,
    ToMove(Player),
    Finished(Outcome),
}

/// What happened after a move was played.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Advance {
    /// The turn passed normally to this player.
    NextTurn(Player),
    /// The opponent had no legal move, so the mover plays again.
    Passed { skipped: Player },
    /// Neither player can move.
    Finished(Outcome),
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Game {
    board: Board,
    active_player: Player,
    moves_played: u8,
}

impl Default for Game {
    /// Gets the starting board with the starting player to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a new game.
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::White,
            moves_played: 0,
        }
    }

    /// Continue a game from an arbitrary position.
    /// If `active_player` cannot move but the game is not over, they pass.
    pub fn from_board(board: Board, active_player: Player) -> Self {
        let mut game = Self {
            board,
            active_player,
            moves_played: 0,
        };
        if game.must_pass() {
            game.active_player = !active_player;
        }
        game
    }

    /// Discard everything and return to the starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    #[inline]
    pub fn moves_played(&self) -> u8 {
        self.moves_played
    }

    /// Get the legal moves for the player to move.
    #[inline]
    pub fn legal_moves(&self) -> LocationList {
        self.board.legal_moves(self.active_player)
    }

    /// Returns whether neither player can move.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.board.is_terminal()
    }

    /// Get the result, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_finished() {
            Some(self.board.outcome())
        } else {
            None
        }
    }

    pub fn phase(&self) -> Phase {
        if let Some(outcome) = self.outcome() {
            Phase::Finished(outcome)
        } else if self.moves_played == 0 {
            Phase::NotStarted
        } else {
            Phase::ToMove(self.active_player)
        }
    }

    /// Place a disc for the player to move and hand over the turn.
    /// Fails without changing anything if the move is not legal or the game is over.
    pub fn play(&mut self, loc: Location) -> Result<Advance, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }

        let mover = self.active_player;
        self.board = self.board.apply_move(mover, loc)?;
        self.moves_played = self.moves_played.saturating_add(1);
        self.active_player = !mover;

        if let Some(outcome) = self.outcome() {
            return Ok(Advance::Finished(outcome));
        }

        if self.must_pass() {
            self.active_player = mover;
            return Ok(Advance::Passed { skipped: !mover });
        }

        Ok(Advance::NextTurn(self.active_player))
    }

    /// The player to move has nothing to play, but the game goes on.
    fn must_pass(&self) -> bool {
        self.legal_moves().is_empty() && !self.is_finished()
    }
}

impl fmt::Display for Game {
    /// Render the board with the legal moves of the player to move marked `*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moves = self.legal_moves();
        let pieces = self
            .board
            .cells()
            .zip(0..)
            .map(|(cell, index)| match cell.player() {
                Some(Player::Black) => 'X',
                Some(Player::White) => 'O',
                None if Location::from_index(index).map_or(false, |loc| moves.contains(loc)) => {
                    '*'
                }
                None => '.',
            });
        utils::format_grid(pieces, f)?;

        match self.outcome() {
            Some(outcome) => write!(f, "\nGame over. {}", outcome),
            None => write!(
                f,
                "\nBlack: {}, White: {}. {} to move.",
                self.board.disc_count(Player::Black),
                self.board.disc_count(Player::White),
                self.active_player
            ),
        }
    }
}
