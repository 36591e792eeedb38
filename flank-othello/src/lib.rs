//! `flank-othello` implements the rules of Othello for engines and UIs.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with Othello boards.
//!    These are fast, but may result in inconsistent state if their contracts are not manually checked.
//!  - [`Board`] holds both colors' discs and exposes legal-move generation, move application
//!    and scoring for an explicitly given [`Player`]. Illegal moves are rejected before mutation.
//!  - [`Game`] adds the side to move on top of a [`Board`], including automatic passes,
//!    and is the interface a presentation layer should drive.

pub mod bitboard;
pub mod test_utils;

mod board;
mod direction;
mod game;
mod location;
mod utils;

pub use board::*;
pub use direction::Direction;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
