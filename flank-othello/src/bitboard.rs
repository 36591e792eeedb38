//! Low-level bitboard operations.
//!
//! For efficiency, [`Bitboard`] operations are unchecked and may produce an
//! inconsistent board if invalid data is passed.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board, and uses row-major order.

use crate::direction::Direction;
use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: (3, 4) and (4, 3).
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White: (3, 3) and (4, 4).
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

// A run of opponent discs between two cells is at most this long.
const MAX_RUN: usize = 6;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    /// A bitboard with no locations set.
    pub const EMPTY: Self = Self(0);

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if this bitboard shares any location with `other`.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        !(self & other).is_empty()
    }
}

/// Score a board as: # my pieces - # opponent pieces.
/// Meaningless if both players have a piece at the same location.
#[inline]
pub fn score_absolute_difference(active: Bitboard, opponent: Bitboard) -> i8 {
    (active.0.count_ones() as i8) - (opponent.0.count_ones() as i8)
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
///
/// A move is legal if, in at least one direction, it is followed by a run of
/// opponent pieces which is closed by one of the active player's pieces.
/// Each direction is scanned backwards here: starting from the active pieces,
/// smear across opponent runs, then land on an empty location.
#[inline]
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(active | opponent);
    let mut moves = Bitboard::EMPTY;

    for &direction in Direction::ALL.iter() {
        let mut run = direction.step(active) & opponent;
        for _ in 1..MAX_RUN {
            run |= direction.step(run) & opponent;
        }
        moves |= direction.step(run) & empties;
    }

    moves
}

/// Compute the mask of opponent pieces captured by playing `move_mask`.
/// Every direction is evaluated against the board before the move, so the
/// result does not depend on the order directions are visited in.
/// `move_mask` must be a one-hot bitboard.
#[inline]
pub fn flip_mask(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    let mut flips = Bitboard::EMPTY;

    for &direction in Direction::ALL.iter() {
        let mut run = Bitboard::EMPTY;
        let mut cursor = direction.step(move_mask);

        while cursor.intersects(opponent) {
            run |= cursor;
            cursor = direction.step(cursor);
        }

        // The walk stopped on our own piece: the run is sandwiched.
        // Otherwise it ran off the board or hit an empty location.
        if cursor.intersects(active) {
            flips |= run;
        }
    }

    flips
}

/// Compute an updated board after a given move is made, returning new bitboards
/// for the active player and the opponent. `move_mask` must be a one-hot bitboard
/// indicating the move location. Produces an inconsistent board if an invalid
/// Othello board or `move_mask` is provided.
#[inline]
pub fn apply_move(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
) -> (Bitboard, Bitboard) {
    let flips = flip_mask(active, opponent, move_mask);

    let new_active = active | flips | move_mask;
    let new_opponent = opponent ^ flips;

    (new_active, new_opponent)
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = self.bitboard.intersects(bitmask);
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}
