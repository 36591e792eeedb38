//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board, stored as a one-hot [`Bitboard`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A set of locations on the Othello board, which can be iterated to retrieve them
/// in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a one-hot [`Bitboard`] without checking this invariant.
    /// Results in inconsistent state if `bitboard` does not have exactly one location set.
    #[inline]
    pub fn from_onehot_unchecked(bitboard: Bitboard) -> Self {
        Self(bitboard)
    }

    /// Convert from a row-major square index: 0 for the upper left, 63 for the lower right.
    /// Returns None if the index is off the board.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_SPACES {
            return None;
        }
        Some(Self(Bitboard::from(1u64 << (NUM_SPACES - 1 - index))))
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        let bitboard: u64 = self.0.into();
        bitboard.leading_zeros() as usize
    }

    /// Convert from row and column coordinates.
    /// Returns None if the coordinates are off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return None;
        }
        Self::from_index(row * EDGE_LENGTH + col)
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index();
        (index / EDGE_LENGTH, index % EDGE_LENGTH)
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation: column letter, then row digit ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next() != None {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl LocationList {
    /// The empty set of locations.
    pub const EMPTY: Self = Self(Bitboard::EMPTY);

    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0.intersects(loc.into())
    }

    /// Returns whether this list has no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl Iterator for LocationList {
    type Item = Location;

    /// Yields locations from the upper left, row by row.
    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_move = Bitboard::from(1u64 << (63 - bitboard.leading_zeros()));
        self.0 ^= next_move;

        Some(Location::from_onehot_unchecked(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LocationList {}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_index() {
        assert_eq!(
            Location::from_index(0),
            Some(Location(Bitboard::from(1u64 << 63)))
        );
        assert_eq!(Location::from_index(63), Some(Location(Bitboard::from(1u64))));
        assert_eq!(Location::from_index(64), None);
    }

    #[test]
    fn location_to_index() {
        assert_eq!(Location(Bitboard::from(1u64 << 63)).to_index(), 0);
        assert_eq!(Location(Bitboard::from(1u64)).to_index(), 63);
    }

    #[test]
    fn location_from_coords() {
        assert_eq!(
            Location::from_coords(0, 0),
            Some(Location(Bitboard::from(1u64 << 63)))
        );
        assert_eq!(Location::from_coords(7, 7), Some(Location(Bitboard::from(1u64))));
        assert_eq!(Location::from_coords(0, 8), None);
        assert_eq!(Location::from_coords(8, 0), None);
    }

    #[test]
    fn location_to_coords() {
        assert_eq!(Location(Bitboard::from(1u64 << 63)).to_coords(), (0, 0));
        assert_eq!(Location(Bitboard::from(1u64)).to_coords(), (7, 7));
        assert_eq!(Location::from_coords(2, 5).unwrap().to_coords(), (2, 5));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(
            Location::from_str("A1"),
            Ok(Location(Bitboard::from(1u64 << 63)))
        );
        assert_eq!(Location::from_str("h8"), Ok(Location(Bitboard::from(1u64))));
        assert_eq!(Location::from_str("D7"), Location::from_coords(6, 3).ok_or(ParseLocationError));
        assert_eq!(Location::from_str(" e3\n"), Location::from_coords(2, 4).ok_or(ParseLocationError));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(Bitboard::from(1u64)).to_string(), "H8");
        assert_eq!(Location(Bitboard::from(1u64 << 63)).to_string(), "A1");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn location_list_is_row_major() {
        let list = LocationList::from(Bitboard::from(
            (1u64 << 63) | (1 << 40) | (1 << 41) | 1,
        ));
        assert_eq!(list.len(), 4);

        let indices: Vec<usize> = list.map(Location::to_index).collect();
        assert_eq!(indices, vec![0, 22, 23, 63]);
        assert_eq!(list.to_string(), "[A1, G3, H3, H8]");
    }

    #[test]
    fn location_list_contains() {
        let a1 = Location::from_str("A1").unwrap();
        let list = LocationList::from(Bitboard::from(a1));
        assert!(list.contains(a1));
        assert!(!list.contains(Location::from_str("B1").unwrap()));
        assert!(LocationList::EMPTY.is_empty());
    }
}
