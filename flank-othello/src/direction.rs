//! The eight compass directions a line of discs can run in.

use crate::bitboard::Bitboard;

// Masks clearing the bits that wrapped around into the wrong column after a shift.
const NOT_LEFT_COLUMN: u64 = 0x7f7f7f7f7f7f7f7f;
const NOT_RIGHT_COLUMN: u64 = 0xfefefefefefefefe;

/// A compass direction on the board. North is toward row 0, west toward column 0.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// Every direction, in the canonical scanning order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Move every location in `bitboard` one step in this direction.
    /// Locations stepping off the board are dropped.
    #[inline]
    pub fn step(self, bitboard: Bitboard) -> Bitboard {
        let bits = u64::from(bitboard);
        let stepped = match self {
            Direction::North => bits << 8,
            Direction::South => bits >> 8,
            Direction::West => (bits << 1) & NOT_RIGHT_COLUMN,
            Direction::East => (bits >> 1) & NOT_LEFT_COLUMN,
            Direction::NorthWest => (bits << 9) & NOT_RIGHT_COLUMN,
            Direction::NorthEast => (bits << 7) & NOT_LEFT_COLUMN,
            Direction::SouthWest => (bits >> 7) & NOT_RIGHT_COLUMN,
            Direction::SouthEast => (bits >> 9) & NOT_LEFT_COLUMN,
        };
        Bitboard::from(stepped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, EDGE_LENGTH};

    fn offset(direction: Direction) -> (i8, i8) {
        match direction {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }

    #[test]
    fn step_matches_offset() {
        for row in 0..EDGE_LENGTH {
            for col in 0..EDGE_LENGTH {
                let loc = Location::from_coords(row, col).unwrap();

                for &direction in Direction::ALL.iter() {
                    let (d_row, d_col) = offset(direction);
                    let target_row = row as i8 + d_row;
                    let target_col = col as i8 + d_col;

                    let expected = if (0..8).contains(&target_row) && (0..8).contains(&target_col)
                    {
                        Bitboard::from(
                            Location::from_coords(target_row as usize, target_col as usize)
                                .unwrap(),
                        )
                    } else {
                        Bitboard::EMPTY
                    };

                    assert_eq!(
                        direction.step(Bitboard::from(loc)),
                        expected,
                        "{:?} from {}",
                        direction,
                        loc
                    );
                }
            }
        }
    }
}
