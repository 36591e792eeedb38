//! The Othello board: both colors' discs, and the rules for moving on it.
//!
//! A [`Board`] is a small `Copy` value. Applying a move returns a new board,
//! so a search can explore hypothetical positions without touching the live one.

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::game::{GameError, Player};
use crate::location::{Location, LocationList};
use crate::{utils, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of a single location on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The player owning this cell's disc, if there is one.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// Signed encoding of the cell: 0 for empty, otherwise the owner's sign.
    pub fn sign(self) -> i8 {
        self.player().map_or(0, Player::sign)
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// The final result of a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Outcome {
    pub black_discs: u8,
    pub white_discs: u8,
}

impl Outcome {
    /// The player with more discs, or None for a draw.
    pub fn winner(self) -> Option<Player> {
        if self.black_discs > self.white_discs {
            Some(Player::Black)
        } else if self.white_discs > self.black_discs {
            Some(Player::White)
        } else {
            None
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black: {}, White: {}. ", self.black_discs, self.white_discs)?;
        match self.winner() {
            Some(player) => write!(f, "Winner: {}.", player),
            None => f.write_str("Draw."),
        }
    }
}

/// A pair of bitboards storing every disc on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    pub black_bitboard: Bitboard,
    pub white_bitboard: Bitboard,
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting board: two discs of each color crossed in the center.
    pub const fn new() -> Self {
        Self {
            black_bitboard: BLACK_START,
            white_bitboard: WHITE_START,
        }
    }

    /// Restore the starting layout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get the bitboard holding one player's discs.
    #[inline]
    pub fn bitboard(self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black_bitboard,
            Player::White => self.white_bitboard,
        }
    }

    /// Get `(player's discs, opponent's discs)`.
    #[inline]
    fn active_and_opponent(self, player: Player) -> (Bitboard, Bitboard) {
        (self.bitboard(player), self.bitboard(!player))
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.black_bitboard | self.white_bitboard
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empty_mask(self) -> Bitboard {
        !self.occupied_mask()
    }

    /// Get the contents of one location.
    pub fn cell(self, loc: Location) -> Cell {
        let mask = Bitboard::from(loc);
        if self.black_bitboard.intersects(mask) {
            Cell::Black
        } else if self.white_bitboard.intersects(mask) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Get every legal move for `player`. Each location appears once,
    /// however many directions it captures in.
    #[inline]
    pub fn legal_moves(self, player: Player) -> LocationList {
        let (active, opponent) = self.active_and_opponent(player);
        bitboard::get_move_mask(active, opponent).into()
    }

    /// Returns whether `player` may place a disc at `loc`.
    #[inline]
    pub fn is_legal(self, player: Player, loc: Location) -> bool {
        self.legal_moves(player).contains(loc)
    }

    /// Get the board after `player` places a disc at `loc`.
    /// Fails without changing anything if the move is not legal.
    pub fn apply_move(self, player: Player, loc: Location) -> Result<Self, GameError> {
        if !self.is_legal(player, loc) {
            return Err(GameError::InvalidMove {
                location: loc,
                player,
            });
        }

        Ok(self.apply_move_unchecked(player, loc))
    }

    /// Get the board after `player` places a disc at `loc`, without checking legality.
    /// Produces an inconsistent board if `loc` is occupied.
    #[inline]
    pub fn apply_move_unchecked(self, player: Player, loc: Location) -> Self {
        let (active, opponent) = self.active_and_opponent(player);
        let (active, opponent) = bitboard::apply_move(active, opponent, loc.into());

        match player {
            Player::Black => Self {
                black_bitboard: active,
                white_bitboard: opponent,
            },
            Player::White => Self {
                black_bitboard: opponent,
                white_bitboard: active,
            },
        }
    }

    /// Returns true if neither player has a legal move, regardless of whose turn it is.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self.legal_moves(Player::Black).is_empty() && self.legal_moves(Player::White).is_empty()
    }

    /// Count the discs belonging to `player`.
    #[inline]
    pub fn disc_count(self, player: Player) -> u8 {
        self.bitboard(player).count_occupied()
    }

    /// Count the empty spaces.
    #[inline]
    pub fn empty_count(self) -> u8 {
        self.occupied_mask().count_empty()
    }

    /// Score a board as: # `player`'s discs - # opponent's discs.
    #[inline]
    pub fn score_difference(self, player: Player) -> i8 {
        let (active, opponent) = self.active_and_opponent(player);
        bitboard::score_absolute_difference(active, opponent)
    }

    /// Get the disc counts, which decide the game once the board is terminal.
    pub fn outcome(self) -> Outcome {
        Outcome {
            black_discs: self.disc_count(Player::Black),
            white_discs: self.disc_count(Player::White),
        }
    }

    /// The player with more discs, or None if the counts are tied.
    pub fn winner(self) -> Option<Player> {
        self.outcome().winner()
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        self.black_bitboard
            .into_iter()
            .zip(self.white_bitboard.into_iter())
            .map(|pair| match pair {
                (true, _) => Cell::Black,
                (false, true) => Cell::White,
                (false, false) => Cell::Empty,
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(Cell::to_char), f)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    #[display(fmt = "unrecognized cell character {:?}", _0)]
    BadCharacter(#[error(not(source))] char),
}

/// Parse a board from 64 cell characters in row-major order, ignoring whitespace.
/// Black discs are `X` or `B`, white discs `O` or `W`, and empty cells `-` or `.`.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'X' | 'B' => Ok(Cell::Black),
                'O' | 'W' => Ok(Cell::White),
                '-' | '.' => Ok(Cell::Empty),
                other => Err(ParseBoardError::BadCharacter(other)),
            })
            .collect::<Result<Vec<Cell>, _>>()?;

        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength(cells.len()));
        }

        let mut board = Self {
            black_bitboard: Bitboard::EMPTY,
            white_bitboard: Bitboard::EMPTY,
        };

        for (index, cell) in cells.into_iter().enumerate() {
            let mask = Bitboard::from(1u64 << (NUM_SPACES - 1 - index));
            match cell {
                Cell::Black => board.black_bitboard |= mask,
                Cell::White => board.white_bitboard |= mask,
                Cell::Empty => {}
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::walk_positions;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    #[test]
    fn initial_layout() {
        let board = Board::new();

        assert_eq!(board.disc_count(Player::Black), 2);
        assert_eq!(board.disc_count(Player::White), 2);
        assert_eq!(board.empty_count(), 60);

        assert_eq!(board.cell(loc(3, 3)), Cell::White);
        assert_eq!(board.cell(loc(4, 4)), Cell::White);
        assert_eq!(board.cell(loc(3, 4)), Cell::Black);
        assert_eq!(board.cell(loc(4, 3)), Cell::Black);
        assert_eq!(board.cell(loc(0, 0)), Cell::Empty);
    }

    #[test]
    fn white_opening_moves() {
        let moves = Board::new().legal_moves(Player::White);

        assert_eq!(moves.len(), 4);
        for &(row, col) in [(2, 4), (3, 5), (4, 2), (5, 3)].iter() {
            assert!(moves.contains(loc(row, col)), "missing ({}, {})", row, col);
        }
    }

    #[test]
    fn black_opening_moves() {
        let moves: Vec<(usize, usize)> = Board::new()
            .legal_moves(Player::Black)
            .map(Location::to_coords)
            .collect();

        assert_eq!(moves, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
    }

    #[test]
    fn opening_move_flips_one_disc() {
        let board = Board::new().apply_move(Player::White, loc(2, 4)).unwrap();

        assert_eq!(board.cell(loc(2, 4)), Cell::White);
        assert_eq!(board.cell(loc(3, 4)), Cell::White);
        assert_eq!(board.cell(loc(4, 3)), Cell::Black);
        assert_eq!(board.disc_count(Player::White), 4);
        assert_eq!(board.disc_count(Player::Black), 1);

        // The copy taken before the move is untouched.
        let mut snapshot = board;
        snapshot.reset();
        assert_eq!(snapshot, Board::new());
        assert_eq!(board.cell(loc(2, 4)), Cell::White);
    }

    #[test]
    fn illegal_move_is_rejected() {
        let board = Board::new();

        // (2,3) only captures for Black at the start.
        assert_eq!(
            board.apply_move(Player::White, loc(2, 3)),
            Err(GameError::InvalidMove {
                location: loc(2, 3),
                player: Player::White
            })
        );

        // Occupied cells are never legal.
        assert!(board.apply_move(Player::White, loc(3, 4)).is_err());
        assert!(!board.is_legal(Player::Black, loc(3, 3)));
    }

    #[test]
    fn duplicate_directions_give_one_move() {
        // (0,0) captures both east and south for Black.
        let board: Board = "
            - O X - - - - -
            O - - - - - - -
            X - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -"
            .parse()
            .unwrap();

        let moves: Vec<Location> = board.legal_moves(Player::Black).collect();
        assert_eq!(moves, vec![loc(0, 0)]);

        let after = board.apply_move(Player::Black, loc(0, 0)).unwrap();
        assert_eq!(after.disc_count(Player::Black), 5);
        assert_eq!(after.disc_count(Player::White), 0);
    }

    #[test]
    fn captures_use_the_board_before_the_move() {
        // Playing (3,3) for Black: the west run (3,1),(3,2) is closed by (3,0),
        // while the east run (3,4) is open. Flipping west must not close east.
        let board: Board = "
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            X O O - O - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -"
            .parse()
            .unwrap();

        let after = board.apply_move(Player::Black, loc(3, 3)).unwrap();
        assert_eq!(after.cell(loc(3, 1)), Cell::Black);
        assert_eq!(after.cell(loc(3, 2)), Cell::Black);
        assert_eq!(after.cell(loc(3, 4)), Cell::White);
    }

    #[test]
    fn terminal_detection() {
        assert!(!Board::new().is_terminal());

        let full: Board = "XXXXXXXXOOOOOOOOXXXXXXXXOOOOOOOOXXXXXXXXOOOOOOOOXXXXXXXXOOOOOOOO"
            .parse()
            .unwrap();
        assert!(full.is_terminal());
        assert_eq!(full.winner(), None);

        // Only White can move, at (0,2); the game is not over.
        let one_sided: Board = "
            O X - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -"
            .parse()
            .unwrap();
        assert!(one_sided.legal_moves(Player::Black).is_empty());
        assert!(!one_sided.legal_moves(Player::White).is_empty());
        assert!(!one_sided.is_terminal());

        // A board with only one color on it is over.
        let wiped: Board = format!("X{}", "-".repeat(63)).parse().unwrap();
        assert!(wiped.is_terminal());
        assert_eq!(wiped.winner(), Some(Player::Black));
    }

    #[test]
    fn reachable_boards_keep_invariants() {
        walk_positions(Board::new(), Player::White, 4, &mut |board, player| {
            let total = board.disc_count(Player::Black) as usize
                + board.disc_count(Player::White) as usize
                + board.empty_count() as usize;
            assert_eq!(total, NUM_SPACES);
            assert!(!board.black_bitboard.intersects(board.white_bitboard));

            for mv in board.legal_moves(player) {
                let after = board.apply_move_unchecked(player, mv);
                assert_eq!(after.empty_count() + 1, board.empty_count());
                assert!(after.disc_count(player) > board.disc_count(player));
                assert!(after.disc_count(!player) < board.disc_count(!player));
                assert_eq!(
                    after.disc_count(player) - board.disc_count(player),
                    board.disc_count(!player) - after.disc_count(!player) + 1
                );
            }
        });
    }

    #[test]
    fn score_and_cells() {
        let board = Board::new().apply_move(Player::White, loc(2, 4)).unwrap();
        assert_eq!(board.score_difference(Player::White), 3);
        assert_eq!(board.score_difference(Player::Black), -3);

        let signs: i32 = board.cells().map(|cell| cell.sign() as i32).sum();
        assert_eq!(signs, -3);
        assert_eq!(Cell::from(Player::Black).sign(), 1);
    }

    #[test]
    fn board_parse_round_trip() {
        let board = Board::new().apply_move(Player::White, loc(2, 4)).unwrap();
        let rendered: String = board
            .cells()
            .map(|cell| match cell {
                Cell::Empty => '-',
                Cell::Black => 'X',
                Cell::White => 'O',
            })
            .collect();
        assert_eq!(rendered.parse::<Board>(), Ok(board));
    }

    #[test]
    fn board_parse_errors() {
        assert_eq!("XO".parse::<Board>(), Err(ParseBoardError::WrongLength(2)));
        assert_eq!(
            format!("Z{}", "-".repeat(63)).parse::<Board>(),
            Err(ParseBoardError::BadCharacter('Z'))
        );
    }

    #[test]
    fn display_grid() {
        let text = Board::new().to_string();
        assert!(text.starts_with("   A B C D E F G H"));
        assert!(text.contains(" 4 . . . O X . . . "));
        assert!(text.contains(" 5 . . . X O . . . "));
    }
}
