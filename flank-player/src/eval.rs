//! Static evaluation of board positions.

use flank_othello::{Board, Player};

/// Scores a position from the point of view of one fixed player: higher is better for them.
///
/// The search calls this with the same `player` at every node, whoever is to move there.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Material heuristic: `player`'s discs minus the opponent's discs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DiscDifference;

impl Evaluator for DiscDifference {
    #[inline]
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        board.score_difference(player) as i32
    }
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Player) -> i32,
{
    #[inline]
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        self(board, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flank_othello::Location;

    #[test]
    fn disc_difference_is_antisymmetric() {
        let board = Board::new()
            .apply_move(Player::White, Location::from_coords(2, 4).unwrap())
            .unwrap();

        assert_eq!(DiscDifference.evaluate(&board, Player::White), 3);
        assert_eq!(DiscDifference.evaluate(&board, Player::Black), -3);
    }

    #[test]
    fn closures_are_evaluators() {
        let corners = |board: &Board, player: Player| {
            [(0, 0), (0, 7), (7, 0), (7, 7)]
                .iter()
                .filter_map(|&(row, col)| Location::from_coords(row, col))
                .filter(|&loc| board.cell(loc).player() == Some(player))
                .count() as i32
        };
        assert_eq!(corners.evaluate(&Board::new(), Player::Black), 0);
    }
}
