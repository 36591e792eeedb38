//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for validating move generation and for benchmarking it.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Player};

/// Count the move paths of length `depth` from the starting position.
/// A pass counts as a move; the game ending early ends a path.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::default(), depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    all_moves
        .map(|mv| leaves_below(board.apply_move_unchecked(player, mv), !player, depth - 1, false))
        .sum()
}

/// Call `visit` on every position reachable within `depth` moves of `board`,
/// with `player` to move, including `board` itself. Positions reached through
/// different move orders are visited once per path.
pub fn walk_positions<F: FnMut(Board, Player)>(
    board: Board,
    player: Player,
    depth: u64,
    visit: &mut F,
) {
    visit(board, player);
    if depth == 0 {
        return;
    }

    let all_moves = board.legal_moves(player);
    if all_moves.is_empty() {
        if !board.is_terminal() {
            walk_positions(board, !player, depth - 1, visit);
        }
        return;
    }

    for mv in all_moves {
        walk_positions(board.apply_move_unchecked(player, mv), !player, depth - 1, visit);
    }
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}

// Passing moves begin here.
#[test]
#[ignore]
fn perft_09() {
    assert_eq!(run_perft(9), 3005288);
}

#[test]
#[ignore]
fn perft_10() {
    assert_eq!(run_perft(10), 24571284);
}

#[test]
fn walk_counts_every_path() {
    let mut positions = 0;
    walk_positions(Board::new(), Player::default(), 3, &mut |_, _| positions += 1);
    assert_eq!(positions, 1 + 4 + 12 + 56);
}
