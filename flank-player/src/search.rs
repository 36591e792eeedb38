//! Depth- and time-bounded alpha-beta search.
//!
//! The search is single-perspective: every position is scored for the player
//! who asked for a move, whichever side is to move there. That player's plies
//! maximize this score and the opponent's plies minimize it.

use crate::eval::{DiscDifference, Evaluator};
use arrayvec::ArrayVec;
use flank_othello::{Board, Location, Player, NUM_SPACES};
use itertools::Itertools;
use log::{debug, warn};
use std::time::{Duration, Instant};

/// Maximum number of plies searched by default.
pub const DEFAULT_DEPTH_LIMIT: u8 = 4;

/// Wall-clock ceiling for a single search by default.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(5);

const INFINITY: i32 = i32::MAX;
const NEG_INFINITY: i32 = -INFINITY;

/// Bounds on how much work one search may do.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SearchLimits {
    /// Maximum ply depth explored. Zero is treated as one.
    pub depth_limit: u8,
    /// Checked on entry to every node below the root.
    pub time_budget: Duration,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

/// The result of a search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchReport {
    /// None only if the searching player had no legal move.
    pub best_move: Option<Location>,
    pub score: i32,
    /// Internal nodes expanded, including the root.
    pub nodes_examined: u64,
    pub depth_limit: u8,
    pub elapsed: Duration,
    /// Whether any node was cut off by the time budget.
    pub timed_out: bool,
}

/// Pick a move for `player` using the disc-difference heuristic.
pub fn select_move(
    board: Board,
    player: Player,
    depth_limit: u8,
    time_budget: Duration,
) -> SearchReport {
    let limits = SearchLimits {
        depth_limit,
        time_budget,
    };
    Searcher::new(limits, DiscDifference).select_move(board, player)
}

/// A reusable search configuration: limits plus an evaluation function.
#[derive(Clone, Debug)]
pub struct Searcher<E> {
    limits: SearchLimits,
    evaluator: E,
}

impl<E: Evaluator> Searcher<E> {
    pub fn new(limits: SearchLimits, evaluator: E) -> Self {
        Self { limits, evaluator }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Search for the best move for `player`. Never touches `board` itself:
    /// every hypothetical position is a fresh copy.
    pub fn select_move(&self, board: Board, player: Player) -> SearchReport {
        let depth_limit = self.limits.depth_limit.max(1);
        let mut search = Search {
            evaluator: &self.evaluator,
            player,
            started: Instant::now(),
            time_budget: self.limits.time_budget,
            nodes_examined: 0,
            timed_out: false,
        };

        let (score, best_move) = search.root(board, depth_limit);
        let elapsed = search.started.elapsed();

        if search.timed_out {
            warn!(
                "Search for {} hit the {:.2}s time budget; result may be shallow",
                player,
                self.limits.time_budget.as_secs_f32()
            );
        }

        SearchReport {
            best_move,
            score,
            nodes_examined: search.nodes_examined,
            depth_limit,
            elapsed,
            timed_out: search.timed_out,
        }
    }
}

/// State for a single call to [`Searcher::select_move`].
struct Search<'a, E> {
    evaluator: &'a E,
    player: Player,
    started: Instant,
    time_budget: Duration,
    nodes_examined: u64,
    timed_out: bool,
}

impl<'a, E: Evaluator> Search<'a, E> {
    /// Search the root. Unlike inner nodes, the root is always expanded,
    /// so every legal move gets at least a static score even with no time left.
    fn root(&mut self, board: Board, depth: u8) -> (i32, Option<Location>) {
        let moves = board.legal_moves(self.player);
        if moves.is_empty() {
            return (self.evaluate(board), None);
        }

        self.nodes_examined += 1;

        let mut alpha = NEG_INFINITY;
        let mut best_score = NEG_INFINITY;
        let mut best_move = None;
        // One line per legal move; a root never has more moves than empty cells.
        let mut lines: ArrayVec<[(Location, i32); NUM_SPACES]> = ArrayVec::new();

        for mv in moves {
            let next = board.apply_move_unchecked(self.player, mv);
            let score = self.minimax(next, depth - 1, alpha, INFINITY, false);
            lines.push((mv, score));

            // Ties keep the earlier move. The first move is taken whatever it
            // scores, so evaluators may use the full i32 range.
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        debug!(
            "Root lines for {}:\n{}",
            self.player,
            lines
                .iter()
                .map(|(mv, score)| format!("{:>4}  :  {:+}", mv.to_string(), score))
                .join("\n")
        );

        (best_score, best_move)
    }

    fn minimax(
        &mut self,
        board: Board,
        depth: u8,
        mut alpha: i32, // lowest score the searching player is already assured of
        mut beta: i32,  // highest score the opponent will allow
        maximizing: bool,
    ) -> i32 {
        if depth == 0 || board.is_terminal() || self.out_of_time() {
            return self.evaluate(board);
        }

        self.nodes_examined += 1;

        let side = if maximizing { self.player } else { !self.player };
        let moves = board.legal_moves(side);

        // Forced pass: the other side moves on the same board.
        if moves.is_empty() {
            return self.minimax(board, depth - 1, alpha, beta, !maximizing);
        }

        if maximizing {
            let mut best = NEG_INFINITY;
            for mv in moves {
                let score =
                    self.minimax(board.apply_move_unchecked(side, mv), depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in moves {
                let score =
                    self.minimax(board.apply_move_unchecked(side, mv), depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    #[inline]
    fn evaluate(&self, board: Board) -> i32 {
        self.evaluator.evaluate(&board, self.player)
    }

    fn out_of_time(&mut self) -> bool {
        if self.started.elapsed() > self.time_budget {
            self.timed_out = true;
        }
        self.timed_out
    }
}
