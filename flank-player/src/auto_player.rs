//! An automated player which searches off the caller's thread.

use crate::eval::{DiscDifference, Evaluator};
use crate::search::{SearchLimits, SearchReport, Searcher};
use async_std::task;
use flank_othello::{Board, Player};
use log::debug;
use std::sync::Arc;

/// Chooses moves by alpha-beta search.
///
/// The search is CPU-bound, so [`AutoPlayer::choose`] runs it on a blocking
/// worker and hands back a future. The only way to bound it is the time budget.
pub struct AutoPlayer<E> {
    searcher: Arc<Searcher<E>>,
}

impl<E> Clone for AutoPlayer<E> {
    fn clone(&self) -> Self {
        Self {
            searcher: Arc::clone(&self.searcher),
        }
    }
}

impl AutoPlayer<DiscDifference> {
    /// A player using the disc-difference heuristic.
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self::new(limits, DiscDifference)
    }
}

impl Default for AutoPlayer<DiscDifference> {
    fn default() -> Self {
        Self::with_limits(SearchLimits::default())
    }
}

impl<E> AutoPlayer<E>
where
    E: Evaluator + Send + Sync + 'static,
{
    pub fn new(limits: SearchLimits, evaluator: E) -> Self {
        Self {
            searcher: Arc::new(Searcher::new(limits, evaluator)),
        }
    }

    pub fn limits(&self) -> SearchLimits {
        self.searcher.limits()
    }

    /// Search for `player`'s move on a copy of `board`.
    pub async fn choose(&self, board: Board, player: Player) -> SearchReport {
        let searcher = Arc::clone(&self.searcher);
        debug!("Searching for {} with {:?}", player, searcher.limits());

        task::spawn_blocking(move || searcher.select_move(board, player)).await
    }
}
