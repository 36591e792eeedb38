//! `flank-player` chooses Othello moves by alpha-beta search and drives games
//! between a human, through a [`Connector`](connectors::Connector), and the engine.

pub mod config;
pub mod connectors;
pub mod eval;
pub mod search;

mod auto_player;
mod session;

pub use auto_player::AutoPlayer;
pub use eval::{DiscDifference, Evaluator};
pub use search::{select_move, SearchLimits, SearchReport, Searcher};
pub use session::{Session, SessionEnd};
