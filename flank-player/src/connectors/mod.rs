//! Connectors present a game to "the outside world" and collect the human's moves.

mod connector;
mod console;

pub use connector::{Command, Connector};
pub use console::{parse_command, ConsoleConnector};
