//! Settings for the `flank` binary, read from the environment.

use crate::search::SearchLimits;
use anyhow::{Context, Result};
use flank_othello::Player;
use std::time::Duration;

pub const DEPTH_VAR: &str = "FLANK_DEPTH";
pub const TIME_BUDGET_VAR: &str = "FLANK_TIME_BUDGET_SECS";
pub const HUMAN_VAR: &str = "FLANK_HUMAN";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlayConfig {
    pub limits: SearchLimits,
    /// The side the person at the terminal plays; None lets the engine play itself.
    pub human: Option<Player>,
}

impl Default for PlayConfig {
    /// The human plays White and moves first; the engine answers as Black.
    fn default() -> Self {
        Self {
            limits: SearchLimits::default(),
            human: Some(Player::White),
        }
    }
}

impl PlayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from a variable lookup, falling back to defaults for unset variables.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut config = Self::default();

        if let Some(depth) = lookup(DEPTH_VAR) {
            config.limits.depth_limit = depth
                .trim()
                .parse()
                .with_context(|| format!("{} must be a depth in plies, got {:?}", DEPTH_VAR, depth))?;
        }

        if let Some(seconds) = lookup(TIME_BUDGET_VAR) {
            let seconds: f64 = seconds.trim().parse().with_context(|| {
                format!("{} must be a number of seconds, got {:?}", TIME_BUDGET_VAR, seconds)
            })?;
            config.limits.time_budget = Duration::try_from_secs_f64(seconds).with_context(|| {
                format!(
                    "{} must be a non-negative number of seconds within range, got {}",
                    TIME_BUDGET_VAR, seconds
                )
            })?;
        }

        if let Some(human) = lookup(HUMAN_VAR) {
            config.human = match human.trim().to_ascii_lowercase().as_str() {
                "none" => None,
                other => Some(other.parse().with_context(|| {
                    format!("{} must be white, black, or none, got {:?}", HUMAN_VAR, human)
                })?),
            };
        }

        Ok(config)
    }
}
