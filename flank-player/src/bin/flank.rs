use anyhow::Result;
use async_std::task;
use env_logger::{Env, Target};
use flank_player::config::PlayConfig;
use flank_player::connectors::ConsoleConnector;
use flank_player::{AutoPlayer, Session, SessionEnd};
use log::info;

fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the board on stdout.
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    let config = PlayConfig::from_env()?;
    info!(
        "Engine searches {} plies within {:.1}s; human plays {}",
        config.limits.depth_limit,
        config.limits.time_budget.as_secs_f32(),
        config
            .human
            .map_or_else(|| "nobody".to_string(), |player| player.to_string())
    );

    let engine = AutoPlayer::with_limits(config.limits);
    let mut session = Session::new(ConsoleConnector::new(), engine, config.human);

    task::block_on(async {
        loop {
            match session.run().await {
                SessionEnd::Finished(outcome) if config.human.is_some() => {
                    info!("{} Starting a new game.", outcome);
                }
                SessionEnd::Finished(_) | SessionEnd::Quit => break,
            }
        }
    });

    Ok(())
}
