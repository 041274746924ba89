//! Terminal pellet chase (default binary).
//!
//! Reads `CHASE_SEED` / `CHASE_LOG_PATH`, takes over the terminal and runs the
//! fixed-rate frame loop until the player quits.

use std::process::ExitCode;

use anyhow::Result;

use pellet_chase::core::GameState;
use pellet_chase::driver::{run_loop, FixedRatePacer};
use pellet_chase::frontend::{TerminalFrontend, TerminalInput};
use pellet_chase::run_config::{init_logging, RunConfig};
use pellet_chase::types::TICK_RATE_HZ;

fn main() -> Result<ExitCode> {
    let config = RunConfig::from_env();
    init_logging(&config)?;

    let seed = config.seed_or_clock();
    log::info!("pellet-chase starting (seed {seed})");

    let mut state = GameState::new(seed);
    let mut frontend = TerminalFrontend::default();
    frontend.enter()?;

    let result = run_loop(
        &mut state,
        &mut TerminalInput::new(),
        &mut frontend,
        &mut FixedRatePacer::new(TICK_RATE_HZ),
    );

    // Always try to restore terminal state.
    let _ = frontend.exit();

    let summary = result?;
    log::info!(
        "exiting: {} frame(s), {} session(s), last outcome {}",
        summary.frames,
        summary.sessions,
        summary.last_outcome.map_or("none", |o| o.as_str())
    );
    Ok(ExitCode::SUCCESS)
}
