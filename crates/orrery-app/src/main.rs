//! The `orrery` binary: runs the simulation headless, logging through `tracing`.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use orrery_app::{AppError, Session, Startup, TickLoop, TracingRenderer};
use orrery_config::CliArgs;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("orrery: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let startup = Startup::prepare(args)?;
    orrery_log::init_logging(
        Some(&startup.dirs.log_dir),
        cfg!(debug_assertions),
        Some(&startup.config),
    );
    startup.log_summary();
    let config = &startup.config;
    info!(
        sim_speed = config.simulation.sim_speed,
        tick_interval_ms = config.simulation.tick_interval_ms,
        "Starting orrery"
    );

    let mut session = Session::from_config(config)?;
    let mut renderer = TracingRenderer::new(config.debug.log_positions);
    session.build_scene(&mut renderer);

    let mut tick_loop = TickLoop::new(Duration::from_millis(config.simulation.tick_interval_ms));
    let limit = args.ticks;
    let mut failed_ticks = 0u64;

    loop {
        tick_loop.frame(|_| {
            if limit.is_none_or(|limit| session.context().tick_count() < limit)
                && !session.step(&mut renderer).is_clean()
            {
                failed_ticks += 1;
            }
        });

        if let Some(limit) = limit
            && session.context().tick_count() >= limit
        {
            break;
        }
        std::thread::sleep(tick_loop.until_next_tick());
    }

    info!(
        ticks = session.context().tick_count(),
        failed_ticks,
        placements = renderer.placements(),
        dropped_ms = tick_loop.dropped_time() * 1000.0,
        "Simulation finished"
    );
    Ok(())
}
