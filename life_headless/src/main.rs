// main.rs - Headless runner: drives the cadence from a timer and logs each generation

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use life_core::config::print_banner;
use life_core::{Classic, Command, Config, Controller, LifeResult, PauseReason, Rule, Simulation, Smooth, Variant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    print_banner(&config);
    let grid = config.grid()?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = match config.variant {
        Variant::Classic => run(&config, Controller::new(Simulation::new(grid, Classic::life()), config.update_freq, rng)).await?,
        Variant::Smooth => {
            let rule = Smooth::with_newborn(config.newborn);
            run(&config, Controller::new(Simulation::new(grid, rule), config.update_freq, rng)).await?
        }
    };

    info!(
        generations = summary.generations,
        population = summary.population,
        peak = summary.peak,
        stop = ?summary.stop,
        "Finished"
    );
    Ok(())
}

/// Why a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// Reached the configured generation count
    Limit,
    /// Auto-pause kicked in
    Paused(PauseReason),
    Interrupted,
}

/// Outcome of a headless run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Summary {
    generations: u64,
    population: usize,
    peak: usize,
    stop: Stop,
}

/// Seeds the grid, plays until the generation limit, a pause (cycle or
/// extinction) or Ctrl-C, one cadence frame per timer tick.
async fn run<R: Rule>(config: &Config, mut controller: Controller<R, StdRng>) -> LifeResult<Summary> {
    controller.apply(Command::Seed)?;
    controller.apply(Command::TogglePlayback)?;

    let mut peak = controller.simulation().population();
    let mut ticker = interval(Duration::from_secs_f64(1.0 / config.fps as f64));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut interrupted = false;

    while controller.is_playing() && controller.simulation().generation() < config.generations {
        tokio::select! {
            _ = ticker.tick() => {
                if controller.tick() {
                    let sim = controller.simulation();
                    peak = peak.max(sim.population());
                    info!(generation = sim.generation(), population = sim.population(), "Generation");
                }
            }
            result = &mut shutdown => {
                if let Err(err) = result {
                    warn!("Ctrl-C handler failed: {}", err);
                }
                info!("Interrupted");
                interrupted = true;
                break;
            }
        }
    }

    let stop = match controller.paused_by() {
        _ if interrupted => Stop::Interrupted,
        Some(reason) => Stop::Paused(reason),
        None => Stop::Limit,
    };
    let sim = controller.simulation();
    Ok(Summary { generations: sim.generation(), population: sim.population(), peak, stop })
}
