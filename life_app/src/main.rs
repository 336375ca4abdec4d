// main.rs - Interactive Game of Life / SmoothLife on a sparse grid

use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use life_core::config::print_banner;
use life_core::{Classic, Config, Controller, Rule, Simulation, Smooth, Variant};

mod input;
mod ui;

use ui::LifeApp;

// Room for the control bar above the grid
const PANEL_HEIGHT: f32 = 90.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    print_banner(&config);
    let grid = config.grid()?;
    info!("Grid {}x{} cells", grid.width(), grid.height());

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match config.variant {
        Variant::Classic => run(&config, Simulation::new(grid, Classic::life()), rng)?,
        Variant::Smooth => run(&config, Simulation::new(grid, Smooth::with_newborn(config.newborn)), rng)?,
    }
    Ok(())
}

fn run<R: Rule + 'static>(config: &Config, sim: Simulation<R>, rng: StdRng) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.screen_width as f32, config.screen_height as f32 + PANEL_HEIGHT]),
        ..Default::default()
    };

    let controller = Controller::new(sim, config.update_freq, rng);
    let app = LifeApp::new(controller, config);

    eframe::run_native(
        "Paused",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
}
