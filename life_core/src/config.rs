//! Runtime configuration
//!
//! Defaults match a 1280x720 window in 10px tiles; every field can be
//! overridden from the environment.

use std::env;
use std::str::FromStr;

use tracing::{Level, warn};

use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;
use crate::rules::NewbornIntensity;

/// Which rule set drives the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Boolean Game of Life
    Classic,
    /// Summed-intensity SmoothLife
    Smooth,
}

impl FromStr for Variant {
    type Err = LifeError;

    fn from_str(s: &str) -> LifeResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "life" => Ok(Self::Classic),
            "smooth" | "smoothlife" => Ok(Self::Smooth),
            other => Err(LifeError::config(format!("unknown variant '{other}'"))),
        }
    }
}

/// Simulation and window configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Window width in pixels
    pub screen_width: u32,
    /// Window height in pixels
    pub screen_height: u32,
    /// Edge of one grid tile in pixels
    pub tile_size: u32,
    /// Frames per second
    pub fps: u32,
    /// Frames between generations while playing
    pub update_freq: u32,
    pub variant: Variant,
    pub newborn: NewbornIntensity,
    /// Fixed RNG seed for reproducible randomisation
    pub seed: Option<u64>,
    /// Generations the headless runner advances before stopping
    pub generations: u64,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            tile_size: 10,
            fps: 60,
            update_freq: 10,
            variant: Variant::Classic,
            newborn: NewbornIntensity::default(),
            seed: None,
            generations: 500,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Create config from `LIFE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from any key lookup. Values that fail to parse are skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        override_with(&lookup, "LIFE_WIDTH", &mut config.screen_width);
        override_with(&lookup, "LIFE_HEIGHT", &mut config.screen_height);
        override_with(&lookup, "LIFE_TILE", &mut config.tile_size);
        override_with(&lookup, "LIFE_FPS", &mut config.fps);
        override_with(&lookup, "LIFE_UPDATE_FREQ", &mut config.update_freq);
        override_with(&lookup, "LIFE_VARIANT", &mut config.variant);
        override_with(&lookup, "LIFE_GENERATIONS", &mut config.generations);
        override_with(&lookup, "LIFE_LOG", &mut config.log_level);

        if let Some(seed) = lookup("LIFE_SEED") {
            match seed.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!("Ignoring LIFE_SEED={seed}: not an integer"),
            }
        }

        if let Some(newborn) = lookup("LIFE_NEWBORN") {
            match parse_newborn(&newborn) {
                Some(policy) => config.newborn = policy,
                None => warn!("Ignoring LIFE_NEWBORN={newborn}: expected 'inherit' or an intensity"),
            }
        }

        config
    }

    pub fn validate(&self) -> LifeResult<()> {
        if self.tile_size == 0 {
            return Err(LifeError::config("tile size must be positive"));
        }
        if self.screen_width < self.tile_size || self.screen_height < self.tile_size {
            return Err(LifeError::config("screen is smaller than one tile"));
        }
        if self.fps == 0 {
            return Err(LifeError::config("fps must be positive"));
        }
        if self.update_freq == 0 {
            return Err(LifeError::config("update frequency must be positive"));
        }
        Ok(())
    }

    pub fn grid(&self) -> LifeResult<Grid> {
        self.validate()?;
        Grid::from_screen(self.screen_width, self.screen_height, self.tile_size)
    }
}

fn override_with<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T) {
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *slot = value,
            Err(_) => warn!("Ignoring {key}={raw}: unparseable"),
        }
    }
}

fn parse_newborn(raw: &str) -> Option<NewbornIntensity> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "inherit" => Some(NewbornIntensity::Inherit),
        "fixed" => Some(NewbornIntensity::default()),
        other => other
            .parse::<f64>()
            .ok()
            .filter(|value| (0.0..=1.0).contains(value))
            .map(NewbornIntensity::Fixed),
    }
}

/// Print configuration banner
pub fn print_banner(config: &Config) {
    println!("Life");
    println!("  Variant:     {:?}", config.variant);
    println!("  Screen:      {}x{} px, {} px tiles", config.screen_width, config.screen_height, config.tile_size);
    println!("  Cadence:     {} fps, 1 generation every {} frames", config.fps, config.update_freq);
    if config.variant == Variant::Smooth {
        println!("  Newborns:    {:?}", config.newborn);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:        {seed}");
    }
    println!();
}
