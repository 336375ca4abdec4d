//! Input-driven control of a simulation.
//!
//! Front ends translate their own key and pointer events into [`Command`]s and
//! call [`Controller::tick`] once per frame; the controller owns the play/pause
//! flag and the frame cadence that decides when a generation is stepped.

use rand::Rng;
use tracing::{info, warn};

use crate::error::{LifeError, LifeResult};
use crate::grid::Cell;
use crate::history::{History, fingerprint};
use crate::patterns::PATTERNS;
use crate::rules::Rule;
use crate::simulation::Simulation;

/// A user action, independent of any windowing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip one cell (click)
    Toggle(Cell),
    /// Make one cell alive without flipping it (drag)
    Paint(Cell),
    /// Kill everything, pause and reset counters
    Clear,
    /// Replace the population with this many random draws
    Randomize(usize),
    /// Randomize with a population proportional to the grid width
    Seed,
    /// Load a preset by index into [`PATTERNS`]
    LoadPattern(usize),
    TogglePlayback,
    /// Advance exactly one generation
    Step,
}

/// Frame counter deciding when a playing simulation advances.
#[derive(Debug, Clone)]
pub struct Cadence {
    playing: bool,
    count: u32,
    update_freq: u32,
}

impl Cadence {
    /// Cadence stepping once every `update_freq` frames, starting paused.
    pub fn new(update_freq: u32) -> Self {
        Self { playing: false, count: 0, update_freq: update_freq.max(1) }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn update_freq(&self) -> u32 {
        self.update_freq
    }

    pub fn set_update_freq(&mut self, update_freq: u32) {
        self.update_freq = update_freq.max(1);
    }

    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn reset(&mut self) {
        self.playing = false;
        self.count = 0;
    }

    /// Counts one frame; true when a generation is due. Paused frames never step.
    pub fn frame(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.count += 1;
        if self.count >= self.update_freq {
            self.count = 0;
            return true;
        }
        false
    }
}

/// Why playback stopped on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    /// Every cell died
    Extinct,
    /// The population matched one of the recent generations
    Cycle,
}

/// Simulation plus playback state.
pub struct Controller<R: Rule, G: Rng> {
    sim: Simulation<R>,
    cadence: Cadence,
    history: History,
    rng: G,
    paused_by: Option<PauseReason>,
    /// Pause when the population repeats or dies out
    pub auto_pause: bool,
}

impl<R: Rule, G: Rng> Controller<R, G> {
    pub fn new(sim: Simulation<R>, update_freq: u32, rng: G) -> Self {
        Self { sim, cadence: Cadence::new(update_freq), history: History::default(), rng, paused_by: None, auto_pause: true }
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    pub fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    pub fn cadence_mut(&mut self) -> &mut Cadence {
        &mut self.cadence
    }

    pub fn is_playing(&self) -> bool {
        self.cadence.is_playing()
    }

    /// Set when auto-pause stopped playback; cleared when playback resumes or the grid is cleared.
    pub fn paused_by(&self) -> Option<PauseReason> {
        self.paused_by
    }

    pub fn toggle_playback(&mut self) -> bool {
        self.paused_by = None;
        let playing = self.cadence.toggle();
        info!("{}", if playing { "Playing" } else { "Paused" });
        playing
    }

    /// Applies one command. Failures leave the simulation untouched.
    pub fn apply(&mut self, command: Command) -> LifeResult<()> {
        match command {
            Command::Toggle(cell) => {
                self.sim.toggle_cell(cell)?;
                self.history.reset();
            }
            Command::Paint(cell) => {
                if !self.sim.is_alive(cell) {
                    self.sim.toggle_cell(cell)?;
                    self.history.reset();
                }
            }
            Command::Clear => {
                self.sim.clear();
                self.cadence.reset();
                self.paused_by = None;
                self.history.reset();
            }
            Command::Randomize(count) => {
                self.sim.randomize(count, &mut self.rng);
                self.history.reset();
            }
            Command::Seed => {
                let count = self.rng.gen_range(4..10) * self.sim.grid().width() as usize;
                self.sim.randomize(count, &mut self.rng);
                self.history.reset();
            }
            Command::LoadPattern(index) => {
                let pattern = PATTERNS.get(index).ok_or(LifeError::UnknownPattern(index))?;
                self.sim.load_pattern(pattern);
                self.history.reset();
            }
            Command::TogglePlayback => {
                self.toggle_playback();
            }
            Command::Step => {
                self.advance();
            }
        }
        Ok(())
    }

    /// Applies a command coming straight from user input; errors are logged and dropped.
    pub fn handle(&mut self, command: Command) {
        if let Err(err) = self.apply(command) {
            warn!("Ignoring {:?}: {}", command, err);
        }
    }

    /// Counts one frame. Returns true if a generation was stepped.
    pub fn tick(&mut self) -> bool {
        if !self.cadence.frame() {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) {
        if self.history.is_empty() {
            self.history.record(fingerprint(self.sim.store()));
        }
        self.sim.step();
        let repeated = self.history.record(fingerprint(self.sim.store()));
        if !self.auto_pause || !self.cadence.is_playing() {
            return;
        }
        if self.sim.population() == 0 {
            info!(generation = self.sim.generation(), "Population died out, pausing");
            self.cadence.pause();
            self.paused_by = Some(PauseReason::Extinct);
        } else if repeated {
            info!(generation = self.sim.generation(), "Cycle detected, pausing");
            self.cadence.pause();
            self.paused_by = Some(PauseReason::Cycle);
        }
    }
}
