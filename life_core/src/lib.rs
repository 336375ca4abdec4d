//! Sparse cellular automata on a bounded grid.
//!
//! Only live cells are stored, and each generation visits just the live cells
//! and their neighbours, so cost follows the population rather than the grid
//! area. Two rule sets share the machinery:
//!
//! - [`Classic`]: boolean Game of Life (B3/S23 unless configured otherwise)
//! - [`Smooth`]: cells carry an intensity in [0, 1]; survival and birth depend
//!   on the summed intensity of live neighbours
//!
//! ```
//! use life_core::{Cell, Classic, Grid, Simulation};
//!
//! let mut sim = Simulation::new(Grid::new(10, 10).unwrap(), Classic::life());
//! for col in 4..=6 {
//!     sim.toggle_cell(Cell::new(col, 5)).unwrap();
//! }
//! sim.step();
//! assert!(sim.is_alive(Cell::new(5, 4)));
//! assert_eq!(sim.generation(), 1);
//! ```

pub mod cells;
pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod history;
pub mod neighbors;
pub mod patterns;
pub mod rules;
pub mod simulation;
pub mod stepper;

pub use cells::{CellStore, IntensityMap, LiveSet};
pub use config::{Config, Variant};
pub use controller::{Cadence, Command, Controller, PauseReason};
pub use error::{LifeError, LifeResult};
pub use grid::{Cell, Grid};
pub use rules::{Classic, NewbornIntensity, Rule, Smooth};
pub use simulation::Simulation;
