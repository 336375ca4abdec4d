//! Simulation state: the grid, the rule, the live cells and the generation counter.

use rand::Rng;
use tracing::{debug, info};

use crate::cells::CellStore;
use crate::error::LifeResult;
use crate::grid::{Cell, Grid};
use crate::patterns::Pattern;
use crate::rules::Rule;
use crate::stepper;

/// Per-cell value of the store behind rule `R`.
pub type Value<R> = <<R as Rule>::Store as CellStore>::Value;

/// One running automaton. All mutation goes through `&mut self`.
#[derive(Debug, Clone)]
pub struct Simulation<R: Rule> {
    grid: Grid,
    rule: R,
    cells: R::Store,
    generation: u64,
}

impl<R: Rule> Simulation<R> {
    /// Empty simulation on `grid`.
    pub fn new(grid: Grid, rule: R) -> Self {
        Self { grid, rule, cells: R::Store::default(), generation: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Read-only view of the live cells.
    pub fn store(&self) -> &R::Store {
        &self.cells
    }

    /// Every live cell with its value, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Value<R>)> + '_ {
        self.cells.iter()
    }

    pub fn get(&self, cell: Cell) -> Option<Value<R>> {
        self.cells.get(cell)
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.cells.is_alive(cell)
    }

    /// Flips `cell`: removes it if alive, otherwise adds it with the placement value.
    /// Returns whether the cell is alive afterwards.
    pub fn toggle_cell(&mut self, cell: Cell) -> LifeResult<bool> {
        let cell = self.grid.check(cell)?;
        if self.cells.remove(cell).is_some() {
            return Ok(false);
        }
        self.cells.set(cell, <R::Store as CellStore>::placed());
        Ok(true)
    }

    /// Sets `cell` alive with `value`, replacing any previous value.
    pub fn insert(&mut self, cell: Cell, value: Value<R>) -> LifeResult<()> {
        let cell = self.grid.check(cell)?;
        let value = <R::Store as CellStore>::validate(value)?;
        self.cells.set(cell, value);
        Ok(())
    }

    /// Kills `cell`. Returns whether it was alive.
    pub fn remove(&mut self, cell: Cell) -> LifeResult<bool> {
        let cell = self.grid.check(cell)?;
        Ok(self.cells.remove(cell).is_some())
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
        info!("Cleared grid");
    }

    /// Replaces the live cells with `count` uniformly random draws. Repeated
    /// coordinates collapse, so the population can come out below `count`.
    /// The generation counter keeps running; only `clear` and pattern loads reset it.
    pub fn randomize<G: Rng>(&mut self, count: usize, rng: &mut G) {
        self.cells.clear();
        for _ in 0..count {
            let cell = Cell::new(rng.gen_range(0..self.grid.width()), rng.gen_range(0..self.grid.height()));
            let value = <R::Store as CellStore>::random_value(rng);
            self.cells.set(cell, value);
        }
        info!("Randomized {} draws into {} live cells", count, self.cells.len());
    }

    /// Clears the grid and places `pattern` in the middle.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        self.cells.clear();
        for cell in pattern.placed(&self.grid) {
            self.cells.set(cell, <R::Store as CellStore>::placed());
        }
        self.generation = 0;
        info!("Loaded pattern '{}' ({} cells)", pattern.name, self.cells.len());
    }

    /// Advances one generation and returns the new generation number.
    pub fn step(&mut self) -> u64 {
        self.cells = stepper::step(&self.grid, &self.rule, &self.cells);
        self.generation += 1;
        debug!(generation = self.generation, population = self.cells.len(), rule = self.rule.name(), "Stepped");
        self.generation
    }
}
