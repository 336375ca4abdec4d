// stepper.rs - Advances one generation over live cells and their fringe

use std::collections::HashSet;

use crate::cells::CellStore;
use crate::grid::{Cell, Grid};
use crate::neighbors::aggregate;
use crate::rules::Rule;

/// Next generation of `current`.
///
/// Only live cells and the cells around them are visited, so the cost is
/// proportional to the population rather than the grid area.
pub fn step<R: Rule>(grid: &Grid, rule: &R, current: &R::Store) -> R::Store {
    let mut frontier: HashSet<Cell> = HashSet::with_capacity(current.len() * 8);
    let mut next = R::Store::default();

    // Survivors
    for (cell, value) in current.iter() {
        frontier.extend(grid.neighbors(cell));
        if let Some(value) = rule.survive(value, aggregate(grid, current, cell)) {
            next.set(cell, value);
        }
    }

    // Births
    for cell in frontier {
        if current.is_alive(cell) {
            continue;
        }
        if let Some(value) = rule.birth(aggregate(grid, current, cell)) {
            next.set(cell, value);
        }
    }

    next
}

/// Next generation computed by visiting every cell on the grid.
pub fn step_dense<R: Rule>(grid: &Grid, rule: &R, current: &R::Store) -> R::Store {
    let mut next = R::Store::default();
    for cell in grid.cells() {
        let sum = aggregate(grid, current, cell);
        let value = match current.get(cell) {
            Some(value) => rule.survive(value, sum),
            None => rule.birth(sum),
        };
        if let Some(value) = value {
            next.set(cell, value);
        }
    }
    next
}
