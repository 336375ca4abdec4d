// neighbors.rs - Sums live neighbours of a cell

use crate::cells::{CellStore, IntensityMap, LiveSet};
use crate::grid::{Cell, Grid};

/// Aggregates the weights of every live in-bounds neighbour of `cell`.
pub fn aggregate<S: CellStore>(grid: &Grid, store: &S, cell: Cell) -> S::Aggregate {
    grid.neighbors(cell)
        .filter_map(|neighbor| store.get(neighbor))
        .fold(S::Aggregate::default(), |acc, value| acc + S::weight(value))
}

/// Number of live neighbours, 0..=8.
pub fn live_count(grid: &Grid, cells: &LiveSet, cell: Cell) -> u8 {
    aggregate(grid, cells, cell)
}

/// Summed intensity of live neighbours, 0.0..=8.0. Neighbours match by coordinate.
pub fn intensity_sum(grid: &Grid, cells: &IntensityMap, cell: Cell) -> f64 {
    aggregate(grid, cells, cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 10).unwrap()
    }

    #[test]
    fn test_count_ignores_self() {
        let cells: LiveSet = [Cell::new(5, 5)].into_iter().collect();
        assert_eq!(live_count(&grid(), &cells, Cell::new(5, 5)), 0);
        assert_eq!(live_count(&grid(), &cells, Cell::new(4, 4)), 1);
    }

    #[test]
    fn test_count_is_at_most_eight() {
        let grid = grid();
        let cells: LiveSet = grid.cells().collect();
        assert_eq!(live_count(&grid, &cells, Cell::new(5, 5)), 8);
        assert_eq!(live_count(&grid, &cells, Cell::new(0, 0)), 3);
        for cell in grid.cells() {
            assert!(live_count(&grid, &cells, cell) <= 8);
        }
    }

    #[test]
    fn test_count_skips_distant_cells() {
        let cells: LiveSet = [Cell::new(0, 0), Cell::new(3, 3), Cell::new(2, 1)].into_iter().collect();
        assert_eq!(live_count(&grid(), &cells, Cell::new(1, 1)), 2);
    }

    #[test]
    fn test_intensity_sum() {
        let cells: IntensityMap = [
            (Cell::new(4, 4), 0.1),
            (Cell::new(6, 6), 0.2),
            (Cell::new(5, 5), 0.9),
            (Cell::new(8, 8), 1.0),
        ]
        .into_iter()
        .collect();
        let sum = intensity_sum(&grid(), &cells, Cell::new(5, 5));
        assert!((sum - 0.3).abs() < 1e-12);
        assert_eq!(intensity_sum(&grid(), &cells, Cell::new(0, 9)), 0.0);
    }
}
