// grid.rs - Bounded coordinate space and Moore adjacency

use crate::error::{LifeError, LifeResult};

/// Relative offsets of the 8 Moore neighbours (centre excluded)
#[rustfmt::skip]
pub const MOORE: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A grid coordinate, column first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl From<(u32, u32)> for Cell {
    fn from((col, row): (u32, u32)) -> Self {
        Self::new(col, row)
    }
}

/// Finite grid. Valid cells are `0..width` x `0..height`; there is no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> LifeResult<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }

    /// Grid covering a screen of `screen_width` x `screen_height` pixels in square tiles.
    pub fn from_screen(screen_width: u32, screen_height: u32, tile_size: u32) -> LifeResult<Self> {
        if tile_size == 0 {
            return Err(LifeError::config("tile size must be positive"));
        }
        Self::new(screen_width / tile_size, screen_height / tile_size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.width && cell.row < self.height
    }

    /// Returns `cell` unchanged if it lies on the grid.
    pub fn check(&self, cell: Cell) -> LifeResult<Cell> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(LifeError::OutOfBounds { cell, width: self.width, height: self.height })
        }
    }

    /// Maps a pixel position to the tile under it, if any.
    pub fn cell_at(&self, x: f32, y: f32, tile_size: f32) -> Option<Cell> {
        if x < 0.0 || y < 0.0 || tile_size <= 0.0 {
            return None;
        }
        let cell = Cell::new((x / tile_size) as u32, (y / tile_size) as u32);
        self.contains(cell).then_some(cell)
    }

    /// In-bounds Moore neighbours of `cell`. Candidates past an edge are dropped.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let (col, row) = (cell.col as i64, cell.row as i64);
        MOORE.iter().filter_map(move |&(dx, dy)| {
            let (x, y) = (col + dx, row + dy);
            if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
                return None;
            }
            Some(Cell::new(x as u32, y as u32))
        })
    }

    /// Every cell on the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_grid() {
        assert_eq!(Grid::new(0, 5), Err(LifeError::InvalidGrid { width: 0, height: 5 }));
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_from_screen_divides_by_tile() {
        let grid = Grid::from_screen(1280, 720, 10).unwrap();
        assert_eq!((grid.width(), grid.height()), (128, 72));
        assert!(Grid::from_screen(1280, 720, 0).is_err());
        assert!(Grid::from_screen(5, 5, 10).is_err());
    }

    #[test]
    fn test_interior_cell_has_eight_neighbors() {
        let grid = Grid::new(10, 10).unwrap();
        let neighbors: Vec<Cell> = grid.neighbors(Cell::new(5, 5)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&Cell::new(5, 5)));
    }

    #[test]
    fn test_corners_and_edges_are_truncated() {
        let grid = Grid::new(10, 10).unwrap();
        assert_eq!(grid.neighbors(Cell::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbors(Cell::new(9, 9)).count(), 3);
        assert_eq!(grid.neighbors(Cell::new(0, 5)).count(), 5);
        assert_eq!(grid.neighbors(Cell::new(5, 9)).count(), 5);
    }

    #[test]
    fn test_last_column_is_width_minus_one() {
        let grid = Grid::new(10, 4).unwrap();
        assert!(grid.contains(Cell::new(9, 3)));
        assert!(!grid.contains(Cell::new(10, 3)));
        assert!(!grid.contains(Cell::new(9, 4)));
        assert!(grid.neighbors(Cell::new(9, 2)).all(|n| n.col <= 9 && n.row <= 3));
    }

    #[test]
    fn test_neighbor_count_bounded_everywhere() {
        let grid = Grid::new(7, 3).unwrap();
        for cell in grid.cells() {
            let count = grid.neighbors(cell).count();
            assert!(count <= 8);
            assert!(grid.neighbors(cell).all(|n| grid.contains(n)));
        }
        assert_eq!(grid.cells().count() as u64, grid.area());
    }

    #[test]
    fn test_cell_at_maps_pixels_to_tiles() {
        let grid = Grid::new(128, 72).unwrap();
        assert_eq!(grid.cell_at(25.0, 9.9, 10.0), Some(Cell::new(2, 0)));
        assert_eq!(grid.cell_at(1279.0, 719.0, 10.0), Some(Cell::new(127, 71)));
        assert_eq!(grid.cell_at(1280.0, 0.0, 10.0), None);
        assert_eq!(grid.cell_at(-1.0, 0.0, 10.0), None);
    }

    #[test]
    fn test_check_reports_bounds() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.check(Cell::new(3, 3)), Ok(Cell::new(3, 3)));
        assert_eq!(
            grid.check(Cell::new(4, 0)),
            Err(LifeError::OutOfBounds { cell: Cell::new(4, 0), width: 4, height: 4 })
        );
    }
}
