use crate::grid::{Cell, Grid};

/// A named arrangement of live cells, as `(col, row)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

impl Pattern {
    /// Width and height of the bounding box.
    pub fn size(&self) -> (u32, u32) {
        let width = self.cells.iter().map(|&(col, _)| col + 1).max().unwrap_or(0);
        let height = self.cells.iter().map(|&(_, row)| row + 1).max().unwrap_or(0);
        (width, height)
    }

    /// Cells of the pattern centred on `grid`. Cells that do not fit are dropped.
    pub fn placed(&self, grid: &Grid) -> impl Iterator<Item = Cell> + '_ {
        let (width, height) = self.size();
        let left = grid.width().saturating_sub(width) / 2;
        let top = grid.height().saturating_sub(height) / 2;
        let grid = *grid;
        self.cells
            .iter()
            .map(move |&(col, row)| Cell::new(left + col, top + row))
            .filter(move |&cell| grid.contains(cell))
    }
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(PATTERNS[0].size(), (3, 3));
        assert_eq!(find("pulsar").unwrap().size(), (13, 13));
        assert_eq!(find("Gosper Glider Gun").unwrap().size(), (36, 9));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn test_blinker_centred() {
        let grid = Grid::new(10, 10).unwrap();
        let cells: Vec<Cell> = find("Blinker").unwrap().placed(&grid).collect();
        assert_eq!(cells, vec![Cell::new(3, 4), Cell::new(4, 4), Cell::new(5, 4)]);
    }

    #[test]
    fn test_oversized_pattern_is_clipped() {
        let grid = Grid::new(20, 20).unwrap();
        let gun = find("Gosper Glider Gun").unwrap();
        let cells: Vec<Cell> = gun.placed(&grid).collect();
        assert!(cells.len() < gun.cells.len());
        assert!(cells.iter().all(|&cell| grid.contains(cell)));
    }
}
