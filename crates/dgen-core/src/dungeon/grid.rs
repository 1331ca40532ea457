//! Cell grid and coordinates

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellKind};

/// Integer grid coordinate, also used for room centers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Sum of absolute coordinate differences
    pub fn manhattan(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Rectangular map of cells, stored row-major as `cells[y][x]`
///
/// Dimensions are fixed at allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Allocate a grid where every cell is a wall with no owning room
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Cell::wall(); width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a signed coordinate lies on the grid
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get the cell at (x, y), if on the grid
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get(y).and_then(|row| row.get(x))
    }

    /// Get the kind at (x, y), if on the grid
    pub fn kind(&self, x: usize, y: usize) -> Option<CellKind> {
        self.get(x, y).map(|c| c.kind)
    }

    /// Overwrite the cell at (x, y); off-grid writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = cell;
        }
    }

    /// Rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Every cell with its position, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Position::new(x, y), cell))
        })
    }

    /// Number of cells of the given kind
    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.iter().filter(|(_, c)| c.kind == kind).count()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that the stored rows match the declared dimensions
    ///
    /// Always true for grids built by [`Grid::new`]; deserialized grids
    /// may violate it.
    pub fn is_well_formed(&self) -> bool {
        self.cells.len() == self.height && self.cells.iter().all(|row| row.len() == self.width)
    }
}
