//! Procedural maze layout
//!
//! The layout is generated once at construction and never mutated. The
//! generation rule: the outer border is all walls, interior cells whose row
//! and column indices are both even become pillars, and the exact center is
//! forced open so it is always traversable.

use super::types::{Cell, Position};

/// Immutable 2-D grid of open and wall cells
#[derive(Debug, Clone)]
pub struct MazeLayout {
    size: usize,
    cells: Vec<Cell>,
}

impl MazeLayout {
    /// Generate a layout for a `size` x `size` grid
    pub fn generate(size: usize) -> Self {
        debug_assert!(size >= 5, "maze size {} too small for an interior", size);

        let mut cells = vec![Cell::Wall; size * size];
        for row in 1..size - 1 {
            for col in 1..size - 1 {
                // Even/even interior cells stay walls, forming a pillar grid.
                if row % 2 != 0 || col % 2 != 0 {
                    cells[row * size + col] = Cell::Open;
                }
            }
        }
        cells[(size / 2) * size + size / 2] = Cell::Open;

        Self { size, cells }
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center position, always open
    pub fn center(&self) -> Position {
        Position::new(self.size / 2, self.size / 2)
    }

    /// Cell at the given position
    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.row * self.size + position.col]
    }

    /// Whether the cell at `position` can be entered
    pub fn is_open(&self, position: Position) -> bool {
        self.cell(position).is_open()
    }

    /// All open positions in row-major order
    pub fn open_positions(&self) -> Vec<Position> {
        let mut open = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let position = Position::new(row, col);
                if self.is_open(position) {
                    open.push(position);
                }
            }
        }
        open
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
