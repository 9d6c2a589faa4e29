/*
grid.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazegen.

Mazegen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazegen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazegen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Cell buffer of the maze.
//!
//! The grid stores `rows x columns` interior cells surrounded by a one cell border.
//! Row 0, row `rows + 1`, column 0, and column `columns + 1` are sentinel cells, which are never
//! carved.
//! Because of that border, every interior cell has four neighbors and the carver and the solver
//! do not need bound checks.
//!
//! Interior coordinates start at 1: the top left interior cell is `(1, 1)`.

use log::debug;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::direction::Direction;

/// Maze cell buffer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "GridRecord")]
pub struct MazeGrid {
    /// Number of interior rows.
    rows: usize,

    /// Number of interior columns.
    columns: usize,

    /// Row-major cells, border included. Empty once the grid is released.
    cells: Vec<Cell>,
}

/// Grid as read from a save file, before verification.
#[derive(Deserialize)]
struct GridRecord {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridRecord> for MazeGrid {
    type Error = String;

    /// Verify that the saved cells describe a complete grid with its border.
    fn try_from(record: GridRecord) -> Result<Self, Self::Error> {
        let GridRecord {
            rows,
            columns,
            cells,
        } = record;
        if rows <= 2 || columns <= 2 {
            return Err(format!("Invalid grid size: {columns}x{rows}"));
        }
        if cells.is_empty() {
            return Err("The grid has been released".to_string());
        }
        let expected: Option<usize> = rows
            .checked_add(2)
            .zip(columns.checked_add(2))
            .and_then(|(r, c)| r.checked_mul(c));
        if expected != Some(cells.len()) {
            return Err(format!(
                "{} cells for a {columns}x{rows} grid",
                cells.len()
            ));
        }

        let grid: MazeGrid = Self {
            rows,
            columns,
            cells,
        };
        for r in 0..grid.total_rows() {
            for c in 0..grid.total_columns() {
                let border: bool =
                    r == 0 || c == 0 || r == grid.total_rows() - 1 || c == grid.total_columns() - 1;
                if grid.cell(r, c).is_border() != border {
                    return Err(format!("Unexpected wall flag on cell ({r}, {c})"));
                }
            }
        }
        Ok(grid)
    }
}

impl MazeGrid {
    /// Allocate a grid with blank interior cells and a sentinel border.
    pub fn new(rows: usize, columns: usize) -> Self {
        let total_rows: usize = rows + 2;
        let total_columns: usize = columns + 2;
        let mut cells: Vec<Cell> = vec![Cell::BLANK; total_rows * total_columns];

        for c in 0..total_columns {
            cells[c] = Cell::WALL;
            cells[(total_rows - 1) * total_columns + c] = Cell::WALL;
        }
        for r in 0..total_rows {
            cells[r * total_columns] = Cell::WALL;
            cells[r * total_columns + total_columns - 1] = Cell::WALL;
        }

        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Number of interior rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of interior columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows, border included.
    pub fn total_rows(&self) -> usize {
        self.rows + 2
    }

    /// Number of columns, border included.
    pub fn total_columns(&self) -> usize {
        self.columns + 2
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.total_columns() + column
    }

    /// Return the cell at the given position.
    ///
    /// # Panics
    ///
    /// The method panics if the position is outside the grid or if the grid has been released.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    /// Return a mutable reference to the cell at the given position.
    pub fn cell_mut(&mut self, row: usize, column: usize) -> &mut Cell {
        let i: usize = self.index(row, column);
        &mut self.cells[i]
    }

    /// Position of the neighbor in the given direction, or `None` when it would fall outside the
    /// grid (only possible from a border cell).
    pub fn neighbor(
        &self,
        row: usize,
        column: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = direction.offset();
        let r: usize = row.checked_add_signed(dr)?;
        let c: usize = column.checked_add_signed(dc)?;
        if r < self.total_rows() && c < self.total_columns() {
            Some((r, c))
        } else {
            None
        }
    }

    /// Open the passage between the given cell and its neighbor in the given direction.
    ///
    /// Both sides are updated so that the two cells always agree on the passage.
    pub fn connect(&mut self, row: usize, column: usize, direction: Direction) {
        if let Some((r, c)) = self.neighbor(row, column, direction) {
            self.cell_mut(row, column).open(direction);
            self.cell_mut(r, c).open(direction.opposite());
        }
    }

    /// Build (`true`) or remove (`false`) a temporary wall across the given interior row.
    ///
    /// Removing the wall resets the cells of the row to blank.
    pub fn make_wall(&mut self, row: usize, build: bool) {
        let value: Cell = if build { Cell::WALL } else { Cell::BLANK };
        for c in 1..=self.columns {
            *self.cell_mut(row, c) = value;
        }
    }

    /// Clear the given flags from all the interior cells.
    pub fn clear_flags(&mut self, flags: u8) {
        for r in 1..=self.rows {
            for c in 1..=self.columns {
                self.cell_mut(r, c).clear(flags);
            }
        }
    }

    /// Iterate over the interior positions, row by row.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let columns: usize = self.columns;
        (1..=self.rows).flat_map(move |r| (1..=columns).map(move |c| (r, c)))
    }

    /// Release the cell buffer. Releasing an already released grid does nothing.
    pub fn release(&mut self) {
        if !self.cells.is_empty() {
            debug!("Releasing {}x{} grid", self.rows, self.columns);
            self.cells = Vec::new();
        }
    }

    /// Whether [`MazeGrid::release`] has been called.
    pub fn is_released(&self) -> bool {
        self.cells.is_empty()
    }

    /// Print the grid, one character per cell direction mask.
    pub fn debug(&self) {
        if self.is_released() {
            debug!("(released grid)");
            return;
        }
        let mut s: String = String::with_capacity(self.total_columns());
        for r in 0..self.total_rows() {
            s.clear();
            for c in 0..self.total_columns() {
                let cell: Cell = self.cell(r, c);
                if cell.is_border() {
                    s.push('#');
                } else if cell.is_on_path() {
                    s.push('*');
                } else {
                    s.push(char::from_digit(cell.mask() as u32, 16).unwrap_or('?'));
                }
            }
            debug!("{s}");
        }
    }
}
