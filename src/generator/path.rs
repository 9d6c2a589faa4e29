/*
path.rs

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

//! Solution path through the maze.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Cell position as `(row, column)`.
pub type Position = (usize, usize);

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells, from the entrance to the goal.
    path: Vec<Position>,

    /// Cells of the path.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    #[serde(skip)]
    cells: HashSet<Position>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            cells: HashSet::with_capacity(capacity),
        }
    }

    /// Create a [`Path`] object from a list of positions.
    pub fn from_vec(path: &[Position]) -> Self {
        Self {
            path: path.to_vec(),
            cells: path.iter().copied().collect(),
        }
    }

    /// Add a cell at the end of the path.
    pub fn push(&mut self, position: Position) {
        self.path.push(position);
        self.cells.insert(position);
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    ///
    /// The lookup set is not serialized, so after a restore the vector is scanned instead.
    pub fn contains(&self, position: Position) -> bool {
        if self.cells.len() == self.path.len() {
            self.cells.contains(&position)
        } else {
            self.path.contains(&position)
        }
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<Position> {
        &self.path
    }

    /// Return the first cell in the path (the entrance).
    pub fn get_first(&self) -> Option<Position> {
        self.path.first().copied()
    }

    /// Return the last cell in the path (the goal).
    pub fn get_last(&self) -> Option<Position> {
        self.path.last().copied()
    }
}
