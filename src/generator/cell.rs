/*
cell.rs

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

//! Maze cell.
//!
//! A cell is a single byte.
//! The four low bits are the open-direction mask (see [`super::direction::Direction`]).
//! The four high bits are status flags:
//!
//! - `VISITED` is set by the carver and the solver while they walk the maze.
//! - `GOAL` marks the exit cell.
//! - `SOLUTION` marks the cells on the path from the entrance to the goal.
//! - `BORDER` marks the sentinel cells around the maze, and the temporary wall that the carver
//!   builds on the waypoint row.

use serde::{Deserialize, Serialize};

use super::direction::{ALL_DIRECTIONS, Direction};

pub const VISITED: u8 = 0x10;
pub const GOAL: u8 = 0x20;
pub const SOLUTION: u8 = 0x40;
pub const BORDER: u8 = 0x80;

/// Maze cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cell(u8);

impl Cell {
    /// Cell with no opening and no flag.
    pub const BLANK: Cell = Cell(0);

    /// Sentinel cell.
    pub const WALL: Cell = Cell(BORDER);

    /// Raw value of the cell.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Open-direction mask (0 to 15).
    pub fn mask(self) -> u8 {
        self.0 & ALL_DIRECTIONS
    }

    /// Whether no bit at all is set. Only blank cells can be carved.
    pub fn is_blank(self) -> bool {
        self.0 == 0
    }

    pub fn is_open(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn open(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn is_visited(self) -> bool {
        self.0 & VISITED != 0
    }

    pub fn set_visited(&mut self) {
        self.0 |= VISITED;
    }

    pub fn is_goal(self) -> bool {
        self.0 & GOAL != 0
    }

    pub fn set_goal(&mut self) {
        self.0 |= GOAL;
    }

    pub fn is_on_path(self) -> bool {
        self.0 & SOLUTION != 0
    }

    pub fn set_on_path(&mut self) {
        self.0 |= SOLUTION;
    }

    pub fn is_border(self) -> bool {
        self.0 & BORDER != 0
    }

    /// Clear the given flags, keeping the other bits.
    pub fn clear(&mut self, flags: u8) {
        self.0 &= !flags;
    }
}
