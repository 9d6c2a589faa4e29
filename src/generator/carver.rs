/*
carver.rs

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

//! Carve a random maze that goes through a waypoint.
//!
//! The carver uses randomized depth-first backtracking: from the current cell, the four
//! directions are shuffled and each blank neighbor is carved in turn, opening the passage on both
//! sides.
//!
//! To force the solution through the waypoint, the maze is carved in two parts.
//! The waypoint row is first turned into a wall and the part of the maze on one side of that row
//! is carved.
//! The wall is then removed and the rest of the maze (the waypoint row and the other side) is
//! carved from the waypoint.
//! Finally, the waypoint is connected to the first part.
//! The two parts are trees joined by a single edge at the waypoint, so any path from the top row
//! to the bottom row goes through the waypoint.

use log::{Level, debug, log_enabled};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::cell::VISITED;
use super::direction::Direction;
use super::grid::MazeGrid;
use super::maze::Maze;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GenerationError {
    /// The maze must be at least three columns wide.
    InvalidWidth(usize),

    /// The maze must be at least three rows high.
    InvalidHeight(usize),

    /// The waypoint is not an interior cell.
    WaypointOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerationError::InvalidWidth(w) => {
                write!(f, "Invalid width argument: {w} (must be greater than 2)")
            }
            GenerationError::InvalidHeight(h) => {
                write!(f, "Invalid height argument: {h} (must be greater than 2)")
            }
            GenerationError::WaypointOutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Waypoint ({x}, {y}) out of bounds (must be between (1, 1) and ({width}, {height}))"
            ),
        }
    }
}

impl Error for GenerationError {}

/// A cell being carved, with the directions left to try.
struct CarveFrame {
    row: usize,
    column: usize,
    order: [Direction; 4],
    next: usize,
}

/// [`MazeCarver`] object.
pub struct MazeCarver<R: Rng> {
    /// Random number generator used to shuffle directions and to choose the exits.
    rng: R,

    /// Number of cells carved while generating the last maze.
    pub carved: usize,

    /// Duration in seconds it took to generate the last maze.
    pub duration: f32,

    /// Time when the generation started. Used to compute the [`MazeCarver::duration`].
    start: Instant,
}

impl MazeCarver<ThreadRng> {
    /// Create the object with the thread random number generator.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for MazeCarver<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MazeCarver<R> {
    /// Create the object with the given random number generator.
    ///
    /// Using a seeded generator produces the same maze for the same parameters.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            carved: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate and return a maze of `width` columns and `height` rows whose solution goes
    /// through the cell at column `waypoint_x` and row `waypoint_y` (both starting at 1).
    ///
    /// # Errors
    ///
    /// The parameters are verified before anything is allocated.
    /// The method returns [`GenerationError::InvalidHeight`] or
    /// [`GenerationError::InvalidWidth`] when the maze is less than three cells high or wide,
    /// and [`GenerationError::WaypointOutOfBounds`] when the waypoint is not inside the maze.
    pub fn generate(
        &mut self,
        width: usize,
        height: usize,
        waypoint_x: usize,
        waypoint_y: usize,
    ) -> Result<Maze, GenerationError> {
        validate(width, height, waypoint_x, waypoint_y)?;

        self.carved = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        let mut grid: MazeGrid = MazeGrid::new(height, width);

        // While the waypoint row is blocked, carve the part below it when the waypoint is in the
        // top half of the maze, and the part above it otherwise.
        let first_row: usize = if waypoint_y <= height / 2 {
            waypoint_y + 1
        } else {
            waypoint_y - 1
        };
        debug!(
            "Maze {width}x{height}  Waypoint = ({waypoint_x}, {waypoint_y})  First part from row {first_row}"
        );
        grid.make_wall(waypoint_y, true);
        self.carve(&mut grid, first_row, waypoint_x);

        // Carve the rest from the waypoint
        grid.make_wall(waypoint_y, false);
        self.carve(&mut grid, waypoint_y, waypoint_x);

        // Join the two parts through the waypoint
        let toward_first: Direction = if first_row > waypoint_y {
            Direction::South
        } else {
            Direction::North
        };
        grid.connect(waypoint_y, waypoint_x, toward_first);

        grid.clear_flags(VISITED);

        // Exits
        let entrance: usize = self.rng.random_range(1..=width);
        grid.cell_mut(1, entrance).open(Direction::North);
        let goal: usize = self.rng.random_range(1..=width);
        let goal_cell = grid.cell_mut(height, goal);
        goal_cell.open(Direction::South);
        goal_cell.set_goal();

        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Carved = {}  Entrance column = {entrance}  Goal column = {goal}  Duration = {}",
            self.carved, self.duration
        );
        if log_enabled!(Level::Debug) {
            grid.debug();
        }

        Ok(Maze::new(grid, (waypoint_y, waypoint_x), entrance, goal))
    }

    /// Carve the maze from the given cell.
    ///
    /// Return `false` if the cell was not blank (already carved, or a wall), in which case
    /// nothing is changed.
    ///
    /// The walk uses an explicit stack of frames instead of recursion so that large mazes do not
    /// overflow the call stack. The cells are visited, and the random numbers are drawn, in the
    /// same order as the recursive version.
    fn carve(&mut self, grid: &mut MazeGrid, row: usize, column: usize) -> bool {
        if !grid.cell(row, column).is_blank() {
            return false;
        }

        let mut stack: Vec<CarveFrame> = Vec::with_capacity(grid.rows() * grid.columns());
        stack.push(self.enter(grid, row, column));

        while let Some(frame) = stack.last_mut() {
            if frame.next >= frame.order.len() {
                stack.pop();
                continue;
            }
            let direction: Direction = frame.order[frame.next];
            frame.next += 1;
            let (r, c) = (frame.row, frame.column);

            let Some((nr, nc)) = grid.neighbor(r, c, direction) else {
                continue;
            };
            if grid.cell(nr, nc).is_blank() {
                stack.push(self.enter(grid, nr, nc));
                grid.connect(r, c, direction);
            }
        }
        true
    }

    /// Mark the cell as visited and shuffle the directions to try from it.
    fn enter(&mut self, grid: &mut MazeGrid, row: usize, column: usize) -> CarveFrame {
        let mut order: [Direction; 4] = Direction::ALL;
        order.shuffle(&mut self.rng);
        grid.cell_mut(row, column).set_visited();
        self.carved += 1;
        CarveFrame {
            row,
            column,
            order,
            next: 0,
        }
    }
}

/// Verify the generation parameters.
///
/// Each check is independent so that every error can be reported in isolation.
fn validate(
    width: usize,
    height: usize,
    waypoint_x: usize,
    waypoint_y: usize,
) -> Result<(), GenerationError> {
    if height <= 2 {
        return Err(GenerationError::InvalidHeight(height));
    }
    if width <= 2 {
        return Err(GenerationError::InvalidWidth(width));
    }
    if waypoint_x == 0 || waypoint_y == 0 || waypoint_x > width || waypoint_y > height {
        return Err(GenerationError::WaypointOutOfBounds {
            x: waypoint_x,
            y: waypoint_y,
            width,
            height,
        });
    }
    Ok(())
}
