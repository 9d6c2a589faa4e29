/*
maze.rs

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

//! Generated maze and the pipeline that owns it.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::carver::{GenerationError, MazeCarver};
use super::direction::Direction;
use super::grid::MazeGrid;
use super::path::{Path, Position};

/// Maze representation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "MazeRecord")]
pub struct Maze {
    /// Cells of the maze.
    pub grid: MazeGrid,

    /// Position of the waypoint as `(row, column)`.
    pub waypoint: Position,

    /// Column of the entrance, on the top row.
    pub entrance: usize,

    /// Column of the goal, on the bottom row.
    pub goal: usize,

    /// Path from the entrance to the goal, once the maze is solved.
    #[serde(default)]
    pub solution: Option<Path>,
}

/// Maze as read from a save file, before verification.
#[derive(Deserialize)]
struct MazeRecord {
    grid: MazeGrid,
    waypoint: Position,
    entrance: usize,
    goal: usize,
    #[serde(default)]
    solution: Option<Path>,
}

impl TryFrom<MazeRecord> for Maze {
    type Error = String;

    fn try_from(record: MazeRecord) -> Result<Self, Self::Error> {
        let grid: &MazeGrid = &record.grid;
        let (rows, columns) = (grid.rows(), grid.columns());
        if record.entrance == 0 || record.entrance > columns {
            return Err(format!("Entrance column {} out of range", record.entrance));
        }
        if !grid.cell(1, record.entrance).is_open(Direction::North) {
            return Err(format!("No entrance at column {}", record.entrance));
        }
        if record.goal == 0 || record.goal > columns {
            return Err(format!("Goal column {} out of range", record.goal));
        }
        if !grid.cell(rows, record.goal).is_goal() {
            return Err(format!("No goal at column {}", record.goal));
        }
        let (row, column) = record.waypoint;
        if row == 0 || row > rows || column == 0 || column > columns {
            return Err(format!("Waypoint ({column}, {row}) out of range"));
        }
        if let Some(solution) = &record.solution
            && let Some(&(r, c)) = solution
                .get()
                .iter()
                .find(|&&(r, c)| r == 0 || r > rows || c == 0 || c > columns)
        {
            return Err(format!("Solution cell ({c}, {r}) out of range"));
        }

        Ok(Self {
            grid: record.grid,
            waypoint: record.waypoint,
            entrance: record.entrance,
            goal: record.goal,
            solution: record.solution,
        })
    }
}

impl Maze {
    /// Create a [`Maze`] object from a carved grid.
    pub fn new(grid: MazeGrid, waypoint: Position, entrance: usize, goal: usize) -> Self {
        Self {
            grid,
            waypoint,
            entrance,
            goal,
            solution: None,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.grid.columns()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Release the cell buffer. Can be called several times.
    pub fn release(&mut self) {
        self.grid.release();
        self.solution = None;
    }

    pub fn is_released(&self) -> bool {
        self.grid.is_released()
    }
}

/// Generation pipeline.
///
/// The pipeline owns at most one maze at a time.
/// Generating a new maze releases the previous one first.
pub struct MazePipeline<R: Rng> {
    carver: MazeCarver<R>,
    maze: Option<Maze>,
}

impl<R: Rng> MazePipeline<R> {
    /// Create a [`MazePipeline`] object that uses the given carver.
    pub fn new(carver: MazeCarver<R>) -> Self {
        Self { carver, maze: None }
    }

    /// Release the current maze and generate a new one.
    ///
    /// See [`MazeCarver::generate`] for the parameters and the errors.
    pub fn generate(
        &mut self,
        width: usize,
        height: usize,
        waypoint_x: usize,
        waypoint_y: usize,
    ) -> Result<&mut Maze, GenerationError> {
        self.release();
        let maze: Maze = self
            .carver
            .generate(width, height, waypoint_x, waypoint_y)?;
        Ok(self.maze.insert(maze))
    }

    /// Return the current maze, if any.
    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// Give the current maze away.
    pub fn take(&mut self) -> Option<Maze> {
        self.maze.take()
    }

    /// Statistics of the last generation: number of carved cells and duration in seconds.
    pub fn stats(&self) -> (usize, f32) {
        (self.carver.carved, self.carver.duration)
    }

    /// Release the current maze. Does nothing if there is no maze.
    pub fn release(&mut self) {
        if let Some(mut maze) = self.maze.take() {
            debug!("Releasing the previous maze");
            maze.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pipeline() -> MazePipeline<StdRng> {
        MazePipeline::new(MazeCarver::with_rng(StdRng::seed_from_u64(9)))
    }

    #[test]
    fn maze_release_twice_is_harmless() {
        let mut p = pipeline();
        let maze: &mut Maze = p.generate(5, 5, 3, 3).unwrap();
        maze.release();
        maze.release();
        assert!(maze.is_released());
        assert!(!maze.is_solved());
    }

    #[test]
    fn pipeline_replaces_the_previous_maze() {
        let mut p = pipeline();
        p.generate(5, 5, 3, 3).unwrap();
        let maze: &Maze = p.generate(8, 4, 2, 1).unwrap();
        assert_eq!((maze.width(), maze.height()), (8, 4));
        assert_eq!(p.stats().0, 32);
        p.release();
        p.release();
        assert!(p.maze().is_none());
    }

    #[test]
    fn failed_generation_leaves_no_maze() {
        let mut p = pipeline();
        p.generate(5, 5, 3, 3).unwrap();
        assert!(p.generate(5, 2, 3, 1).is_err());
        assert!(p.maze().is_none());
    }
}
