/*
solver.rs

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

//! Find the path from the entrance to the goal.
//!
//! The solver does not use any knowledge from the carver, so it can solve any maze stored in a
//! [`MazeGrid`].
//! It walks depth-first from the entrance and tries the open directions of each cell in the
//! [`Direction::SOLVE_ORDER`] order.
//! Because the maze is a tree, the chain of cells being explored when the goal is reached is the
//! unique solution.

use log::debug;

use super::cell::VISITED;
use super::direction::Direction;
use super::grid::MazeGrid;
use super::maze::Maze;
use super::path::Path;

/// A cell being explored, with the index of the next direction to try.
struct SolveFrame {
    row: usize,
    column: usize,
    next: usize,
}

/// Result of stepping into a cell.
enum Step {
    Rejected,
    Goal,
    Explore,
}

/// Solve the maze, mark the cells of the solution, and return the solution path.
///
/// # Panics
///
/// The function panics if the maze has no entrance or if the goal cannot be reached.
/// Neither can happen with a maze produced by [`super::carver::MazeCarver`].
pub fn solve(maze: &mut Maze) -> &Path {
    let grid: &mut MazeGrid = &mut maze.grid;
    if grid.is_released() {
        panic!("Bug: cannot solve a released maze");
    }

    let entrance: usize = match (1..=grid.columns()).find(|&c| grid.cell(1, c).is_open(Direction::North))
    {
        Some(c) => c,
        None => panic!("Bug: the maze has no entrance"),
    };
    debug!("Solving from entrance column {entrance}");

    let mut stack: Vec<SolveFrame> = Vec::new();
    let mut found: bool = match step(grid, 1, entrance) {
        Step::Rejected => false,
        Step::Goal => {
            stack.push(SolveFrame {
                row: 1,
                column: entrance,
                next: 0,
            });
            true
        }
        Step::Explore => {
            stack.push(SolveFrame {
                row: 1,
                column: entrance,
                next: 0,
            });
            false
        }
    };

    while !found {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        if frame.next >= Direction::SOLVE_ORDER.len() {
            stack.pop();
            continue;
        }
        let direction: Direction = Direction::SOLVE_ORDER[frame.next];
        frame.next += 1;
        let (r, c) = (frame.row, frame.column);

        if !grid.cell(r, c).is_open(direction) {
            continue;
        }
        let Some((nr, nc)) = grid.neighbor(r, c, direction) else {
            continue;
        };
        match step(grid, nr, nc) {
            Step::Rejected => (),
            s => {
                stack.push(SolveFrame {
                    row: nr,
                    column: nc,
                    next: 0,
                });
                found = matches!(s, Step::Goal);
            }
        }
    }

    if !found {
        panic!("Bug: no path from the entrance to the goal");
    }

    let mut path: Path = Path::new(stack.len());
    for frame in &stack {
        grid.cell_mut(frame.row, frame.column).set_on_path();
        path.push((frame.row, frame.column));
    }
    grid.clear_flags(VISITED);
    debug!("Solution length = {}", path.len());

    maze.solution.insert(path)
}

/// Step into a cell: reject walls and already visited cells, otherwise mark the cell visited.
fn step(grid: &mut MazeGrid, row: usize, column: usize) -> Step {
    let cell = grid.cell_mut(row, column);
    if cell.is_border() || cell.is_visited() {
        return Step::Rejected;
    }
    cell.set_visited();
    if cell.is_goal() {
        Step::Goal
    } else {
        Step::Explore
    }
}
