/*
generator.rs

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

//! Generate and solve random mazes.
//!
//! A maze is a [`grid::MazeGrid`] of [`cell::Cell`] values surrounded by a sentinel border.
//! Each cell stores which of its four sides are open (see [`direction::Direction`]).
//!
//! To create a maze, create a [`carver::MazeCarver`] object and use its
//! [`carver::MazeCarver::generate`] method.
//! The method returns a [`maze::Maze`] object whose solution is guaranteed to go through the
//! requested waypoint.
//! The [`solver::solve`] function then finds that solution and marks its cells.
//!
//! The [`maze::MazePipeline`] object owns one maze at a time and releases the previous maze
//! every time a new one is generated.

pub mod carver;
pub mod cell;
pub mod direction;
pub mod grid;
pub mod maze;
pub mod path;
pub mod solver;
