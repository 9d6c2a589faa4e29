/*
lib.rs

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

//! Generate perfect mazes whose solution goes through a waypoint, solve them, and draw them as
//! BMP images.
//!
//! ```no_run
//! let mut maze = mazegen::generate(20, 11, 10, 5).unwrap();
//! mazegen::solve(&mut maze);
//! let tiles = mazegen::render::tiles::TileAtlas::procedural();
//! mazegen::render(&maze, &tiles, "maze.bmp").unwrap();
//! mazegen::release(&mut maze);
//! ```

pub mod bitmap;
pub mod config;
pub mod generator;
pub mod render;
pub mod saver;

use std::io;
use std::path::Path;

use generator::carver::{GenerationError, MazeCarver};
use generator::maze::Maze;
use generator::path;
use render::rasterizer::MazeRasterizer;
use render::tiles::TileSource;

/// Generate a maze of `width` columns and `height` rows whose solution goes through the cell at
/// column `waypoint_x` and row `waypoint_y` (both starting at 1).
pub fn generate(
    width: usize,
    height: usize,
    waypoint_x: usize,
    waypoint_y: usize,
) -> Result<Maze, GenerationError> {
    MazeCarver::new().generate(width, height, waypoint_x, waypoint_y)
}

/// Mark the solution of the maze and return it.
pub fn solve(maze: &mut Maze) -> &path::Path {
    generator::solver::solve(maze)
}

/// Draw the maze with the given tiles and write the BMP file.
pub fn render<T: TileSource, P: AsRef<Path>>(maze: &Maze, tiles: &T, output: P) -> io::Result<()> {
    MazeRasterizer::new(tiles).render(maze, output)
}

/// Release the maze cells. Releasing a maze twice is harmless.
pub fn release(maze: &mut Maze) {
    maze.release();
}

#[cfg(test)]
mod tests {
    use super::*;
    use render::tiles::TileAtlas;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn end_to_end() {
        let mut maze: Maze = generate(20, 11, 10, 5).unwrap();
        assert_eq!(maze.grid.total_columns(), 22);
        assert_eq!(maze.grid.total_rows(), 13);

        let solution: &path::Path = solve(&mut maze);
        assert!(solution.len() >= 10);
        assert!(solution.contains((5, 10)));

        let mut output: PathBuf = env::temp_dir();
        output.push(format!("mazegen-lib-{}.bmp", std::process::id()));
        render(&maze, &TileAtlas::procedural(), &output).unwrap();
        assert_eq!(
            fs::metadata(&output).unwrap().len(),
            54 + 160 * 88 * 3
        );
        let _ = fs::remove_file(&output);

        release(&mut maze);
        release(&mut maze);
        assert!(maze.is_released());
    }

    #[test]
    fn errors_are_reported() {
        assert_eq!(
            generate(2, 5, 1, 1).unwrap_err(),
            GenerationError::InvalidWidth(2)
        );
        assert_eq!(
            generate(5, 1, 1, 1).unwrap_err(),
            GenerationError::InvalidHeight(1)
        );
        assert!(matches!(
            generate(5, 5, 6, 1).unwrap_err(),
            GenerationError::WaypointOutOfBounds { .. }
        ));
    }
}
