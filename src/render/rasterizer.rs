/*
rasterizer.rs

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

//! Turn a maze into a bitmap.

use log::{debug, info};
use std::io::{Error, ErrorKind, Result};
use std::path::Path;

use super::tiles::TileSource;
use crate::bitmap::codec;
use crate::bitmap::header::BitmapHeader;
use crate::bitmap::raster::PixelRaster;
use crate::config::{COLOR_DEPTH, TILE_SIDE};
use crate::generator::cell::Cell;
use crate::generator::grid::MazeGrid;
use crate::generator::maze::Maze;

/// Rasterizer object.
pub struct MazeRasterizer<'a, T: TileSource> {
    /// Where the tiles come from.
    tiles: &'a T,

    /// Color used to paint the floor of the cells on the solution path, if any.
    highlight: Option<u32>,
}

impl<'a, T: TileSource> MazeRasterizer<'a, T> {
    /// Create a [`MazeRasterizer`] object.
    pub fn new(tiles: &'a T) -> Self {
        Self {
            tiles,
            highlight: None,
        }
    }

    /// Paint the floor of the solution cells with the given `0xRRGGBB` color.
    pub fn with_highlight(mut self, color: u32) -> Self {
        self.highlight = Some(color);
        self
    }

    /// Build the raster: one tile per interior cell, at the cell position.
    ///
    /// The raster is `rows * TILE_SIDE` pixels high and `columns * TILE_SIDE` pixels wide.
    pub fn rasterize(&self, grid: &MazeGrid) -> PixelRaster {
        let mut raster: PixelRaster = PixelRaster::new(
            grid.columns() * TILE_SIDE,
            grid.rows() * TILE_SIDE,
            0,
        );
        for (r, c) in grid.interior() {
            let cell: Cell = grid.cell(r, c);
            let tile: &PixelRaster = self.tiles.tile(cell.mask());
            let top: usize = (r - 1) * TILE_SIDE;
            let left: usize = (c - 1) * TILE_SIDE;
            raster.blit(top, left, tile);

            if let Some(color) = self.highlight
                && cell.is_on_path()
            {
                paint_floor(&mut raster, top, left, tile, color);
            }
        }
        raster
    }

    /// Rasterize the maze and write the BMP file.
    ///
    /// # Errors
    ///
    /// The function returns an [`ErrorKind::InvalidInput`] error for a released maze, and the
    /// I/O errors from writing the file.
    pub fn render<P: AsRef<Path>>(&self, maze: &Maze, path: P) -> Result<()> {
        if maze.is_released() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Cannot render a released maze",
            ));
        }
        let raster: PixelRaster = self.rasterize(&maze.grid);
        debug!("Raster {}x{} pixels", raster.width(), raster.height());
        let header: BitmapHeader = BitmapHeader::simple(
            raster.width() as u32,
            raster.height() as u32,
            COLOR_DEPTH as u32,
        );
        codec::write_file(path.as_ref(), &header, &raster)?;
        info!("Maze written to {}", path.as_ref().display());
        Ok(())
    }
}

/// Replace the floor color of the tile, which is the color at its center, in the raster area
/// where the tile was copied.
///
/// Only the `TILE_SIDE x TILE_SIDE` cell area is painted, whatever the size of the tile.
fn paint_floor(raster: &mut PixelRaster, top: usize, left: usize, tile: &PixelRaster, color: u32) {
    if tile.width() == 0 || tile.height() == 0 {
        return;
    }
    let floor: u32 = tile.get(tile.height() / 2, tile.width() / 2);
    let height: usize = tile.height().min(TILE_SIDE).min(raster.height().saturating_sub(top));
    let width: usize = tile.width().min(TILE_SIDE).min(raster.width().saturating_sub(left));
    for r in 0..height {
        for c in 0..width {
            if tile.get(r, c) == floor {
                raster.set(top + r, left + c, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::codec;
    use crate::config::{FLOOR_COLOR, PATH_COLOR, WALL_COLOR};
    use crate::generator::carver::MazeCarver;
    use crate::generator::direction::Direction;
    use crate::generator::solver;
    use crate::render::tiles::TileAtlas;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    /// Tiles filled with a color that encodes the mask, to check the placement.
    struct MaskTiles(Vec<PixelRaster>);

    impl MaskTiles {
        fn new() -> Self {
            Self(
                (0..16u32)
                    .map(|m| PixelRaster::new(TILE_SIDE, TILE_SIDE, m))
                    .collect(),
            )
        }
    }

    impl TileSource for MaskTiles {
        fn tile(&self, mask: u8) -> &PixelRaster {
            &self.0[mask as usize]
        }
    }

    fn maze(seed: u64) -> Maze {
        MazeCarver::with_rng(StdRng::seed_from_u64(seed))
            .generate(6, 4, 3, 2)
            .unwrap()
    }

    #[test]
    fn tiles_are_placed_at_the_cell_position() {
        let m: Maze = maze(1);
        let tiles: MaskTiles = MaskTiles::new();
        let raster: PixelRaster = MazeRasterizer::new(&tiles).rasterize(&m.grid);
        assert_eq!(raster.width(), 6 * TILE_SIDE);
        assert_eq!(raster.height(), 4 * TILE_SIDE);
        for (r, c) in m.grid.interior() {
            let expected: u32 = m.grid.cell(r, c).mask() as u32;
            assert_eq!(raster.get((r - 1) * TILE_SIDE, (c - 1) * TILE_SIDE), expected);
            assert_eq!(raster.get(r * TILE_SIDE - 1, c * TILE_SIDE - 1), expected);
        }
    }

    #[test]
    fn entrance_is_open_in_the_picture() {
        let m: Maze = maze(2);
        let atlas: TileAtlas = TileAtlas::procedural();
        let raster: PixelRaster = MazeRasterizer::new(&atlas).rasterize(&m.grid);
        let x: usize = (m.entrance - 1) * TILE_SIDE + TILE_SIDE / 2;
        assert_eq!(raster.get(0, x), FLOOR_COLOR);
        assert!(m.grid.cell(1, m.entrance).is_open(Direction::North));
    }

    #[test]
    fn solution_is_highlighted() {
        let mut m: Maze = maze(3);
        solver::solve(&mut m);
        let atlas: TileAtlas = TileAtlas::procedural();
        let raster: PixelRaster = MazeRasterizer::new(&atlas)
            .with_highlight(PATH_COLOR)
            .rasterize(&m.grid);
        for (r, c) in m.grid.interior() {
            let center: u32 = raster.get((r - 1) * TILE_SIDE + 4, (c - 1) * TILE_SIDE + 4);
            if m.grid.cell(r, c).is_on_path() {
                assert_eq!(center, PATH_COLOR);
            } else {
                assert_eq!(center, FLOOR_COLOR);
            }
            assert_eq!(raster.get((r - 1) * TILE_SIDE, (c - 1) * TILE_SIDE), WALL_COLOR);
        }
    }

    /// Tiles larger than the cell, with a floor in the middle.
    struct LargeTiles(PixelRaster);

    impl TileSource for LargeTiles {
        fn tile(&self, _mask: u8) -> &PixelRaster {
            &self.0
        }
    }

    #[test]
    fn oversized_tiles_stay_in_the_picture() {
        let mut m: Maze = maze(6);
        solver::solve(&mut m);
        let tiles: LargeTiles = LargeTiles(PixelRaster::new(TILE_SIDE + 2, TILE_SIDE + 2, FLOOR_COLOR));
        let raster: PixelRaster = MazeRasterizer::new(&tiles)
            .with_highlight(PATH_COLOR)
            .rasterize(&m.grid);
        assert_eq!(raster.width(), 6 * TILE_SIDE);
        assert_eq!(raster.height(), 4 * TILE_SIDE);

        let (r, c) = (m.grid.rows(), m.goal);
        assert!(m.grid.cell(r, c).is_on_path());
        assert_eq!(raster.get(r * TILE_SIDE - 1, c * TILE_SIDE - 1), PATH_COLOR);
    }

    #[test]
    fn render_writes_a_readable_bitmap() {
        let m: Maze = maze(4);
        let atlas: TileAtlas = TileAtlas::procedural();
        let rasterizer = MazeRasterizer::new(&atlas);
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("mazegen-render-{}.bmp", std::process::id()));

        rasterizer.render(&m, &path).unwrap();
        let data: Vec<u8> = fs::read(&path).unwrap();
        assert_eq!(data.len(), 54 + 48 * 32 * 3);
        assert_eq!(codec::decode(&data).unwrap(), rasterizer.rasterize(&m.grid));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn released_maze_is_not_rendered() {
        let mut m: Maze = maze(5);
        m.release();
        let atlas: TileAtlas = TileAtlas::procedural();
        let err: Error = MazeRasterizer::new(&atlas)
            .render(&m, env::temp_dir().join("mazegen-released.bmp"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
