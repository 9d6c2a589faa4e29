/*
tiles.rs

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

//! Maze tiles.
//!
//! Every cell of the maze is drawn with an 8x8 tile selected by the cell direction mask, so there
//! are 16 tiles.
//! The tiles can be loaded from a directory that contains the `mazeBitMap0.bmp` to
//! `mazeBitMap15.bmp` files, or drawn in memory.

use log::debug;
use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};

use crate::bitmap::codec;
use crate::bitmap::header::BitmapHeader;
use crate::bitmap::raster::PixelRaster;
use crate::config::{
    COLOR_DEPTH, FLOOR_COLOR, TILE_FILE_PREFIX, TILE_FILE_SUFFIX, TILE_SIDE, WALL_COLOR,
    WALL_THICKNESS,
};
use crate::generator::direction::{Direction, directions_in};

/// Number of tiles (one per direction mask).
pub const TILE_COUNT: usize = 16;

/// Provide the tile for a direction mask.
pub trait TileSource {
    /// Return the `TILE_SIDE x TILE_SIDE` tile for the given direction mask (0 to 15), top row
    /// first.
    fn tile(&self, mask: u8) -> &PixelRaster;
}

/// Set of the 16 tiles.
#[derive(Debug, Clone)]
pub struct TileAtlas {
    tiles: Vec<PixelRaster>,
}

impl TileAtlas {
    /// Create a [`TileAtlas`] object from 16 tiles, ordered by direction mask.
    ///
    /// # Errors
    ///
    /// The function returns an [`ErrorKind::InvalidInput`] error if there are not exactly 16
    /// tiles, or if a tile is not `TILE_SIDE x TILE_SIDE` pixels.
    pub fn from_tiles(tiles: Vec<PixelRaster>) -> Result<Self> {
        if tiles.len() != TILE_COUNT {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("{} tiles instead of {TILE_COUNT}", tiles.len()),
            ));
        }
        if let Some(mask) = tiles
            .iter()
            .position(|t| t.width() != TILE_SIDE || t.height() != TILE_SIDE)
        {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "Tile {mask} is {}x{} pixels instead of {TILE_SIDE}x{TILE_SIDE}",
                    tiles[mask].width(),
                    tiles[mask].height()
                ),
            ));
        }
        Ok(Self { tiles })
    }

    /// Load the tiles from the BMP files in the given directory.
    ///
    /// # Errors
    ///
    /// The error names the file that is missing, unreadable, or not an 8x8 24-bit image.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut tiles: Vec<PixelRaster> = Vec::with_capacity(TILE_COUNT);
        for mask in 0..TILE_COUNT {
            let path: PathBuf = dir.as_ref().join(file_name(mask));
            debug!("Loading tile {}", path.display());
            let tile: PixelRaster = codec::read_file(&path)
                .map_err(|e| Error::new(e.kind(), format!("{}: {e}", path.display())))?;
            if tile.width() != TILE_SIDE || tile.height() != TILE_SIDE {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!(
                        "{}: {}x{} pixels instead of {TILE_SIDE}x{TILE_SIDE}",
                        path.display(),
                        tile.width(),
                        tile.height()
                    ),
                ));
            }
            tiles.push(tile);
        }
        Self::from_tiles(tiles)
    }

    /// Draw the tiles: a floor surrounded by walls, with the wall removed on every open side.
    pub fn procedural() -> Self {
        let tiles: Vec<PixelRaster> = (0..TILE_COUNT as u8).map(draw_tile).collect();
        Self { tiles }
    }

    /// Write the tiles as BMP files in the given directory, with the names that
    /// [`TileAtlas::load`] expects.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let header: BitmapHeader =
            BitmapHeader::simple(TILE_SIDE as u32, TILE_SIDE as u32, COLOR_DEPTH as u32);
        for (mask, tile) in self.tiles.iter().enumerate() {
            codec::write_file(dir.as_ref().join(file_name(mask)), &header, tile)?;
        }
        Ok(())
    }
}

impl TileSource for TileAtlas {
    fn tile(&self, mask: u8) -> &PixelRaster {
        &self.tiles[(mask & 0x0F) as usize]
    }
}

/// Name of the asset file for the given direction mask.
pub fn file_name(mask: usize) -> String {
    format!("{TILE_FILE_PREFIX}{mask}{TILE_FILE_SUFFIX}")
}

/// Draw the tile for a direction mask.
fn draw_tile(mask: u8) -> PixelRaster {
    let mut tile: PixelRaster = PixelRaster::new(TILE_SIDE, TILE_SIDE, FLOOR_COLOR);
    let last: usize = TILE_SIDE - WALL_THICKNESS;
    let open: Vec<Direction> = directions_in(mask);
    let is_open = |d: Direction| open.contains(&d);

    for r in 0..TILE_SIDE {
        for c in 0..TILE_SIDE {
            let top: bool = r < WALL_THICKNESS;
            let bottom: bool = r >= last;
            let left: bool = c < WALL_THICKNESS;
            let right: bool = c >= last;

            // Corners always stay walls so that corridors keep their edges
            let wall: bool = ((top || bottom) && (left || right))
                || (top && !is_open(Direction::North))
                || (bottom && !is_open(Direction::South))
                || (left && !is_open(Direction::West))
                || (right && !is_open(Direction::East));
            if wall {
                tile.set(r, c, WALL_COLOR);
            }
        }
    }
    tile
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("mazegen-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn procedural_tiles_follow_the_mask() {
        let atlas: TileAtlas = TileAtlas::procedural();
        let closed: &PixelRaster = atlas.tile(0);
        assert_eq!(closed.get(0, 4), WALL_COLOR);
        assert_eq!(closed.get(4, 0), WALL_COLOR);
        assert_eq!(closed.get(4, 4), FLOOR_COLOR);

        let north_east: &PixelRaster = atlas.tile(0b0011);
        assert_eq!(north_east.get(0, 4), FLOOR_COLOR);
        assert_eq!(north_east.get(4, TILE_SIDE - 1), FLOOR_COLOR);
        assert_eq!(north_east.get(TILE_SIDE - 1, 4), WALL_COLOR);
        assert_eq!(north_east.get(4, 0), WALL_COLOR);
        assert_eq!(north_east.get(0, 0), WALL_COLOR);
    }

    #[test]
    fn saved_tiles_load_back() {
        let dir: PathBuf = temp_dir("tiles");
        let atlas: TileAtlas = TileAtlas::procedural();
        atlas.save(&dir).unwrap();
        assert!(dir.join("mazeBitMap15.bmp").exists());

        let loaded: TileAtlas = TileAtlas::load(&dir).unwrap();
        for mask in 0..TILE_COUNT as u8 {
            assert_eq!(loaded.tile(mask), atlas.tile(mask));
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_tile_is_reported() {
        let dir: PathBuf = temp_dir("missing");
        TileAtlas::procedural().save(&dir).unwrap();
        fs::remove_file(dir.join("mazeBitMap7.bmp")).unwrap();

        let err: Error = TileAtlas::load(&dir).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("mazeBitMap7.bmp"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn wrong_tile_size_is_rejected() {
        let dir: PathBuf = temp_dir("size");
        TileAtlas::procedural().save(&dir).unwrap();
        let big: PixelRaster = PixelRaster::new(16, 8, 0);
        codec::write_file(
            dir.join("mazeBitMap3.bmp"),
            &BitmapHeader::simple(16, 8, 24),
            &big,
        )
        .unwrap();

        let err: Error = TileAtlas::load(&dir).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_tiles_checks_the_count() {
        let tiles: Vec<PixelRaster> = vec![PixelRaster::new(TILE_SIDE, TILE_SIDE, 0); 15];
        assert!(TileAtlas::from_tiles(tiles).is_err());
        let tiles: Vec<PixelRaster> = vec![PixelRaster::new(TILE_SIDE, TILE_SIDE, 0); 16];
        assert!(TileAtlas::from_tiles(tiles).is_ok());
    }
}
