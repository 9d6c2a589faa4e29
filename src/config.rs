/*
config.rs

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

//! Build-time settings shared by the library and the command-line driver.

pub const PKGNAME: &str = "mazegen";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl.html>\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

/// Number of pixels on each side of a maze tile.
pub const TILE_SIDE: usize = 8;

/// Color depth of the tiles and of the rendered maze, in bits.
pub const COLOR_DEPTH: u16 = 24;

/// Tile asset files are named `<prefix><mask>.bmp`, with `<mask>` from 0 to 15.
pub const TILE_FILE_PREFIX: &str = "mazeBitMap";
pub const TILE_FILE_SUFFIX: &str = ".bmp";

/// Default path of the rendered maze.
pub const DEFAULT_OUTPUT: &str = "maze.bmp";

/// Colors of the built-in tiles, as `0xRRGGBB` values.
pub const WALL_COLOR: u32 = 0x00_20_20_20;
pub const FLOOR_COLOR: u32 = 0x00_F0_F0_F0;
pub const PATH_COLOR: u32 = 0x00_30_C0_30;

/// Width of the walls drawn on the built-in tiles, in pixels.
pub const WALL_THICKNESS: usize = 1;
