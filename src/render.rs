/*
render.rs

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

//! Draw mazes as BMP images.
//!
//! [`rasterizer::MazeRasterizer`] copies one tile per maze cell into a
//! [`crate::bitmap::raster::PixelRaster`] and writes the result with [`crate::bitmap::codec`].
//! The tiles come from any [`tiles::TileSource`]; [`tiles::TileAtlas`] loads them from BMP files
//! or draws them.

pub mod rasterizer;
pub mod tiles;
