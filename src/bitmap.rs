/*
bitmap.rs

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

//! Uncompressed 24-bit BMP images.
//!
//! This module does not know anything about mazes.
//! [`raster::PixelRaster`] holds the pixels, [`header::BitmapHeader`] packs the 54 bytes
//! header, and [`codec`] writes and reads complete files.

pub mod codec;
pub mod header;
pub mod raster;
