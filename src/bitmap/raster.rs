/*
raster.rs

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

//! Matrix of 24-bit RGB pixels.

/// Pixel raster.
///
/// Pixels are `0xRRGGBB` values stored row by row, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelRaster {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelRaster {
    /// Create a raster filled with the given color.
    pub fn new(width: usize, height: usize, color: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color & 0x00FF_FFFF; width * height],
        }
    }

    /// Create a raster from a list of rows, top row first.
    ///
    /// Return `None` if the rows do not all have the same length.
    pub fn from_rows(rows: &[Vec<u32>]) -> Option<Self> {
        let width: usize = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self {
            width,
            height: rows.len(),
            pixels: rows.iter().flatten().map(|p| p & 0x00FF_FFFF).collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, column: usize) -> u32 {
        self.pixels[row * self.width + column]
    }

    pub fn set(&mut self, row: usize, column: usize, color: u32) {
        self.pixels[row * self.width + column] = color & 0x00FF_FFFF;
    }

    /// Return the pixels of the given row.
    pub fn row(&self, row: usize) -> &[u32] {
        &self.pixels[row * self.width..(row + 1) * self.width]
    }

    /// Copy another raster at the given position. Pixels falling outside are ignored.
    pub fn blit(&mut self, top: usize, left: usize, source: &PixelRaster) {
        for r in 0..source.height {
            if top + r >= self.height {
                break;
            }
            let n: usize = source.width.min(self.width.saturating_sub(left));
            let start: usize = (top + r) * self.width + left;
            self.pixels[start..start + n].copy_from_slice(&source.row(r)[..n]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_requires_rectangular_input() {
        assert!(PixelRaster::from_rows(&[vec![1, 2], vec![3]]).is_none());
        let r: PixelRaster = PixelRaster::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!((r.width(), r.height()), (2, 2));
        assert_eq!(r.get(1, 0), 3);
        assert_eq!(r.row(0), &[1, 2]);
    }

    #[test]
    fn pixels_keep_24_bits() {
        let mut r: PixelRaster = PixelRaster::new(1, 1, 0xFF12_3456);
        assert_eq!(r.get(0, 0), 0x12_3456);
        r.set(0, 0, 0xAABB_CCDD);
        assert_eq!(r.get(0, 0), 0xBB_CCDD);
    }

    #[test]
    fn blit_clips_to_the_destination() {
        let mut dest: PixelRaster = PixelRaster::new(3, 3, 0);
        let src: PixelRaster = PixelRaster::new(2, 2, 7);
        dest.blit(2, 2, &src);
        assert_eq!(dest.get(2, 2), 7);
        assert_eq!(dest.get(1, 1), 0);
        assert_eq!(dest.row(2), &[0, 0, 7]);
    }
}
