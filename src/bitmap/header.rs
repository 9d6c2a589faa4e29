/*
header.rs

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

//! BMP file header and DIB header.
//!
//! The header is always 54 bytes: a 14 bytes file header followed by a 40 bytes
//! `BITMAPINFOHEADER`.
//! All the integers are little-endian.
//!
//! | Offset | Size | Field                  |
//! |--------|------|------------------------|
//! | 0      | 2    | Magic `BM`             |
//! | 2      | 4    | File size              |
//! | 6      | 4    | Reserved               |
//! | 10     | 4    | Pixel data offset      |
//! | 14     | 4    | DIB header size        |
//! | 18     | 4    | Width in pixels        |
//! | 22     | 4    | Height in pixels       |
//! | 26     | 2    | Color planes           |
//! | 28     | 2    | Bits per pixel         |
//! | 30     | 4    | Compression            |
//! | 34     | 4    | Image data size        |
//! | 38     | 4    | Horizontal resolution  |
//! | 42     | 4    | Vertical resolution    |
//! | 46     | 4    | Colors in palette      |
//! | 50     | 4    | Important colors       |
//!
//! Field values are not checked against the width of their field: sizes are computed with
//! wrapping 32-bit arithmetic, and the 2 bytes fields keep the low 16 bits of their value.

use byteorder::{ByteOrder, LittleEndian};
use std::io::{Error, ErrorKind, Result};

/// Size of the complete header in bytes, which is also the offset of the pixel data.
pub const HEADER_SIZE: usize = 54;

const MAGIC: &[u8; 2] = b"BM";
const DIB_HEADER_SIZE: u32 = 40;

/// Resolution written in both directions (2835 pixels per meter, which is 72 DPI).
pub const RESOLUTION: u32 = 0x13 | (0x0B << 8);

/// BMP header fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BitmapHeader {
    pub file_size: u32,
    pub reserved: u32,
    pub pixel_offset: u32,
    pub dib_size: u32,
    pub width: u32,
    pub height: u32,
    pub color_planes: u32,
    pub bits_per_pixel: u32,
    pub compression: u32,
    pub image_size: u32,
    pub horizontal_res: u32,
    pub vertical_res: u32,
    pub palette_colors: u32,
    pub important_colors: u32,
}

impl BitmapHeader {
    /// Create a header for an uncompressed image, with default values for the other fields.
    pub fn simple(width: u32, height: u32, bits_per_pixel: u32) -> Self {
        let image_size: u32 = width.wrapping_mul(height).wrapping_mul(bits_per_pixel) / 8;
        Self {
            file_size: image_size.wrapping_add(HEADER_SIZE as u32),
            reserved: 0,
            pixel_offset: HEADER_SIZE as u32,
            dib_size: DIB_HEADER_SIZE,
            width,
            height,
            color_planes: 1,
            bits_per_pixel,
            compression: 0,
            image_size,
            horizontal_res: RESOLUTION,
            vertical_res: RESOLUTION,
            palette_colors: 0,
            important_colors: 0,
        }
    }

    /// Pack the header into its 54 bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut b: [u8; HEADER_SIZE] = [0; HEADER_SIZE];
        b[0..2].copy_from_slice(MAGIC);
        LittleEndian::write_u32(&mut b[2..6], self.file_size);
        LittleEndian::write_u32(&mut b[6..10], self.reserved);
        LittleEndian::write_u32(&mut b[10..14], self.pixel_offset);
        LittleEndian::write_u32(&mut b[14..18], self.dib_size);
        LittleEndian::write_u32(&mut b[18..22], self.width);
        LittleEndian::write_u32(&mut b[22..26], self.height);
        LittleEndian::write_u16(&mut b[26..28], self.color_planes as u16);
        LittleEndian::write_u16(&mut b[28..30], self.bits_per_pixel as u16);
        LittleEndian::write_u32(&mut b[30..34], self.compression);
        LittleEndian::write_u32(&mut b[34..38], self.image_size);
        LittleEndian::write_u32(&mut b[38..42], self.horizontal_res);
        LittleEndian::write_u32(&mut b[42..46], self.vertical_res);
        LittleEndian::write_u32(&mut b[46..50], self.palette_colors);
        LittleEndian::write_u32(&mut b[50..54], self.important_colors);
        b
    }

    /// Read a header from the beginning of a BMP file.
    ///
    /// # Errors
    ///
    /// The function returns an [`ErrorKind::InvalidData`] error if the data is shorter than a
    /// header or does not start with the `BM` magic.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("BMP data too short for a header: {} bytes", data.len()),
            ));
        }
        if data[0..2] != MAGIC[..] {
            return Err(Error::new(ErrorKind::InvalidData, "Not a BMP file (bad magic)"));
        }
        Ok(Self {
            file_size: LittleEndian::read_u32(&data[2..6]),
            reserved: LittleEndian::read_u32(&data[6..10]),
            pixel_offset: LittleEndian::read_u32(&data[10..14]),
            dib_size: LittleEndian::read_u32(&data[14..18]),
            width: LittleEndian::read_u32(&data[18..22]),
            height: LittleEndian::read_u32(&data[22..26]),
            color_planes: LittleEndian::read_u16(&data[26..28]) as u32,
            bits_per_pixel: LittleEndian::read_u16(&data[28..30]) as u32,
            compression: LittleEndian::read_u32(&data[30..34]),
            image_size: LittleEndian::read_u32(&data[34..38]),
            horizontal_res: LittleEndian::read_u32(&data[38..42]),
            vertical_res: LittleEndian::read_u32(&data[42..46]),
            palette_colors: LittleEndian::read_u32(&data[46..50]),
            important_colors: LittleEndian::read_u32(&data[50..54]),
        })
    }
}

/// Return the 54 bytes header for an uncompressed image.
pub fn encode_header(width: u32, height: u32, bits_per_pixel: u32) -> [u8; HEADER_SIZE] {
    BitmapHeader::simple(width, height, bits_per_pixel).to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        let b: [u8; HEADER_SIZE] = encode_header(16, 8, 24);
        assert_eq!(&b[0..2], b"BM");
        assert_eq!(&b[2..6], &(54u32 + 16 * 8 * 3).to_le_bytes());
        assert_eq!(&b[6..10], &[0, 0, 0, 0]);
        assert_eq!(&b[10..14], &[54, 0, 0, 0]);
        assert_eq!(&b[14..18], &[40, 0, 0, 0]);
        assert_eq!(&b[18..22], &[16, 0, 0, 0]);
        assert_eq!(&b[22..26], &[8, 0, 0, 0]);
        assert_eq!(&b[26..28], &[1, 0]);
        assert_eq!(&b[28..30], &[24, 0]);
        assert_eq!(&b[30..34], &[0, 0, 0, 0]);
        assert_eq!(&b[34..38], &(16u32 * 8 * 3).to_le_bytes());
        assert_eq!(&b[38..42], &[0x13, 0x0B, 0, 0]);
        assert_eq!(&b[42..46], &[0x13, 0x0B, 0, 0]);
        assert_eq!(&b[46..54], &[0; 8]);
    }

    #[test]
    fn two_bytes_fields_are_truncated() {
        let h: BitmapHeader = BitmapHeader::simple(1, 1, 0x1_0018);
        let b: [u8; HEADER_SIZE] = h.to_bytes();
        assert_eq!(&b[28..30], &[0x18, 0]);
    }

    #[test]
    fn sizes_wrap_around() {
        let h: BitmapHeader = BitmapHeader::simple(0x1_0000, 0x1_0000, 24);
        assert_eq!(h.image_size, 0);
        assert_eq!(h.file_size, 54);
    }

    #[test]
    fn parse_reads_back_the_fields() {
        let h: BitmapHeader = BitmapHeader::simple(24, 40, 24);
        assert_eq!(BitmapHeader::parse(&h.to_bytes()).unwrap(), h);
    }

    #[test]
    fn parse_rejects_bad_data() {
        let err: Error = BitmapHeader::parse(&[b'B', b'M', 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let mut b: [u8; HEADER_SIZE] = encode_header(8, 8, 24);
        b[0] = b'X';
        assert_eq!(
            BitmapHeader::parse(&b).unwrap_err().kind(),
            ErrorKind::InvalidData
        );
    }
}
