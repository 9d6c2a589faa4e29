/*
codec.rs

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

//! Read and write 24-bit BMP files.
//!
//! The pixel data follows the header.
//! Rows are stored from the bottom of the image to the top, and each pixel is stored as the
//! three low bytes of its `0xRRGGBB` value in little-endian order (blue, green, red).
//!
//! Rows are not padded to a multiple of four bytes.
//! Images whose width is a multiple of four pixels are therefore standard BMP files; for other
//! widths, only this module reads the files back correctly.

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Error, ErrorKind, Result, Write};
use std::path::Path;

use super::header::{BitmapHeader, HEADER_SIZE};
use super::raster::PixelRaster;

/// The only color depth supported for pixel data.
pub const BITS_PER_PIXEL: u32 = 24;
const BYTES_PER_PIXEL: usize = 3;

/// Write the header and the pixel data to the given writer.
///
/// # Errors
///
/// The function returns an [`ErrorKind::InvalidInput`] error when the header does not describe
/// a 24-bit image of the size of the raster, and forwards the errors of the writer.
pub fn write_to<W: Write>(writer: &mut W, header: &BitmapHeader, raster: &PixelRaster) -> Result<()> {
    if header.bits_per_pixel != BITS_PER_PIXEL {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("Unsupported color depth: {} bits", header.bits_per_pixel),
        ));
    }
    if header.width as usize != raster.width() || header.height as usize != raster.height() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!(
                "Header size {}x{} does not match the raster size {}x{}",
                header.width,
                header.height,
                raster.width(),
                raster.height()
            ),
        ));
    }

    writer.write_all(&header.to_bytes())?;
    for row in (0..raster.height()).rev() {
        for pixel in raster.row(row) {
            writer.write_u24::<LittleEndian>(*pixel)?;
        }
    }
    Ok(())
}

/// Return the complete BMP file for the raster.
pub fn encode(raster: &PixelRaster) -> Result<Vec<u8>> {
    let header: BitmapHeader =
        BitmapHeader::simple(raster.width() as u32, raster.height() as u32, BITS_PER_PIXEL);
    let mut data: Vec<u8> =
        Vec::with_capacity(HEADER_SIZE + raster.width() * raster.height() * BYTES_PER_PIXEL);
    write_to(&mut data, &header, raster)?;
    Ok(data)
}

/// Write the BMP file.
///
/// The file is created or truncated. It is closed when the function returns, including on
/// errors.
pub fn write_file<P: AsRef<Path>>(path: P, header: &BitmapHeader, raster: &PixelRaster) -> Result<()> {
    let path: &Path = path.as_ref();
    if (raster.width() * BYTES_PER_PIXEL) % 4 != 0 {
        warn!(
            "{}: rows of {} pixels are not aligned on 4 bytes; some readers may reject the file",
            path.display(),
            raster.width()
        );
    }
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);
    write_to(&mut writer, header, raster)?;
    writer.flush()?;
    debug!(
        "Wrote {} ({}x{} pixels, {} bytes)",
        path.display(),
        raster.width(),
        raster.height(),
        header.file_size
    );
    Ok(())
}

/// Decode a 24-bit BMP file.
///
/// # Errors
///
/// The function returns an [`ErrorKind::InvalidData`] error if the header is invalid, if the
/// image is not a 24-bit image, or if the pixel data is truncated.
pub fn decode(data: &[u8]) -> Result<PixelRaster> {
    let header: BitmapHeader = BitmapHeader::parse(data)?;
    if header.bits_per_pixel != BITS_PER_PIXEL {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("Unsupported color depth: {} bits", header.bits_per_pixel),
        ));
    }

    let width: usize = header.width as usize;
    let height: usize = header.height as usize;
    let offset: usize = header.pixel_offset as usize;
    let Some((stride, needed)) = width
        .checked_mul(BYTES_PER_PIXEL)
        .and_then(|stride| Some((stride, stride.checked_mul(height)?.checked_add(offset)?)))
    else {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("Image size out of range: {width}x{height} pixels"),
        ));
    };
    if data.len() < needed {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "Truncated pixel data: {} bytes instead of at least {needed}",
                data.len()
            ),
        ));
    }

    let mut raster: PixelRaster = PixelRaster::new(width, height, 0);
    for file_row in 0..height {
        let start: usize = offset + file_row * stride;
        let row: usize = height - 1 - file_row;
        for column in 0..width {
            let p: usize = start + column * BYTES_PER_PIXEL;
            raster.set(row, column, LittleEndian::read_u24(&data[p..p + BYTES_PER_PIXEL]));
        }
    }
    Ok(raster)
}

/// Read and decode a 24-bit BMP file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<PixelRaster> {
    let data: Vec<u8> = fs::read(path)?;
    decode(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    const RED: u32 = 0xFF_0000;

    #[test]
    fn oversized_header_is_rejected() {
        let mut header: BitmapHeader = BitmapHeader::simple(8, 8, 24);
        header.width = u32::MAX;
        header.height = u32::MAX;
        let mut data: Vec<u8> = header.to_bytes().to_vec();
        data.extend(vec![0u8; 8 * 8 * 3]);

        let err: Error = decode(&data).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn solid_red_two_by_two() {
        let raster: PixelRaster = PixelRaster::new(2, 2, RED);
        let data: Vec<u8> = encode(&raster).unwrap();

        assert_eq!(data.len(), 66);
        let header: BitmapHeader = BitmapHeader::parse(&data).unwrap();
        assert_eq!(header.file_size, 66);
        assert_eq!(header.pixel_offset, 54);
        assert_eq!(header.image_size, 12);
        assert_eq!(&data[54..], &[0x00u8, 0x00, 0xFF].repeat(4)[..]);

        assert_eq!(decode(&data).unwrap(), raster);
    }

    #[test]
    fn rows_are_stored_bottom_to_top() {
        let raster: PixelRaster =
            PixelRaster::from_rows(&[vec![0x01_0203, 0x04_0506], vec![0x0A_0B0C, 0x0D_0E0F]])
                .unwrap();
        let data: Vec<u8> = encode(&raster).unwrap();
        assert_eq!(
            &data[54..],
            &[0x0C, 0x0B, 0x0A, 0x0F, 0x0E, 0x0D, 0x03, 0x02, 0x01, 0x06, 0x05, 0x04]
        );
        assert_eq!(decode(&data).unwrap(), raster);
    }

    #[test]
    fn header_must_match_the_raster() {
        let raster: PixelRaster = PixelRaster::new(2, 2, 0);
        let mut sink: Vec<u8> = Vec::new();
        let wrong_size: BitmapHeader = BitmapHeader::simple(3, 2, 24);
        assert_eq!(
            write_to(&mut sink, &wrong_size, &raster).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        let wrong_depth: BitmapHeader = BitmapHeader::simple(2, 2, 32);
        assert_eq!(
            write_to(&mut sink, &wrong_depth, &raster).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn truncated_data_is_rejected() {
        let data: Vec<u8> = encode(&PixelRaster::new(4, 4, RED)).unwrap();
        assert_eq!(
            decode(&data[..data.len() - 1]).unwrap_err().kind(),
            ErrorKind::InvalidData
        );
    }

    #[test]
    fn file_round_trip() {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("mazegen-codec-{}.bmp", std::process::id()));
        let raster: PixelRaster = PixelRaster::new(8, 4, 0x12_3456);
        let header: BitmapHeader = BitmapHeader::simple(8, 4, 24);
        write_file(&path, &header, &raster).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 54 + 8 * 4 * 3);
        assert_eq!(read_file(&path).unwrap(), raster);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let mut path: PathBuf = env::temp_dir();
        path.push("mazegen-no-such-directory");
        path.push("out.bmp");
        let raster: PixelRaster = PixelRaster::new(4, 4, 0);
        let header: BitmapHeader = BitmapHeader::simple(4, 4, 24);
        assert!(write_file(&path, &header, &raster).is_err());
    }
}
