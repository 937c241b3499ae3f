//! PNG encoding for RGB canvases.
//!
//! Supports two encoding modes:
//! - **Indexed PNG (color type 3)**: Used when the canvas has ≤256 unique
//!   colors, which every swatch does.
//! - **RGB PNG (color type 2)**: Fallback for canvases with >256 colors.
//!
//! Output carries no timestamps or text chunks, so the same canvas always
//! encodes to the same bytes.

use std::collections::HashMap;
use std::io::Write;

use image::RgbImage;
use palette_common::{PaletteError, PaletteResult};

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Encode a canvas as PNG, choosing indexed color when it fits.
pub fn encode_png(img: &RgbImage) -> PaletteResult<Vec<u8>> {
    let (width, height) = checked_dimensions(img)?;

    match extract_palette(img.as_raw()) {
        Some((palette, indices)) => create_png_indexed(width, height, &palette, &indices),
        None => create_png_rgb(img.as_raw(), width, height),
    }
}

/// Encode a canvas as truecolor RGB PNG regardless of its color count.
pub fn encode_png_rgb(img: &RgbImage) -> PaletteResult<Vec<u8>> {
    let (width, height) = checked_dimensions(img)?;
    create_png_rgb(img.as_raw(), width, height)
}

/// PNG has no representation for an empty image.
fn checked_dimensions(img: &RgbImage) -> PaletteResult<(u32, u32)> {
    match img.dimensions() {
        (0, _) | (_, 0) => Err(PaletteError::Encode(format!(
            "cannot encode empty {}x{} image",
            img.width(),
            img.height()
        ))),
        dims => Ok(dims),
    }
}

/// Pack RGB bytes into a u32 for faster hashing
#[inline(always)]
fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

/// Build a palette in first-seen order plus one index per pixel.
///
/// Returns `None` as soon as a 257th color shows up.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<[u8; 3]>, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<[u8; 3]> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 3);

    for chunk in pixels.chunks_exact(3) {
        let packed = pack_color(chunk[0], chunk[1], chunk[2]);

        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push([chunk[0], chunk[1], chunk[2]]);
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Create an indexed PNG (color type 3) from palette and indices.
fn create_png_indexed(
    width: u32,
    height: u32,
    palette: &[[u8; 3]],
    indices: &[u8],
) -> PaletteResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let plte_data: Vec<u8> = palette.iter().flatten().copied().collect();
    write_chunk(&mut png, b"PLTE", &plte_data);

    // 1 byte per pixel
    let idat_data = deflate_scanlines(indices, width as usize, height as usize)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Create a truecolor PNG (color type 2) from packed RGB pixels.
fn create_png_rgb(pixels: &[u8], width: u32, height: u32) -> PaletteResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 2));

    let idat_data = deflate_scanlines(pixels, width as usize * 3, height as usize)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// IHDR payload: 8-bit depth, default compression and filter, no interlace.
fn ihdr(width: u32, height: u32, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Write a PNG chunk
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    // CRC covers type and data, not length
    let crc_data = [chunk_type.as_slice(), data].concat();
    let crc = crc32_checksum(&crc_data);
    png.extend_from_slice(&crc.to_be_bytes());
}

/// Deflate scanlines for the IDAT chunk, prefixing each row with filter 0.
fn deflate_scanlines(data: &[u8], row_bytes: usize, height: usize) -> PaletteResult<Vec<u8>> {
    let mut uncompressed = Vec::with_capacity(height * (1 + row_bytes));
    for row in data.chunks_exact(row_bytes).take(height) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&uncompressed)
        .map_err(|e| PaletteError::Encode(format!("IDAT compression failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| PaletteError::Encode(format!("IDAT compression failed: {}", e)))
}

/// Simple CRC32 checksum (PNG-style)
fn crc32_checksum(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}
