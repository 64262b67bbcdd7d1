//! Fixture builders shared by the integration tests.
#![allow(dead_code)]

use image::{DynamicImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

pub const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= b as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

fn adler32(bytes: &[u8]) -> u32 {
    let (mut a, mut b) = (1u32, 0u32);
    for &byte in bytes {
        a = (a + byte as u32) % 65521;
        b = (b + a) % 65521;
    }
    (b << 16) | a
}

/// A complete PNG chunk: length, type, data, CRC
pub fn chunk(kind: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(12 + data.len());
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);

    let mut crc_input = kind.to_vec();
    crc_input.extend_from_slice(data);
    out.extend_from_slice(&crc32(&crc_input).to_be_bytes());
    out
}

/// zlib stream made of stored (uncompressed) deflate blocks
fn stored_zlib(data: &[u8]) -> Vec<u8> {
    let mut out = vec![0x78, 0x01];
    let mut blocks = data.chunks(65_535).peekable();
    if blocks.peek().is_none() {
        out.extend_from_slice(&[1, 0, 0, 0xFF, 0xFF]);
    }
    while let Some(block) = blocks.next() {
        let last = blocks.peek().is_none();
        out.push(u8::from(last));
        let len = block.len() as u16;
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(block);
    }
    out.extend_from_slice(&adler32(data).to_be_bytes());
    out
}

/// Chunk types of a PNG file, in order
pub fn chunk_types(png: &[u8]) -> Vec<String> {
    assert_eq!(&png[..8], PNG_SIGNATURE, "not a PNG");
    let mut types = Vec::new();
    let mut pos = 8;
    while pos + 8 <= png.len() {
        let len = u32::from_be_bytes([png[pos], png[pos + 1], png[pos + 2], png[pos + 3]]) as usize;
        types.push(String::from_utf8_lossy(&png[pos + 4..pos + 8]).into_owned());
        pos += 12 + len;
    }
    types
}

pub fn assert_only_critical_chunks(png: &[u8]) {
    for kind in chunk_types(png) {
        assert!(
            matches!(kind.as_str(), "IHDR" | "IDAT" | "IEND"),
            "ancillary chunk {kind} survived"
        );
    }
}

/// Insert extra chunks right after IHDR
pub fn with_extra_chunks(png: &[u8], extra: &[Vec<u8>]) -> Vec<u8> {
    let after_ihdr = 8 + 12 + 13;
    let mut out = png[..after_ihdr].to_vec();
    for c in extra {
        out.extend_from_slice(c);
    }
    out.extend_from_slice(&png[after_ihdr..]);
    out
}

/// 8-bit palette PNG with an optional tRNS chunk
pub fn indexed_png(
    width: u32,
    height: u32,
    palette: &[[u8; 3]],
    alphas: &[u8],
    indices: &[u8],
) -> Vec<u8> {
    assert_eq!(indices.len(), (width * height) as usize);

    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 3, 0, 0, 0]);

    let plte: Vec<u8> = palette.iter().flatten().copied().collect();

    let mut raw = Vec::new();
    for row in indices.chunks(width as usize) {
        raw.push(0); // filter: none
        raw.extend_from_slice(row);
    }

    let mut png = PNG_SIGNATURE.to_vec();
    png.extend(chunk(b"IHDR", &ihdr));
    png.extend(chunk(b"PLTE", &plte));
    if !alphas.is_empty() {
        png.extend(chunk(b"tRNS", alphas));
    }
    png.extend(chunk(b"IDAT", &stored_zlib(&raw)));
    png.extend(chunk(b"IEND", &[]));
    png
}

/// Bottom-up 8-bit palette BMP with a BITMAPINFOHEADER
pub fn indexed_bmp(width: u32, height: u32, palette: &[[u8; 3]], indices: &[u8]) -> Vec<u8> {
    assert_eq!(indices.len(), (width * height) as usize);

    let row_len = (width as usize).div_ceil(4) * 4;
    let pixel_offset = 14 + 40 + 4 * palette.len();
    let file_size = pixel_offset + row_len * height as usize;

    let mut bmp = b"BM".to_vec();
    bmp.extend_from_slice(&(file_size as u32).to_le_bytes());
    bmp.extend_from_slice(&[0; 4]);
    bmp.extend_from_slice(&(pixel_offset as u32).to_le_bytes());

    bmp.extend_from_slice(&40u32.to_le_bytes());
    bmp.extend_from_slice(&(width as i32).to_le_bytes());
    bmp.extend_from_slice(&(height as i32).to_le_bytes());
    bmp.extend_from_slice(&1u16.to_le_bytes());
    bmp.extend_from_slice(&8u16.to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    bmp.extend_from_slice(&0u32.to_le_bytes());
    bmp.extend_from_slice(&2835i32.to_le_bytes());
    bmp.extend_from_slice(&2835i32.to_le_bytes());
    bmp.extend_from_slice(&(palette.len() as u32).to_le_bytes());
    bmp.extend_from_slice(&0u32.to_le_bytes());

    for [r, g, b] in palette {
        bmp.extend_from_slice(&[*b, *g, *r, 0]);
    }

    for row in indices.chunks(width as usize).rev() {
        bmp.extend_from_slice(row);
        bmp.resize(bmp.len() + row_len - row.len(), 0);
    }
    bmp
}

/// Minimal big-endian EXIF block with an empty IFD
pub fn exif_payload() -> Vec<u8> {
    let mut exif = b"Exif\0\0".to_vec();
    exif.extend_from_slice(b"MM\0\x2a\0\0\0\x08");
    exif.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    exif
}

/// Insert an APP1/EXIF segment right after SOI
pub fn jpeg_with_exif(jpeg: &[u8]) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    let payload = exif_payload();
    let seg_len = (payload.len() + 2) as u16;

    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&seg_len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}

pub fn gradient_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
            if (x + y) % 3 == 0 { 0 } else { 255 - (x % 128) as u8 },
        ])
    })
}

/// Save a small opaque image with the format implied by `name`
pub fn write_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let img = image::RgbImage::from_fn(12, 9, |x, y| image::Rgb([x as u8 * 20, y as u8 * 25, 128]));
    DynamicImage::ImageRgb8(img).save(&path).unwrap();
    path
}

pub fn png_files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|e| e == "png"))
        .collect();
    files.sort();
    files
}
