//! Palette detection from container headers.
//!
//! The `image` decoders look palette entries up on the fly and hand back
//! plain RGB or RGBA buffers, so whether a source was palette-indexed has to
//! be read from the file itself before decoding.

use std::io::{self, Read, Seek, SeekFrom};

const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";
const PNG_PALETTE_COLOR_TYPE: u8 = 3;

const BMP_CORE_HEADER_SIZE: u32 = 12;
const BMP_MAX_PALETTE_BITS: u16 = 8;

const TIFF_PHOTOMETRIC_TAG: u16 = 262;
const TIFF_PHOTOMETRIC_PALETTE: u16 = 3;
const TIFF_MAX_IFD_ENTRIES: u16 = 4096;

const HEADER_LEN: u64 = 32;

/// Whether the stream holds a palette-indexed PNG, GIF, BMP or TIFF.
///
/// The stream position is restored before returning. Headers that cannot be
/// read count as "not a palette", leaving the real error to the decoder.
pub(crate) fn is_palette_source<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let start = reader.stream_position()?;

    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    reader.by_ref().take(HEADER_LEN).read_to_end(&mut header)?;

    let palette = if header.starts_with(PNG_SIGNATURE) {
        header.len() > 25 && &header[12..16] == b"IHDR" && header[25] == PNG_PALETTE_COLOR_TYPE
    } else if header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a") {
        true
    } else if header.starts_with(b"BM") {
        bmp_bit_count(&header).is_some_and(|bits| bits <= BMP_MAX_PALETTE_BITS)
    } else if header.starts_with(b"II*\0") || header.starts_with(b"MM\0*") {
        tiff_photometric(reader, start, &header).ok().flatten() == Some(TIFF_PHOTOMETRIC_PALETTE)
    } else {
        false
    };

    reader.seek(SeekFrom::Start(start))?;
    Ok(palette)
}

/// Bits per pixel from the DIB header, which follows the 14-byte file header
fn bmp_bit_count(header: &[u8]) -> Option<u16> {
    let dib_size = u32::from_le_bytes([
        *header.get(14)?,
        *header.get(15)?,
        *header.get(16)?,
        *header.get(17)?,
    ]);
    let at = if dib_size == BMP_CORE_HEADER_SIZE { 24 } else { 28 };
    Some(u16::from_le_bytes([*header.get(at)?, *header.get(at + 1)?]))
}

/// PhotometricInterpretation of the first IFD, if present
fn tiff_photometric<R: Read + Seek>(
    reader: &mut R,
    start: u64,
    header: &[u8],
) -> io::Result<Option<u16>> {
    if header.len() < 8 {
        return Ok(None);
    }
    let little = header[0] == b'I';
    let ifd_offset = tiff_u32([header[4], header[5], header[6], header[7]], little);

    reader.seek(SeekFrom::Start(start + u64::from(ifd_offset)))?;
    let mut count = [0u8; 2];
    reader.read_exact(&mut count)?;

    for _ in 0..tiff_u16(count, little).min(TIFF_MAX_IFD_ENTRIES) {
        let mut entry = [0u8; 12];
        reader.read_exact(&mut entry)?;
        if tiff_u16([entry[0], entry[1]], little) == TIFF_PHOTOMETRIC_TAG {
            return Ok(Some(tiff_u16([entry[8], entry[9]], little)));
        }
    }

    Ok(None)
}

fn tiff_u16(bytes: [u8; 2], little: bool) -> u16 {
    if little {
        u16::from_le_bytes(bytes)
    } else {
        u16::from_be_bytes(bytes)
    }
}

fn tiff_u32(bytes: [u8; 4], little: bool) -> u32 {
    if little {
        u32::from_le_bytes(bytes)
    } else {
        u32::from_be_bytes(bytes)
    }
}
