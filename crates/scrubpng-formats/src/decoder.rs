use crate::decoded::DecodedImage;
use crate::info::ImageInfo;
use crate::palette;
use image::{DynamicImage, ImageReader};
use memmap2::Mmap;
use scrubpng_common::{Result, SourceFormat};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

const TEN_MB_IN_BYTES: u64 = 10 * 1024 * 1024;

/// Image decoder with memory-mapped I/O for large inputs
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode the image at `path`.
    ///
    /// The container format is guessed from the file contents, so a PNG saved
    /// as `.jpg` still decodes. Deciding whether a file may be converted at all
    /// is left to the caller's extension check.
    pub fn decode(path: &Path) -> Result<DecodedImage> {
        let format = SourceFormat::from_path(path);
        tracing::debug!("Decoding {:?} from {:?}", format, path);

        let file = File::open(path)?;
        let file_size = file.metadata()?.len();

        let (img, from_palette) = if file_size > TEN_MB_IN_BYTES {
            tracing::debug!("Using memory-mapped I/O for large file");
            // SAFETY: the map is read-only and dropped before this function
            // returns. Truncation by another process while decoding would
            // fault, same as for any mmap reader.
            let mmap = unsafe { Mmap::map(&file)? };
            Self::decode_from(Cursor::new(&mmap[..]), format)?
        } else {
            Self::decode_from(BufReader::new(file), format)?
        };

        let decoded = if from_palette {
            DecodedImage::from_expanded_palette(img, format)
        } else {
            DecodedImage::new(img, format)
        };
        let info = ImageInfo::of(&decoded, file_size);

        tracing::info!(
            "Decoded {:?} {}x{} {:?} image, {} bytes on disk ({:.2}MB in memory)",
            info.format,
            info.width,
            info.height,
            info.color_mode,
            info.file_size,
            info.estimated_memory_mb()
        );

        Ok(decoded)
    }

    /// Sniff the container from its magic bytes, falling back to the
    /// extension-derived format when the bytes are not recognised.
    /// Also reports whether the source was palette-indexed.
    fn decode_from<R: BufRead + Seek>(
        mut reader: R,
        fallback: Option<SourceFormat>,
    ) -> Result<(DynamicImage, bool)> {
        let from_palette = palette::is_palette_source(&mut reader)?;

        let mut reader = ImageReader::new(reader).with_guessed_format()?;
        if reader.format().is_none() {
            if let Some(format) = fallback {
                reader.set_format(format.to_image_format());
            }
        }
        Ok((reader.decode()?, from_palette))
    }
}
