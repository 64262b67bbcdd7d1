use crate::strip::CleanImage;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ImageEncoder as _;
use scrubpng_common::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// PNG encoding settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngOptions {
    /// oxipng preset, 0 (fast) to 6 (smallest)
    pub level: u8,
}

impl PngOptions {
    pub const MAX_LEVEL: u8 = 6;

    pub fn with_level(level: u8) -> Self {
        Self {
            level: level.min(Self::MAX_LEVEL),
        }
    }
}

impl Default for PngOptions {
    fn default() -> Self {
        Self { level: 2 }
    }
}

/// Lossless PNG encoder that never emits ancillary chunks
pub struct ImageEncoder;

impl ImageEncoder {
    /// Encode to an in-memory PNG
    pub fn encode_png(img: &CleanImage, options: &PngOptions) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut buffer,
            CompressionType::Best,
            FilterType::Adaptive,
        );
        encoder.write_image(
            img.as_bytes(),
            img.width(),
            img.height(),
            img.mode().color_type().into(),
        )?;

        // Colour type and bit depth stay as the stripper chose them
        let mut oxi = oxipng::Options::from_preset(options.level);
        oxi.strip = oxipng::StripChunks::All;
        oxi.bit_depth_reduction = false;
        oxi.color_type_reduction = false;
        oxi.palette_reduction = false;
        oxi.grayscale_reduction = false;

        let optimized = oxipng::optimize_from_memory(&buffer, &oxi)
            .map_err(|e| Error::EncodeError(format!("PNG optimization failed: {}", e)))?;

        tracing::debug!(
            "PNG level {}: {} → {} bytes",
            options.level,
            buffer.len(),
            optimized.len()
        );

        Ok(optimized)
    }

    /// Encode and write to `output_path`.
    ///
    /// Bytes land in a temporary file beside the target first, which is then
    /// renamed into place. An existing file at `output_path` is never
    /// replaced, and nothing is left behind when any step fails.
    pub fn write_png(img: &CleanImage, output_path: &Path, options: &PngOptions) -> Result<()> {
        let data = Self::encode_png(img, options)?;

        let dir = output_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(&data)?;
        temp.flush()?;
        temp.persist_noclobber(output_path)
            .map_err(|e| Error::Io(e.error))?;

        tracing::info!("Successfully encoded to {:?}", output_path);
        Ok(())
    }
}
