use crate::decoded::{ColorMode, DecodedImage};
use scrubpng_common::SourceFormat;

/// Summary of a decoded image, used for logging
#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: Option<SourceFormat>,
    pub color_mode: ColorMode,
    pub file_size: u64,
}

impl ImageInfo {
    pub fn of(image: &DecodedImage, file_size: u64) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            format: image.format(),
            color_mode: image.color_mode(),
            file_size,
        }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Size of the 8-bit RGBA buffer this image needs after stripping, at most
    pub fn estimated_memory_mb(&self) -> f32 {
        let bytes = self.pixel_count() * 4;
        bytes as f32 / (1024.0 * 1024.0)
    }
}
