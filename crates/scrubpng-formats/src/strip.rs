//! Metadata stripping.
//!
//! A [`CleanImage`] is rebuilt from the raw pixel sequence of a
//! [`DecodedImage`] inside a freshly allocated buffer. Nothing besides the
//! pixels crosses over: no EXIF, ICC profile, text chunk or orientation tag.

use crate::decoded::{DecodedImage, Pixels};
use image::{ColorType, DynamicImage, ImageBuffer, LumaA, Pixel, Rgb, Rgba};

/// Colour layouts a clean image may have, all 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    Rgb,
    Rgba,
    LumaAlpha,
}

impl CleanMode {
    pub fn color_type(&self) -> ColorType {
        match self {
            Self::Rgb => ColorType::Rgb8,
            Self::Rgba => ColorType::Rgba8,
            Self::LumaAlpha => ColorType::La8,
        }
    }
}

/// Pixel-only image, ready to be encoded
#[derive(Debug, Clone)]
pub struct CleanImage {
    image: DynamicImage,
    mode: CleanMode,
}

impl CleanImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn mode(&self) -> CleanMode {
        self.mode
    }

    /// Raw samples, row-major, no padding
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_bytes()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }
}

/// Drop everything but pixel data.
///
/// Target mode, first match wins:
/// RGBA stays RGBA, grey+alpha stays LA, palette expands to RGBA so
/// transparent entries keep alpha, everything else becomes RGB.
pub fn strip(image: DecodedImage) -> CleanImage {
    let (width, height) = (image.width(), image.height());

    match image.into_pixels() {
        Pixels::Indexed(indexed) => {
            let samples = indexed.expand_rgba();
            rebuild::<Rgba<u8>>(width, height, &samples, CleanMode::Rgba)
        }
        Pixels::Expanded(dynamic) => {
            let buffer = dynamic.into_rgba8();
            rebuild::<Rgba<u8>>(width, height, buffer.as_raw(), CleanMode::Rgba)
        }
        Pixels::Direct(dynamic) => match dynamic.color() {
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => {
                let buffer = dynamic.into_rgba8();
                rebuild::<Rgba<u8>>(width, height, buffer.as_raw(), CleanMode::Rgba)
            }
            ColorType::La8 | ColorType::La16 => {
                let buffer = dynamic.into_luma_alpha8();
                rebuild::<LumaA<u8>>(width, height, buffer.as_raw(), CleanMode::LumaAlpha)
            }
            _ => {
                let buffer = dynamic.into_rgb8();
                rebuild::<Rgb<u8>>(width, height, buffer.as_raw(), CleanMode::Rgb)
            }
        },
    }
}

/// Allocate a new container and copy the samples in, row-major
fn rebuild<P>(width: u32, height: u32, samples: &[u8], mode: CleanMode) -> CleanImage
where
    P: Pixel<Subpixel = u8>,
    DynamicImage: From<ImageBuffer<P, Vec<u8>>>,
{
    let mut fresh: ImageBuffer<P, Vec<u8>> = ImageBuffer::new(width, height);
    fresh.copy_from_slice(samples);

    tracing::debug!("Rebuilt {}x{} image as {:?}", width, height, mode);

    CleanImage {
        image: DynamicImage::from(fresh),
        mode,
    }
}
