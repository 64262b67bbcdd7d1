use image::DynamicImage;
use scrubpng_common::SourceFormat;

/// Colour layout of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
    /// Greyscale with alpha
    LumaAlpha,
    /// Indices into a colour lookup table
    Indexed,
    /// Greyscale without alpha
    Luma,
    /// Anything else a decoder may yield
    Other,
}

impl ColorMode {
    fn of(image: &DynamicImage) -> Self {
        match image {
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgb32F(_) => {
                Self::Rgb
            }
            DynamicImage::ImageRgba8(_)
            | DynamicImage::ImageRgba16(_)
            | DynamicImage::ImageRgba32F(_) => Self::Rgba,
            DynamicImage::ImageLumaA8(_) | DynamicImage::ImageLumaA16(_) => Self::LumaAlpha,
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageLuma16(_) => Self::Luma,
            _ => Self::Other,
        }
    }
}

/// Palette-indexed pixel data. Palette entries are straight RGBA.
#[derive(Debug, Clone)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    indices: Vec<u8>,
    palette: Vec<[u8; 4]>,
}

impl IndexedImage {
    /// Returns `None` when `indices` does not hold exactly `width * height` entries.
    pub fn new(width: u32, height: u32, indices: Vec<u8>, palette: Vec<[u8; 4]>) -> Option<Self> {
        if indices.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            indices,
            palette,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Look up every index, row-major. Indices past the end of the palette
    /// become transparent black.
    pub fn expand_rgba(&self) -> Vec<u8> {
        self.indices
            .iter()
            .flat_map(|&i| {
                self.palette
                    .get(i as usize)
                    .copied()
                    .unwrap_or([0, 0, 0, 0])
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Pixels {
    Direct(DynamicImage),
    Indexed(IndexedImage),
    /// Palette source whose entries the decoder already looked up
    Expanded(DynamicImage),
}

/// An image as it came out of a decoder, before any metadata is dropped
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pixels: Pixels,
    format: Option<SourceFormat>,
}

impl DecodedImage {
    pub fn new(image: DynamicImage, format: Option<SourceFormat>) -> Self {
        Self {
            pixels: Pixels::Direct(image),
            format,
        }
    }

    pub fn from_indexed(image: IndexedImage, format: Option<SourceFormat>) -> Self {
        Self {
            pixels: Pixels::Indexed(image),
            format,
        }
    }

    /// A palette-indexed source that a decoder has already expanded to
    /// literal colours. It still counts as [`ColorMode::Indexed`].
    pub fn from_expanded_palette(image: DynamicImage, format: Option<SourceFormat>) -> Self {
        Self {
            pixels: Pixels::Expanded(image),
            format,
        }
    }

    pub fn width(&self) -> u32 {
        match &self.pixels {
            Pixels::Direct(img) | Pixels::Expanded(img) => img.width(),
            Pixels::Indexed(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.pixels {
            Pixels::Direct(img) | Pixels::Expanded(img) => img.height(),
            Pixels::Indexed(img) => img.height(),
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        match &self.pixels {
            Pixels::Direct(img) => ColorMode::of(img),
            Pixels::Indexed(_) | Pixels::Expanded(_) => ColorMode::Indexed,
        }
    }

    /// Format the source file was read as, if known
    pub fn format(&self) -> Option<SourceFormat> {
        self.format
    }

    pub(crate) fn into_pixels(self) -> Pixels {
        self.pixels
    }
}

impl From<DynamicImage> for DecodedImage {
    fn from(image: DynamicImage) -> Self {
        Self::new(image, None)
    }
}
