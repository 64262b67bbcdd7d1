use scrubpng_common::{Error, OutputPathResolver, Result, SupportedFormatSet};
use scrubpng_formats::{strip, ImageDecoder, ImageEncoder, PngOptions};
use std::path::{Path, PathBuf};

/// Main conversion engine: any supported raster file in, metadata-free PNG out
#[derive(Debug, Clone, Default)]
pub struct Converter {
    formats: SupportedFormatSet,
    png: PngOptions,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_png_options(png: PngOptions) -> Self {
        Self {
            formats: SupportedFormatSet::new(),
            png,
        }
    }

    /// Convert a single image into `output_dir`, returning the path written.
    ///
    /// Fails with [`Error::UnsupportedFormat`] before touching the disk when
    /// the extension is not allowed. Any later failure leaves no file behind.
    pub fn convert_to_png(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        let format = self
            .formats
            .format_of(input)
            .ok_or_else(|| Error::UnsupportedFormat(SupportedFormatSet::suffix(input)))?;

        let resolver = OutputPathResolver::new(output_dir);
        resolver.ensure_output_dir()?;
        let output_path = resolver.resolve(input)?;

        let decoded = ImageDecoder::decode(input)?;
        tracing::info!(
            "Converting {}x{} {} → PNG",
            decoded.width(),
            decoded.height(),
            format
        );

        let clean = strip(decoded);
        ImageEncoder::write_png(&clean, &output_path, &self.png)?;

        Ok(output_path)
    }
}
