use std::path::Path;

/// Raster formats accepted as conversion sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Png,
    Jpeg,
    Webp,
    Tiff,
    Bmp,
    Gif,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 6] = [
        Self::Jpeg,
        Self::Webp,
        Self::Gif,
        Self::Bmp,
        Self::Tiff,
        Self::Png,
    ];

    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Parse from extension string (without the leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::Webp),
            "tif" | "tiff" => Some(Self::Tiff),
            "bmp" => Some(Self::Bmp),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Every extension that maps to this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Png => &["png"],
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Webp => &["webp"],
            Self::Tiff => &["tiff", "tif"],
            Self::Bmp => &["bmp"],
            Self::Gif => &["gif"],
        }
    }

    /// Convert to image crate's ImageFormat
    pub fn to_image_format(&self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Webp => image::ImageFormat::WebP,
            Self::Tiff => image::ImageFormat::Tiff,
            Self::Bmp => image::ImageFormat::Bmp,
            Self::Gif => image::ImageFormat::Gif,
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extensions()[0].to_uppercase())
    }
}

/// The allow-list of source extensions.
///
/// Membership is decided on the file-name suffix alone, case-insensitively.
/// File contents are never sniffed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportedFormatSet;

impl SupportedFormatSet {
    pub fn new() -> Self {
        Self
    }

    /// Lower-cased suffix of `path` including the leading dot, or an empty string
    pub fn suffix(path: &Path) -> String {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.format_of(path).is_some()
    }

    pub fn format_of(&self, path: &Path) -> Option<SourceFormat> {
        SourceFormat::from_path(path)
    }

    /// All recognised extensions, without dots
    pub fn extensions(&self) -> impl Iterator<Item = &'static str> {
        SourceFormat::ALL
            .into_iter()
            .flat_map(|format| format.extensions().iter().copied())
    }
}
