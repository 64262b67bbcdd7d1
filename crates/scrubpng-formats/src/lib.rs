pub mod decoded;
pub mod decoder;
pub mod encoder;
pub mod info;
mod palette;
pub mod strip;

pub use decoded::{ColorMode, DecodedImage, IndexedImage};
pub use decoder::ImageDecoder;
pub use encoder::{ImageEncoder, PngOptions};
pub use info::ImageInfo;
pub use strip::{strip, CleanImage, CleanMode};
