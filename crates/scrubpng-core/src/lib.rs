pub mod batch;
pub mod converter;

pub use batch::{BatchReport, ConversionOutcome, ProgressEvent, COMPLETE_LABEL};
pub use converter::Converter;
pub use scrubpng_common::{Error, ErrorKind, Result};
pub use scrubpng_formats::PngOptions;
