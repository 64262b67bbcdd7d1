pub mod error;
pub mod format;
pub mod path;

pub use error::{Error, ErrorKind, Result};
pub use format::{SourceFormat, SupportedFormatSet};
pub use path::OutputPathResolver;
