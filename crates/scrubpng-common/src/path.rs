use crate::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

const OUTPUT_EXTENSION: &str = "png";

/// Picks output paths inside a destination directory without overwriting
/// anything already there.
///
/// The exists-check and the later file creation are two separate steps, so
/// a name can still be taken by another process in between.
pub struct OutputPathResolver<'a> {
    output_dir: &'a Path,
}

impl<'a> OutputPathResolver<'a> {
    pub fn new(output_dir: &'a Path) -> Self {
        Self { output_dir }
    }

    /// Create the output directory and any missing parents.
    /// Succeeds when it already exists.
    pub fn ensure_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(self.output_dir).map_err(|source| Error::OutputDirectory {
            path: self.output_dir.to_path_buf(),
            source,
        })
    }

    /// Generate a free output path.
    /// Format: `stem.png`, then `stem_1.png`, `stem_2.png`, ...
    ///
    /// The stem is kept byte for byte, it need not be valid UTF-8.
    pub fn resolve(&self, original: &Path) -> Result<PathBuf> {
        let stem = original
            .file_stem()
            .ok_or_else(|| Error::InvalidPath(original.to_path_buf()))?;

        let mut candidate = self.output_dir.join(file_name(stem, None));
        let mut counter = 1u32;

        while candidate.exists() {
            candidate = self.output_dir.join(file_name(stem, Some(counter)));
            counter += 1;
        }

        if counter > 1 {
            tracing::debug!("Name collision for {:?}, using {:?}", stem, candidate);
        }

        Ok(candidate)
    }
}

fn file_name(stem: &OsStr, counter: Option<u32>) -> OsString {
    let mut name = stem.to_os_string();
    if let Some(counter) = counter {
        name.push(format!("_{}", counter));
    }
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    name
}
