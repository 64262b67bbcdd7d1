use anyhow::{Context, Result};
use scrubpng_common::SupportedFormatSet;
use std::env;
use std::path::{Path, PathBuf};

/// Turns command-line arguments into an ordered list of input files
pub struct InputResolver {
    current_dir: PathBuf,
    formats: SupportedFormatSet,
}

impl InputResolver {
    pub fn new() -> Result<Self> {
        let current_dir = env::current_dir().context("Failed to read current directory")?;
        Ok(Self::with_current_dir(current_dir))
    }

    pub fn with_current_dir(current_dir: PathBuf) -> Self {
        Self {
            current_dir,
            formats: SupportedFormatSet::new(),
        }
    }

    /// Expand `~` and environment variables, then make the path absolute
    pub fn resolve(&self, path_str: &str) -> Result<PathBuf> {
        let expanded = shellexpand::full(path_str)
            .with_context(|| format!("Cannot expand path: {}", path_str))?;

        let path = PathBuf::from(expanded.as_ref());
        let absolute = if path.is_absolute() {
            path
        } else {
            self.current_dir.join(path)
        };

        tracing::debug!("Resolved '{}' → {:?}", path_str, absolute);
        Ok(absolute)
    }

    /// Resolve every argument, keeping argument order.
    ///
    /// - glob patterns expand to the matching files, sorted
    /// - directories contribute their supported files, sorted, not recursive
    /// - anything else is passed through as-is, so a missing or unsupported
    ///   file is reported as a failed item instead of vanishing
    pub fn resolve_all(&self, args: &[String]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for arg in args {
            let path = self.resolve(arg)?;

            if is_pattern(arg) {
                let matches = self.resolve_pattern(&path)?;
                if matches.is_empty() {
                    tracing::warn!("No files matched pattern: {}", arg);
                }
                files.extend(matches);
            } else if path.is_dir() {
                files.extend(self.supported_in(&path)?);
            } else {
                files.push(path);
            }
        }

        Ok(files)
    }

    fn resolve_pattern(&self, pattern: &Path) -> Result<Vec<PathBuf>> {
        let pattern_str = pattern.to_string_lossy();
        tracing::debug!("Glob pattern: {}", pattern_str);

        let mut matches = Vec::new();
        for entry in glob::glob(&pattern_str)
            .with_context(|| format!("Invalid glob pattern: {}", pattern_str))?
        {
            match entry {
                Ok(path) if path.is_file() => matches.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!("Glob error: {}", e),
            }
        }

        matches.sort();
        Ok(matches)
    }

    fn supported_in(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for entry in dir
            .read_dir()
            .with_context(|| format!("Failed to read directory {}", dir.display()))?
        {
            let path = entry?.path();
            if path.is_file() && self.formats.contains(&path) {
                found.push(path);
            }
        }

        found.sort();
        tracing::debug!("Found {} supported files in {:?}", found.len(), dir);
        Ok(found)
    }
}

fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}
