use crate::converter::Converter;
use scrubpng_common::{OutputPathResolver, Result};
use std::path::{Path, PathBuf};

/// Label carried by the final progress event
pub const COMPLETE_LABEL: &str = "Complete";

/// Result of converting one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Success(PathBuf),
    Failure { input: PathBuf, message: String },
}

/// Progress tracking for batch operations.
///
/// Sent once before each item with `current` set to its 0-based index, and
/// once after the last item with `current == total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub current: usize,
    pub total: usize,
    pub label: String,
}

impl ProgressEvent {
    pub fn is_complete(&self) -> bool {
        self.current == self.total
    }
}

/// Aggregated batch results, both lists in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub successes: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn record(&mut self, outcome: ConversionOutcome) {
        match outcome {
            ConversionOutcome::Success(path) => self.successes.push(path),
            ConversionOutcome::Failure { input, message } => self.failures.push((input, message)),
        }
    }

    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Converter {
    /// Convert one input, turning any error into a recorded failure
    pub fn convert(&self, input: &Path, output_dir: &Path) -> ConversionOutcome {
        match self.convert_to_png(input, output_dir) {
            Ok(path) => ConversionOutcome::Success(path),
            Err(e) => {
                tracing::warn!("Failed to convert {:?}: {}", input, e);
                ConversionOutcome::Failure {
                    input: input.to_path_buf(),
                    message: e.to_string(),
                }
            }
        }
    }

    /// Convert every input into `output_dir`, one after another.
    pub fn convert_batch<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        output_dir: &Path,
    ) -> Result<BatchReport> {
        self.convert_batch_with_progress(inputs, output_dir, |_| {})
    }

    /// Convert every input into `output_dir`, one after another, calling
    /// `on_progress` before each item and once more when done.
    ///
    /// A failing item is recorded and the batch moves on. The call itself
    /// fails only when `output_dir` cannot be created, in which case no item
    /// is attempted and no progress is reported.
    pub fn convert_batch_with_progress<P, F>(
        &self,
        inputs: &[P],
        output_dir: &Path,
        mut on_progress: F,
    ) -> Result<BatchReport>
    where
        P: AsRef<Path>,
        F: FnMut(&ProgressEvent),
    {
        OutputPathResolver::new(output_dir).ensure_output_dir()?;

        let total = inputs.len();
        tracing::info!("Starting batch conversion: {} files into {:?}", total, output_dir);

        let mut report = BatchReport::default();

        for (current, input) in inputs.iter().enumerate() {
            let input = input.as_ref();
            on_progress(&ProgressEvent {
                current,
                total,
                label: display_name(input),
            });

            report.record(self.convert(input, output_dir));
        }

        on_progress(&ProgressEvent {
            current: total,
            total,
            label: COMPLETE_LABEL.to_string(),
        });

        tracing::info!(
            "Batch conversion complete: {}/{} succeeded",
            report.success_count(),
            total
        );

        Ok(report)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;
    use tempfile::TempDir;

    fn make_inputs(dir: &TempDir, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let path = dir.path().join(format!("test{}.png", i));
                DynamicImage::new_rgb8(20, 20).save(&path).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_batch_processing() {
        let temp_dir = TempDir::new().unwrap();
        let inputs = make_inputs(&temp_dir, 5);
        let out_dir = temp_dir.path().join("out");

        let report = Converter::new().convert_batch(&inputs, &out_dir).unwrap();

        assert_eq!(report.total(), 5);
        assert!(report.all_succeeded());
        let expected: Vec<_> = (0..5).map(|i| out_dir.join(format!("test{}.png", i))).collect();
        assert_eq!(report.successes, expected);
    }

    #[test]
    fn test_progress_tracking() {
        let temp_dir = TempDir::new().unwrap();
        let inputs = make_inputs(&temp_dir, 3);

        let mut events = Vec::new();
        Converter::new()
            .convert_batch_with_progress(&inputs, &temp_dir.path().join("out"), |e| {
                events.push(e.clone())
            })
            .unwrap();

        assert_eq!(events.len(), inputs.len() + 1);
        let indices: Vec<_> = events.iter().map(|e| e.current).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(events.iter().all(|e| e.total == 3));
        assert_eq!(events[0].label, "test0.png");

        let last = events.last().unwrap();
        assert_eq!(last.label, COMPLETE_LABEL);
        assert!(last.is_complete());
    }

    #[test]
    fn test_failures_do_not_abort() {
        let temp_dir = TempDir::new().unwrap();
        let mut inputs = make_inputs(&temp_dir, 2);
        let bad = temp_dir.path().join("readme.md");
        std::fs::write(&bad, b"# hi").unwrap();
        inputs.insert(1, bad.clone());

        let report = Converter::new()
            .convert_batch(&inputs, &temp_dir.path().join("out"))
            .unwrap();

        assert_eq!(report.success_count(), 2);
        assert_eq!(
            report.failures,
            vec![(bad, "Unsupported format: .md".to_string())]
        );
    }

    #[test]
    fn test_empty_batch_reports_completion() {
        let temp_dir = TempDir::new().unwrap();
        let inputs: Vec<PathBuf> = Vec::new();

        let mut events = Vec::new();
        let report = Converter::new()
            .convert_batch_with_progress(&inputs, temp_dir.path(), |e| events.push(e.clone()))
            .unwrap();

        assert_eq!(report.total(), 0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].current, 0);
        assert_eq!(events[0].label, COMPLETE_LABEL);
    }

    #[test]
    fn test_unusable_output_dir_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let inputs = make_inputs(&temp_dir, 2);
        let blocker = temp_dir.path().join("file-not-dir");
        std::fs::write(&blocker, b"").unwrap();

        let mut calls = 0;
        let err = Converter::new()
            .convert_batch_with_progress(&inputs, &blocker, |_| calls += 1)
            .unwrap_err();

        assert_eq!(err.kind(), scrubpng_common::ErrorKind::Fatal);
        assert_eq!(calls, 0);
    }
}
