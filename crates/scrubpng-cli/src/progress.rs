use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use scrubpng_core::ProgressEvent;
use std::time::Duration;

/// Progress reporter for CLI operations
pub struct ProgressReporter {
    show_progress: bool,
}

impl ProgressReporter {
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// Create progress bar for a batch of `total` files
    pub fn create_bar(&self, total: u64, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Some(pb)
    }

    /// Mirror a batch progress event onto the bar
    pub fn update(pb: &Option<ProgressBar>, event: &ProgressEvent) {
        if let Some(pb) = pb {
            pb.set_length(event.total as u64);
            pb.set_position(event.current as u64);
            pb.set_message(event.label.clone());
        }
    }

    /// Finish progress bar with success message
    pub fn finish_bar(pb: &Option<ProgressBar>, message: &str) {
        if let Some(pb) = pb {
            pb.finish_with_message(format!("{} {}", style("✓").green(), message));
        }
    }

    /// Finish progress bar with error message
    pub fn finish_bar_error(pb: &Option<ProgressBar>, message: &str) {
        if let Some(pb) = pb {
            pb.finish_with_message(format!("{} {}", style("✗").red(), message));
        }
    }
}
