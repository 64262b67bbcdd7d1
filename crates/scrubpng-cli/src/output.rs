use console::style;
use scrubpng_core::BatchReport;
use std::path::Path;

/// How many failures the summary spells out before collapsing the rest
const MAX_LISTED_FAILURES: usize = 5;

/// Output formatter with colored messages
pub struct OutputFormatter {
    colored: bool,
}

impl OutputFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("{} {}", style("✓").green().bold(), message);
        } else {
            println!("[SUCCESS] {}", message);
        }
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", style("✗").red().bold(), message);
        } else {
            eprintln!("[ERROR] {}", message);
        }
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("{} {}", style("ℹ").cyan(), message);
        } else {
            println!("[INFO] {}", message);
        }
    }

    /// Format file path
    pub fn format_path(&self, path: &Path) -> String {
        if self.colored {
            style(path.display()).cyan().to_string()
        } else {
            path.display().to_string()
        }
    }

    /// Lines describing failed items: `name: message`, capped, plus a tail
    pub fn failure_lines(report: &BatchReport) -> Vec<String> {
        let mut lines: Vec<String> = report
            .failures
            .iter()
            .take(MAX_LISTED_FAILURES)
            .map(|(path, message)| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!("{}: {}", name, message)
            })
            .collect();

        if report.failures.len() > MAX_LISTED_FAILURES {
            lines.push(format!(
                "...and {} more",
                report.failures.len() - MAX_LISTED_FAILURES
            ));
        }

        lines
    }

    /// Print batch summary
    pub fn print_batch_report(&self, report: &BatchReport, output_dir: &Path) {
        println!();

        if report.all_succeeded() {
            let count = report.success_count();
            self.success(&format!(
                "Converted {} image{} to PNG in {}",
                count,
                if count == 1 { "" } else { "s" },
                self.format_path(output_dir)
            ));
            return;
        }

        for line in Self::failure_lines(report) {
            self.error(&line);
        }

        println!();
        if self.colored {
            println!(
                "{} Total: {}, {} Converted: {}, {} Failed: {}",
                style("Summary:").bold(),
                report.total(),
                style("✓").green(),
                report.success_count(),
                style("✗").red(),
                report.failure_count()
            );
        } else {
            println!(
                "Summary: Total: {}, Converted: {}, Failed: {}",
                report.total(),
                report.success_count(),
                report.failure_count()
            );
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}
