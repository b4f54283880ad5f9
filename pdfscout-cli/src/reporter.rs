use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pdfscout::{Reporter, RunSummary, SearchOutcome};

/// Prints outcomes to stdout as they arrive, with an optional progress bar
pub struct ConsoleReporter {
    stats_only: bool,
    show_progress: bool,
    bar: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(stats_only: bool, show_progress: bool) -> Self {
        Self {
            stats_only,
            show_progress,
            bar: None,
        }
    }

    /// Prints a line without tearing the progress bar
    fn print(&self, line: &str) {
        match &self.bar {
            Some(bar) => bar.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn on_start(&mut self, total_files: usize, terms: &[String]) {
        println!("{}", start_line(total_files, terms));
        if total_files == 0 {
            return;
        }
        println!();

        if self.show_progress {
            let style = ProgressStyle::with_template("{msg} |{bar:30}| {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█ ");
            let bar = ProgressBar::new(total_files as u64);
            bar.set_style(style);
            bar.set_message("Progress");
            self.bar = Some(bar);
        }
    }

    fn on_outcome(&mut self, outcome: &SearchOutcome) {
        if !self.stats_only {
            match outcome {
                SearchOutcome::Found { .. } => {
                    self.print(&outcome_line(outcome).green().to_string());
                }
                SearchOutcome::ReadError { .. } => {
                    self.print(&outcome_line(outcome).yellow().to_string());
                }
                SearchOutcome::NotFound { .. } => {}
            }
        }
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn on_finish(&mut self, summary: &RunSummary) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        for (i, line) in summary_lines(summary).into_iter().enumerate() {
            if i == 0 {
                println!("\n{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

fn start_line(total_files: usize, terms: &[String]) -> String {
    if total_files == 0 {
        "No PDF files found.".to_string()
    } else {
        format!(
            "Searching {} PDF(s) for: \"{}\"",
            total_files,
            terms.join(", ")
        )
    }
}

fn outcome_line(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found { page, .. } => {
            format!("Found in: {} (page {})", outcome.file_name(), page)
        }
        SearchOutcome::ReadError { message, .. } => {
            format!("Error reading {}: {}", outcome.file_name(), message)
        }
        SearchOutcome::NotFound { .. } => format!("No match in: {}", outcome.file_name()),
    }
}

fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "Done! Found {} matching file(s).",
        summary.found_count
    )];
    if summary.error_count > 0 {
        lines.push(format!(
            "{} file(s) could not be read.",
            summary.error_count
        ));
    }
    lines.push(format!(
        "Total time: {:.2} seconds",
        summary.elapsed.as_secs_f64()
    ));
    lines
}
