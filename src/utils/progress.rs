//! Progress indicators for CLI mode
//!
//! A spinner for the assessment wait (indicatif) and one-line check marks
//! for report sections (console).

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the service assesses a host
pub struct AssessmentSpinner {
    bar: ProgressBar,
}

impl AssessmentSpinner {
    pub fn start(host: &str, fresh: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} ({elapsed})") {
            bar.set_style(template);
        }
        let message = if fresh {
            format!("Starting a new assessment of {}...", host)
        } else {
            format!("Waiting for the assessment of {}...", host)
        };
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for AssessmentSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// Outcome shown in front of a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Pass,
    Fail,
    Warn,
    Info,
}

pub fn print_mark(mark: Mark, message: &str) {
    let symbol = match mark {
        Mark::Pass => style("✓").green(),
        Mark::Fail => style("✗").red(),
        Mark::Warn => style("⚠").yellow(),
        Mark::Info => style("ℹ").cyan(),
    };
    println!("  {} {}", symbol, message);
}
