//! Progress reporting for batch answering and evaluation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use router_application::ports::progress::ProgressNotifier;
use std::sync::Mutex;

/// Longest answer preview shown next to the bar
const PREVIEW_CHARS: usize = 40;

/// Shorten an answer to one line for progress messages
pub fn preview(answer: &str) -> String {
    let line = answer.lines().next().unwrap_or("").trim();
    if line.chars().count() > PREVIEW_CHARS {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else if line.is_empty() {
        "(empty)".to_string()
    } else {
        line.to_string()
    }
}

/// Reports batch progress with an indicatif bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    label: &'static str,
}

impl ProgressReporter {
    pub fn new(label: &'static str) -> Self {
        Self {
            bar: Mutex::new(None),
            label,
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new("Answering")
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total: usize, already_done: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix(self.label);
        pb.set_position(already_done as u64);
        if already_done > 0 {
            pb.set_message(format!("resumed after {}", already_done));
        } else {
            pb.set_message("Starting...");
        }

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_question_complete(&self, index: usize, answer: &str, success: bool) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} #{} {}", "v".green(), index + 1, preview(answer))
            } else {
                format!("{} #{} crashed", "x".red(), index + 1)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, completed: usize) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{} ({} new)", "done".green(), completed));
        }
    }
}

/// Simple text-based progress (no fancy UI); prints every `every` questions
pub struct SimpleProgress {
    every: usize,
    total: Mutex<usize>,
}

impl SimpleProgress {
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
            total: Mutex::new(0),
        }
    }

    fn should_print(&self, index: usize, total: usize) -> bool {
        let done = index + 1;
        done % self.every == 0 || done == total
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new(25)
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total: usize, already_done: usize) {
        if let Ok(mut t) = self.total.lock() {
            *t = total;
        }
        println!(
            "{} {} questions ({} already answered)",
            "->".cyan(),
            total,
            already_done
        );
    }

    fn on_question_complete(&self, index: usize, answer: &str, success: bool) {
        let total = self.total.lock().map(|t| *t).unwrap_or(0);
        if !success {
            println!("  {} [{}/{}] crashed, recorded empty answer", "x".red(), index + 1, total);
        } else if self.should_print(index, total) {
            println!("  {} [{}/{}] {}", "v".green(), index + 1, total, preview(answer));
        }
    }

    fn on_batch_complete(&self, completed: usize) {
        println!("{} {} questions answered", "->".cyan(), completed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_and_flattens() {
        assert_eq!(preview("  42 \nmore"), "42");
        assert_eq!(preview(""), "(empty)");
        let long = "x".repeat(100);
        assert_eq!(preview(&long).chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_simple_progress_prints_every_n_and_last() {
        let progress = SimpleProgress::new(25);
        assert!(!progress.should_print(0, 60));
        assert!(progress.should_print(24, 60));
        assert!(progress.should_print(59, 60));
    }
}
