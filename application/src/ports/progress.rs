//! Progress notification port
//!
//! Defines the interface for reporting progress while answering a batch
//! of questions.

/// Callback for progress updates during batch answering or evaluation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first question; `already_done` counts
    /// answers resumed from a previous run
    fn on_batch_start(&self, total: usize, already_done: usize);

    /// Called after each question; `index` is 0-based
    fn on_question_complete(&self, index: usize, answer: &str, success: bool);

    /// Called once after the last question
    fn on_batch_complete(&self, completed: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_batch_start(&self, _total: usize, _already_done: usize) {}
    fn on_question_complete(&self, _index: usize, _answer: &str, _success: bool) {}
    fn on_batch_complete(&self, _completed: usize) {}
}
