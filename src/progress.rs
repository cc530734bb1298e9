// src/progress.rs
/// Lightweight progress reporting for the batch run.
/// Frontends (GUI/CLI) implement this to surface status to the operator.
pub trait Progress {
    /// Called at the start with the number of roster rows.
    fn begin(&mut self, _total: usize) {}

    /// Status line for human eyes ("Fetching data for …").
    fn log(&mut self, _msg: &str) {}

    /// Non-fatal, per-row problem the operator should see.
    fn warn(&mut self, _msg: &str) {}

    /// Error surfaced inline; the run continues.
    fn error(&mut self, _msg: &str) {}

    /// `done` of `total` rows processed.
    fn advance(&mut self, _done: usize, _total: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Collects everything it is told. Used by tests and the CLI's quiet mode.
#[derive(Debug, Default, Clone)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub statuses: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub fractions: Vec<f32>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.statuses.push(s!(msg)); }
    fn warn(&mut self, msg: &str) { self.warnings.push(s!(msg)); }
    fn error(&mut self, msg: &str) { self.errors.push(s!(msg)); }
    fn advance(&mut self, done: usize, total: usize) {
        self.fractions.push(fraction(done, total));
    }
    fn finish(&mut self) { self.finished = true; }
}

/// `done / total` clamped to `0.0..=1.0`; an empty run counts as complete.
pub fn fraction(done: usize, total: usize) -> f32 {
    if total == 0 { 1.0 } else { (done.min(total) as f32) / (total as f32) }
}
