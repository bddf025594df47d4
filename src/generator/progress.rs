//! Progress events emitted by the output consumer

/// Receives the running count of written lines
///
/// Called from the consumer, which runs on the thread that started the
/// pipeline.
pub trait ProgressReporter {
    /// Periodic update, every [`PROGRESS_INTERVAL`](super::PROGRESS_INTERVAL) lines
    fn on_progress(&self, written: u64);

    /// Final count once the output is flushed
    fn on_complete(&self, written: u64);
}

/// Discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_progress(&self, _written: u64) {}

    fn on_complete(&self, _written: u64) {}
}
