//! Candidate generation
//!
//! Pools are built once per run, the enumerator turns templates into jobs and
//! the pipeline renders those jobs into the output sink.

pub mod cancel;
pub mod enumerator;
pub mod pipeline;
pub mod pools;
pub mod progress;
pub mod sink;

pub use cancel::CancellationToken;
pub use enumerator::{JobEnumerator, TemplateJobs};
pub use pipeline::{
    DEFAULT_QUEUE_CAPACITY, GenerationSummary, PROGRESS_INTERVAL, Pipeline, PipelineSettings,
};
pub use pools::WordPools;
pub use progress::{NoProgress, ProgressReporter};
pub use sink::OutputSink;
