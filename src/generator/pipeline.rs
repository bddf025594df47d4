//! Concurrent render pipeline
//!
//! One producer enumerates jobs into a bounded queue, a pool of workers renders
//! and length-filters them into a second bounded queue, and the calling thread
//! drains that queue into the output sink. Every blocking operation polls the
//! cancellation token, so a stalled stage notices a stop request within one
//! poll interval.
//!
//! Shutdown is close-then-drain: the producer drops its sender when
//! enumeration ends, each worker exits once the job queue is empty and closed,
//! and the result queue closes when the last worker drops its sender.

use super::cancel::CancellationToken;
use super::enumerator::JobEnumerator;
use super::progress::ProgressReporter;
use super::sink::OutputSink;
use crate::config::{GeneratorConfig, OutputSettings};
use crate::core::{SeparatorPolicy, SubstitutionJob};
use crate::error::{CraftError, RenderError};
use crossbeam_channel::{Receiver, RecvTimeoutError, SendTimeoutError, Sender, bounded};
use rustc_hash::FxHashSet;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Lines between progress events and intermediate flushes
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Default capacity of both queues
pub const DEFAULT_QUEUE_CAPACITY: usize = 1_000;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Tunables for one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub workers: usize,
    pub queue_capacity: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub separator_policy: SeparatorPolicy,
    pub dedup: bool,
}

impl PipelineSettings {
    /// Settings from configuration, one worker per available core
    #[must_use]
    pub fn new(generator: &GeneratorConfig, output: &OutputSettings) -> Self {
        Self {
            workers: thread::available_parallelism().map_or(1, usize::from),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            min_length: generator.min_password_length,
            max_length: generator.max_password_length,
            separator_policy: output.separator_policy,
            dedup: output.dedup,
        }
    }

    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    const fn accepts(&self, length: usize) -> bool {
        length >= self.min_length && length <= self.max_length
    }
}

/// Counters reported after a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Jobs handed to the workers
    pub emitted: u64,
    /// Rendered candidates within the length bounds
    pub accepted: u64,
    /// Rendered candidates outside the length bounds
    pub rejected: u64,
    /// Lines written to the sink
    pub written: u64,
    /// Accepted candidates dropped by deduplication
    pub duplicates: u64,
    pub elapsed: Duration,
}

/// Why a blocking queue operation gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    /// The other side of the queue is gone
    Closed,
    /// Cancellation or a failure elsewhere in the pipeline
    Stopped,
}

/// Stop conditions shared by every stage
#[derive(Clone, Copy)]
struct Signals<'s> {
    cancel: &'s CancellationToken,
    failed: &'s AtomicBool,
}

impl Signals<'_> {
    fn stopped(self) -> bool {
        self.cancel.is_cancelled() || self.failed.load(Ordering::SeqCst)
    }

    fn fail(self) {
        self.failed.store(true, Ordering::SeqCst);
    }

    fn send<T>(self, queue: &Sender<T>, mut item: T) -> Result<(), Halt> {
        loop {
            if self.stopped() {
                return Err(Halt::Stopped);
            }
            match queue.send_timeout(item, POLL_INTERVAL) {
                Ok(()) => return Ok(()),
                Err(SendTimeoutError::Timeout(returned)) => item = returned,
                Err(SendTimeoutError::Disconnected(_)) => return Err(Halt::Closed),
            }
        }
    }

    fn recv<T>(self, queue: &Receiver<T>) -> Result<T, Halt> {
        loop {
            if self.stopped() {
                return Err(Halt::Stopped);
            }
            match queue.recv_timeout(POLL_INTERVAL) {
                Ok(item) => return Ok(item),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Err(Halt::Closed),
            }
        }
    }
}

#[derive(Debug, Default)]
struct ProducerReport {
    emitted: u64,
    interrupted: bool,
}

#[derive(Debug, Default)]
struct WorkerReport {
    accepted: u64,
    rejected: u64,
    interrupted: bool,
}

#[derive(Debug, Default)]
struct ConsumerReport {
    written: u64,
    duplicates: u64,
    interrupted: bool,
}

/// Enumerate, render, filter and write every job
pub struct Pipeline<'a> {
    enumerator: JobEnumerator<'a>,
    settings: PipelineSettings,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub const fn new(enumerator: JobEnumerator<'a>, settings: PipelineSettings) -> Self {
        Self {
            enumerator,
            settings,
        }
    }

    /// Run to completion or cancellation
    ///
    /// Lines already written stay in the sink whatever the outcome; the sink is
    /// flushed before this returns unless the flush itself failed.
    ///
    /// # Errors
    /// - `CraftError::Cancelled` if the token stopped the run early
    /// - `CraftError::Render` if a job could not be rendered under the strict
    ///   separator policy
    /// - `CraftError::Output` if writing to the sink failed
    pub fn run<W, P>(
        &self,
        sink: &mut OutputSink<W>,
        cancel: &CancellationToken,
        progress: &P,
    ) -> Result<GenerationSummary, CraftError>
    where
        W: Write,
        P: ProgressReporter + ?Sized,
    {
        let started = Instant::now();
        let settings = self.settings;
        let workers = settings.workers.max(1);
        let capacity = settings.queue_capacity.max(1);
        let failed = AtomicBool::new(false);
        let signals = Signals {
            cancel,
            failed: &failed,
        };

        info!(workers, capacity, dedup = settings.dedup, "pipeline started");

        let (produced, worked, consumed) = thread::scope(|scope| {
            let (job_tx, job_rx) = bounded::<SubstitutionJob<'a>>(capacity);
            let (line_tx, line_rx) = bounded::<String>(capacity);

            let enumerator = self.enumerator;
            let producer = scope.spawn(move || produce(enumerator, &job_tx, signals));

            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let jobs = job_rx.clone();
                    let lines = line_tx.clone();
                    scope.spawn(move || work(&jobs, &lines, settings, signals))
                })
                .collect();
            drop(job_rx);
            drop(line_tx);

            let consumed = consume(&line_rx, sink, settings.dedup, signals, progress);
            drop(line_rx);

            let produced = join(producer);
            let worked: Vec<_> = handles.into_iter().map(join).collect();
            (produced, worked, consumed)
        });

        let mut summary = GenerationSummary {
            emitted: produced.emitted,
            elapsed: started.elapsed(),
            ..GenerationSummary::default()
        };
        let mut interrupted = produced.interrupted;

        for report in worked {
            let report = report?;
            summary.accepted += report.accepted;
            summary.rejected += report.rejected;
            interrupted |= report.interrupted;
        }

        let consumed = consumed?;
        summary.written = consumed.written;
        summary.duplicates = consumed.duplicates;
        interrupted |= consumed.interrupted;

        if interrupted && cancel.is_cancelled() {
            warn!(written = summary.written, "generation cancelled");
            return Err(CraftError::Cancelled {
                written: summary.written,
            });
        }

        info!(
            emitted = summary.emitted,
            accepted = summary.accepted,
            rejected = summary.rejected,
            written = summary.written,
            duplicates = summary.duplicates,
            elapsed_ms = summary.elapsed.as_millis(),
            "pipeline finished"
        );
        Ok(summary)
    }
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}

fn produce<'a>(
    enumerator: JobEnumerator<'a>,
    jobs: &Sender<SubstitutionJob<'a>>,
    signals: Signals<'_>,
) -> ProducerReport {
    let mut report = ProducerReport::default();

    for job in enumerator.jobs() {
        if signals.send(jobs, job).is_err() {
            report.interrupted = true;
            break;
        }
        report.emitted += 1;
    }

    report
}

fn work(
    jobs: &Receiver<SubstitutionJob<'_>>,
    lines: &Sender<String>,
    settings: PipelineSettings,
    signals: Signals<'_>,
) -> Result<WorkerReport, RenderError> {
    let mut report = WorkerReport::default();

    loop {
        let job = match signals.recv(jobs) {
            Ok(job) => job,
            Err(Halt::Closed) => break,
            Err(Halt::Stopped) => {
                report.interrupted = true;
                break;
            }
        };

        let candidate = job.render(settings.separator_policy).inspect_err(|err| {
            warn!(error = %err, "render failed, stopping pipeline");
            signals.fail();
        })?;

        if !settings.accepts(candidate.len()) {
            report.rejected += 1;
            continue;
        }

        report.accepted += 1;
        if signals.send(lines, candidate).is_err() {
            report.interrupted = true;
            break;
        }
    }

    Ok(report)
}

fn consume<W, P>(
    lines: &Receiver<String>,
    sink: &mut OutputSink<W>,
    dedup: bool,
    signals: Signals<'_>,
    progress: &P,
) -> io::Result<ConsumerReport>
where
    W: Write,
    P: ProgressReporter + ?Sized,
{
    let mut report = ConsumerReport::default();

    if let Err(err) = drain(lines, sink, dedup, signals, progress, &mut report) {
        warn!(error = %err, "output write failed, stopping pipeline");
        signals.fail();
        return Err(err);
    }

    progress.on_complete(report.written);
    Ok(report)
}

fn drain<W, P>(
    lines: &Receiver<String>,
    sink: &mut OutputSink<W>,
    dedup: bool,
    signals: Signals<'_>,
    progress: &P,
    report: &mut ConsumerReport,
) -> io::Result<()>
where
    W: Write,
    P: ProgressReporter + ?Sized,
{
    let mut seen = dedup.then(FxHashSet::<String>::default);

    loop {
        let line = match signals.recv(lines) {
            Ok(line) => line,
            Err(Halt::Closed) => break,
            Err(Halt::Stopped) => {
                report.interrupted = true;
                break;
            }
        };

        if let Some(seen) = seen.as_mut() {
            if seen.contains(&line) {
                report.duplicates += 1;
                continue;
            }
            sink.write_line(&line)?;
            seen.insert(line);
        } else {
            sink.write_line(&line)?;
        }

        report.written += 1;
        if report.written % PROGRESS_INTERVAL == 0 {
            sink.flush()?;
            progress.on_progress(report.written);
        }
    }

    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PatternTemplate;
    use crate::generator::pools::WordPools;
    use crate::generator::progress::NoProgress;
    use std::cell::RefCell;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn pools() -> WordPools {
        WordPools {
            custom: strings(&["alpha", "be"]),
            common: strings(&["pass", "x"]),
            network_ids: None,
            numbers: strings(&["1", "22"]),
            separators: strings(&["-", "."]),
            years: vec![2023, 2024],
        }
    }

    fn settings(min_length: usize, max_length: usize) -> PipelineSettings {
        PipelineSettings {
            workers: 3,
            queue_capacity: 4,
            min_length,
            max_length,
            separator_policy: SeparatorPolicy::Legacy,
            dedup: false,
        }
    }

    fn output(sink: OutputSink<Vec<u8>>) -> Vec<String> {
        let bytes = sink.into_inner().unwrap();
        let mut lines: Vec<String> = String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        lines.sort();
        lines
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<u64>>,
        completed: RefCell<Option<u64>>,
    }

    impl ProgressReporter for Recorder {
        fn on_progress(&self, written: u64) {
            self.events.borrow_mut().push(written);
        }

        fn on_complete(&self, written: u64) {
            *self.completed.borrow_mut() = Some(written);
        }
    }

    #[test]
    fn writes_every_accepted_candidate() {
        let pools = pools();
        let templates =
            PatternTemplate::parse_all(&strings(&["<CUSTOM><SEP><COMMON>", "<CUSTOM><YEAR>"]))
                .unwrap();
        let enumerator = JobEnumerator::new(&templates, &pools);

        let mut expected: Vec<String> = enumerator
            .jobs()
            .map(|job| job.render(SeparatorPolicy::Legacy).unwrap())
            .filter(|candidate| (4..=8).contains(&candidate.len()))
            .collect();
        expected.sort();

        let mut sink = OutputSink::new(Vec::new());
        let recorder = Recorder::default();
        let summary = Pipeline::new(enumerator, settings(4, 8))
            .run(&mut sink, &CancellationToken::new(), &recorder)
            .unwrap();

        assert_eq!(summary.emitted, 12);
        assert_eq!(summary.emitted, summary.accepted + summary.rejected);
        assert_eq!(summary.written, summary.accepted);
        assert_eq!(summary.written, expected.len() as u64);
        assert_eq!(*recorder.completed.borrow(), Some(summary.written));
        assert_eq!(output(sink), expected);
    }

    #[test]
    fn length_filter_counts_bytes() {
        // 4 characters, 5 bytes
        let pools = WordPools {
            custom: strings(&["1é23"]),
            ..WordPools::default()
        };
        let templates = PatternTemplate::parse_all(&strings(&["<CUSTOM>"])).unwrap();
        let enumerator = JobEnumerator::new(&templates, &pools);

        let mut sink = OutputSink::new(Vec::new());
        let summary = Pipeline::new(enumerator, settings(5, 5))
            .run(&mut sink, &CancellationToken::new(), &NoProgress)
            .unwrap();
        assert_eq!(summary.written, 1);
        assert_eq!(output(sink), vec!["1é23"]);

        let mut sink = OutputSink::new(Vec::new());
        let summary = Pipeline::new(enumerator, settings(4, 4))
            .run(&mut sink, &CancellationToken::new(), &NoProgress)
            .unwrap();
        assert_eq!(summary.written, 0);
        assert_eq!(summary.rejected, 1);
    }

    #[test]
    fn dedup_drops_repeated_candidates() {
        let pools = pools();
        // Both templates render the bare custom word
        let templates = PatternTemplate::parse_all(&strings(&["<CUSTOM>", "<CUSTOM>"])).unwrap();
        let enumerator = JobEnumerator::new(&templates, &pools);

        let mut plain = OutputSink::new(Vec::new());
        let summary = Pipeline::new(enumerator, settings(1, 64))
            .run(&mut plain, &CancellationToken::new(), &NoProgress)
            .unwrap();
        assert_eq!(summary.written, 4);
        assert_eq!(summary.duplicates, 0);

        let mut deduped = OutputSink::new(Vec::new());
        let mut dedup_settings = settings(1, 64);
        dedup_settings.dedup = true;
        let summary = Pipeline::new(enumerator, dedup_settings)
            .run(&mut deduped, &CancellationToken::new(), &NoProgress)
            .unwrap();
        assert_eq!(summary.accepted, 4);
        assert_eq!(summary.written, 2);
        assert_eq!(summary.duplicates, 2);
        assert_eq!(output(deduped), vec!["alpha", "be"]);
    }

    #[test]
    fn cancelled_before_start_writes_nothing() {
        let pools = pools();
        let templates = PatternTemplate::parse_all(&strings(&["<CUSTOM><NUM>"])).unwrap();
        let enumerator = JobEnumerator::new(&templates, &pools);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut sink = OutputSink::new(Vec::new());
        let err = Pipeline::new(enumerator, settings(1, 64))
            .run(&mut sink, &cancel, &NoProgress)
            .unwrap_err();

        assert!(matches!(err, CraftError::Cancelled { written: 0 }));
        assert!(output(sink).is_empty());
    }

    #[test]
    fn strict_policy_accepts_enumerated_jobs() {
        let mut pools = pools();
        pools.separators.clear();
        let templates = PatternTemplate::parse_all(&strings(&["<CUSTOM>"])).unwrap();
        let enumerator = JobEnumerator::new(&templates, &pools);

        // Only hand-built jobs can lack separators
        let template = PatternTemplate::parse("<CUSTOM><SEP>").unwrap();
        let job = SubstitutionJob::neutral(&template);
        assert!(job.render(SeparatorPolicy::Strict).is_err());

        let mut strict = settings(1, 64);
        strict.separator_policy = SeparatorPolicy::Strict;
        let mut sink = OutputSink::new(Vec::new());
        let summary = Pipeline::new(enumerator, strict)
            .run(&mut sink, &CancellationToken::new(), &NoProgress)
            .unwrap();
        assert_eq!(summary.written, 2);
    }

    #[test]
    fn progress_fires_every_interval() {
        let pools = WordPools {
            custom: (0..PROGRESS_INTERVAL * 2 + 5).map(|n| n.to_string()).collect(),
            ..WordPools::default()
        };
        let templates = PatternTemplate::parse_all(&strings(&["<CUSTOM>"])).unwrap();
        let enumerator = JobEnumerator::new(&templates, &pools);

        let mut sink = OutputSink::new(io::sink());
        let recorder = Recorder::default();
        let mut settings = settings(1, 64);
        settings.queue_capacity = DEFAULT_QUEUE_CAPACITY;
        let summary = Pipeline::new(enumerator, settings)
            .run(&mut sink, &CancellationToken::new(), &recorder)
            .unwrap();

        assert_eq!(summary.written, PROGRESS_INTERVAL * 2 + 5);
        assert_eq!(*recorder.events.borrow(), vec![PROGRESS_INTERVAL, PROGRESS_INTERVAL * 2]);
        assert_eq!(*recorder.completed.borrow(), Some(summary.written));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    #[test]
    fn write_failure_stops_all_stages() {
        let pools = WordPools {
            custom: (0..50_000).map(|n| format!("word{n}")).collect(),
            ..WordPools::default()
        };
        let templates = PatternTemplate::parse_all(&strings(&["<CUSTOM>"])).unwrap();
        let enumerator = JobEnumerator::new(&templates, &pools);

        let mut sink = OutputSink::new(FailingWriter);
        let err = Pipeline::new(enumerator, settings(1, 64))
            .run(&mut sink, &CancellationToken::new(), &NoProgress)
            .unwrap_err();
        assert!(matches!(err, CraftError::Output(_)));
    }
}
