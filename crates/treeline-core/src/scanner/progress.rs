/// Progress reporting — lightweight messages sent from the scan worker to
/// the session/shell via a crossbeam channel.
use crate::report::ScanReport;

/// Updates sent from the worker thread.
///
/// `Update` and `NodeError` are best-effort: the worker uses `try_send`
/// and drops them when the channel is full rather than blocking the walk.
/// Exactly one terminal message (`Complete`, `Cancelled`, or `Failed`)
/// ends every run.
#[derive(Debug)]
pub enum ScanProgress {
    /// Fractional progress within the directory currently being walked,
    /// not a whole-tree estimate. `percent` never reaches 100; the shell
    /// owns the final clamp on completion.
    Update { percent: f64, label: String },
    /// A per-node failure, already rendered inline as a placeholder line.
    NodeError { path: String, message: String },
    /// The walk finished; the report carries the final text and stats.
    Complete { report: Box<ScanReport> },
    /// Cancellation was honoured; partial output has been discarded.
    Cancelled,
    /// The run failed before the walk started (e.g. missing root).
    Failed { message: String },
}
