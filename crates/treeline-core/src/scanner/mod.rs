/// Scanner module — one background worker thread per run.
///
/// [`start_scan`] spawns the worker and returns a [`ScanHandle`] for
/// receiving progress and requesting cancellation. The worker owns the
/// render buffer and stats exclusively; the only cross-thread object is
/// the atomic cancel flag. Every run ends with exactly one terminal
/// message on the progress channel.
pub mod progress;
mod walker;

use crate::error::ScanError;
use crate::report::summary::finalize_report;
use progress::ScanProgress;
use walker::Walker;

use crossbeam_channel::Receiver;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info};

/// Maximum number of progress messages that may queue up in the channel.
///
/// Non-terminal messages are sent with `try_send`, so a slow or absent
/// consumer costs dropped gauge updates rather than a stalled walk.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// One-shot, thread-safe cancellation signal for a single run.
///
/// Clonable so a shell can hand it to e.g. a Ctrl-C hook. Signalling is
/// idempotent, and a signal outlives nothing: each run gets a fresh one.
#[derive(Clone, Debug)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Request cooperative termination at the next node boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Handle to a running or completed scan.
pub struct ScanHandle {
    /// Receiver for progress updates from the worker thread.
    pub progress_rx: Receiver<ScanProgress>,
    cancel: CancelHandle,
    /// Join handle for the worker thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Clonable cancellation signal for this run.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }
}

/// Start a new scan on a background worker thread.
///
/// The worker validates the root, walks the tree, and sends exactly one
/// terminal message: `Complete` with the finalized report, `Cancelled`
/// with partial state already discarded, or `Failed` when the root is
/// unusable before the walk starts.
pub fn start_scan(root_path: PathBuf) -> ScanHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel = CancelHandle::new();
    let cancel_worker = cancel.clone();

    let thread = thread::Builder::new()
        .name("treeline-scanner".into())
        .spawn(move || {
            info!("starting scan of {}", root_path.display());

            if let Err(err) = validate_root(&root_path) {
                let _ = progress_tx.send(ScanProgress::Failed {
                    message: err.to_string(),
                });
                return;
            }

            let started = Instant::now();
            let walker = Walker::new(cancel_worker, progress_tx.clone());
            match walker.run(&root_path) {
                Ok((buffer, mut stats)) => {
                    stats.duration = started.elapsed();
                    debug!(
                        "walk complete: {} files, {} directories in {:?}",
                        stats.total_files, stats.total_directories, stats.duration
                    );
                    let report = finalize_report(buffer, stats, &root_path);
                    let _ = progress_tx.send(ScanProgress::Complete {
                        report: Box::new(report),
                    });
                }
                Err(walker::Interrupted) => {
                    debug!("scan of {} cancelled, partial output dropped", root_path.display());
                    let _ = progress_tx.send(ScanProgress::Cancelled);
                }
            }
        })
        .expect("failed to spawn scanner thread");

    ScanHandle {
        progress_rx,
        cancel,
        _thread: Some(thread),
    }
}

/// Pre-walk validation: the root must exist and be a directory.
///
/// Sub-path failures after this point are per-node placeholders, handled
/// inside the walk.
fn validate_root(path: &Path) -> Result<(), ScanError> {
    let metadata =
        fs::metadata(path).map_err(|_| ScanError::RootNotFound(path.to_path_buf()))?;
    if !metadata.is_dir() {
        return Err(ScanError::RootNotADirectory(path.to_path_buf()));
    }
    Ok(())
}
