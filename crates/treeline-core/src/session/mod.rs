/// Scan session — the orchestrating unit between a frontend and the
/// scanner.
///
/// Owns at most one run at a time and exposes an explicit state machine
/// (idle → running → completed | cancelled | failed) that the frontend
/// polls, instead of implicit cross-thread property mutation. Starting a
/// new run supersedes any in-flight one: the old cancel flag is set and
/// the old channel dropped, so a late result from the superseded worker
/// is discarded rather than merged.
use crate::error::ExportError;
use crate::report::{export, ScanReport};
use crate::scanner::progress::ScanProgress;
use crate::scanner::{start_scan, CancelHandle, ScanHandle};
use std::path::{Path, PathBuf};
use tracing::info;

/// Fixed output surfaced for a cancelled run in place of any partial tree.
pub const CANCELLED_PLACEHOLDER: &str = "Scan was cancelled by the user.";

/// Messages drained per `poll` call.
///
/// Caps the work a single poll can do so a backlog cannot stall the
/// frontend's render loop.
const MAX_MESSAGES_PER_POLL: usize = 300;

/// Per-node error records retained for the frontend. Bounds memory on
/// trees with very many unreadable nodes.
const MAX_NODE_ERRORS: usize = 1_000;

/// The session's position in its run lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No run started yet.
    Idle,
    /// A worker is walking; progress is flowing.
    Running,
    /// The last run finished and its report is available.
    Completed,
    /// The last run was cancelled; only the placeholder text is exposed.
    Cancelled,
    /// The last run failed before the walk started.
    Failed,
}

impl SessionPhase {
    /// True for phases from which a new run may start immediately.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Frontend-facing orchestration of scan runs.
pub struct ScanSession {
    phase: SessionPhase,
    handle: Option<ScanHandle>,
    report: Option<ScanReport>,
    failure: Option<String>,
    progress_percent: f64,
    progress_label: String,
    node_errors: Vec<(String, String)>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            handle: None,
            report: None,
            failure: None,
            progress_percent: 0.0,
            progress_label: String::new(),
            node_errors: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Start scanning `path`, superseding any in-flight run.
    ///
    /// The superseded worker sees its cancel flag and its channel close;
    /// whatever it produces afterwards goes nowhere.
    pub fn start(&mut self, path: PathBuf) {
        if let Some(old) = self.handle.take() {
            old.cancel();
        }
        info!("session: starting scan of {}", path.display());
        self.phase = SessionPhase::Running;
        self.report = None;
        self.failure = None;
        self.progress_percent = 0.0;
        self.progress_label.clear();
        self.node_errors.clear();
        self.handle = Some(start_scan(path));
    }

    /// Request cancellation of the in-flight run.
    ///
    /// Idempotent; no effect on a session already in a terminal phase.
    pub fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.cancel();
        }
    }

    /// Cancellation signal for the current run, e.g. for a Ctrl-C hook.
    pub fn cancel_handle(&self) -> Option<CancelHandle> {
        self.handle.as_ref().map(ScanHandle::cancel_handle)
    }

    /// Drain pending progress messages and apply state transitions.
    ///
    /// Returns `true` when anything changed (the frontend should redraw).
    /// Drains at most [`MAX_MESSAGES_PER_POLL`] messages per call.
    pub fn poll(&mut self) -> bool {
        let rx = match &self.handle {
            Some(handle) => handle.progress_rx.clone(),
            None => return false,
        };

        let mut changed = false;
        for _ in 0..MAX_MESSAGES_PER_POLL {
            let msg = match rx.try_recv() {
                Ok(msg) => msg,
                Err(_) => break,
            };
            changed = true;
            match msg {
                ScanProgress::Update { percent, label } => {
                    self.progress_percent = percent;
                    self.progress_label = label;
                }
                ScanProgress::NodeError { path, message } => {
                    if self.node_errors.len() < MAX_NODE_ERRORS {
                        self.node_errors.push((path, message));
                    }
                }
                ScanProgress::Complete { report } => {
                    self.phase = SessionPhase::Completed;
                    self.report = Some(*report);
                    self.handle = None;
                    return true;
                }
                ScanProgress::Cancelled => {
                    self.phase = SessionPhase::Cancelled;
                    self.report = None;
                    self.handle = None;
                    return true;
                }
                ScanProgress::Failed { message } => {
                    self.phase = SessionPhase::Failed;
                    self.failure = Some(message);
                    self.handle = None;
                    return true;
                }
            }
        }
        changed
    }

    /// Latest progress gauge: percent within the current directory level
    /// and the directory being walked.
    pub fn progress(&self) -> (f64, &str) {
        (self.progress_percent, &self.progress_label)
    }

    /// The completed run's report, if any.
    pub fn report(&self) -> Option<&ScanReport> {
        self.report.as_ref()
    }

    /// Text to show or save for the last run: the completed report, or
    /// the fixed cancellation placeholder. `None` while idle, running,
    /// or after a failed run.
    pub fn report_text(&self) -> Option<&str> {
        match self.phase {
            SessionPhase::Completed => self.report.as_ref().map(|r| r.text.as_str()),
            SessionPhase::Cancelled => Some(CANCELLED_PLACEHOLDER),
            _ => None,
        }
    }

    /// Failure message of the last run, if it failed.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Per-node errors observed during the current/last run, capped at
    /// [`MAX_NODE_ERRORS`].
    pub fn node_errors(&self) -> &[(String, String)] {
        &self.node_errors
    }

    /// Export the current report text verbatim to `dest`.
    ///
    /// An independent error channel: failures leave the in-memory report
    /// untouched so the caller can retry the save without rescanning.
    pub fn export(&self, dest: &Path) -> Result<(), ExportError> {
        let text = self.report_text().ok_or(ExportError::NothingToExport)?;
        export::write_report(text, dest)
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}
