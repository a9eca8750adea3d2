/// Treeline Core — scanning, statistics, and report rendering.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI, TUI).
///
/// # Modules
///
/// - [`model`] — Scan statistics, size formatting, and file categories.
/// - [`platform`] — Platform-specific file attribute probing.
/// - [`report`] — Tree rendering, summary finalization, and plain-text export.
/// - [`scanner`] — Background recursive walk with progress reporting.
/// - [`session`] — Single-run orchestration state machine for frontends.
pub mod error;
pub mod model;
pub mod platform;
pub mod report;
pub mod scanner;
pub mod session;
