/// CLI run loop — drives a scan session and emits the report.
use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use treeline_core::model::size::{format_count, format_size};
use treeline_core::report::export::default_export_file_name;
use treeline_core::session::{ScanSession, SessionPhase};

/// Cadence of the poll loop. Short enough that cancellation and progress
/// feel immediate, long enough to stay off the CPU.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Parse arguments, run one scan to a terminal phase, and emit the result.
pub fn run() -> Result<()> {
    let args = Cli::parse();

    let mut session = ScanSession::new();
    session.start(args.path.clone());

    // Ctrl-C requests cooperative cancellation; the worker stops at the
    // next node boundary and the loop below observes the outcome.
    if let Some(cancel) = session.cancel_handle() {
        ctrlc::set_handler(move || cancel.cancel())
            .context("failed to install Ctrl-C handler")?;
    }

    let spinner = if args.quiet { None } else { Some(make_spinner()) };

    while session.is_running() {
        session.poll();
        if let Some(spinner) = &spinner {
            let (percent, label) = session.progress();
            spinner.set_message(format!("{percent:5.1}%  {label}"));
        }
        std::thread::sleep(POLL_INTERVAL);
    }
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match session.phase() {
        SessionPhase::Completed => emit_report(&args, &session),
        SessionPhase::Cancelled => {
            eprintln!("{}", session.report_text().unwrap_or_default());
            Ok(())
        }
        SessionPhase::Failed => {
            bail!("scan failed: {}", session.failure().unwrap_or("unknown error"))
        }
        SessionPhase::Idle | SessionPhase::Running => {
            bail!("scan loop exited in a non-terminal phase")
        }
    }
}

/// Print or save the completed report, then the one-line stats summary.
fn emit_report(args: &Cli, session: &ScanSession) -> Result<()> {
    let Some(report) = session.report() else {
        bail!("scan completed without a report");
    };

    if let Some(dest) = export_destination(args) {
        session
            .export(&dest)
            .with_context(|| format!("failed to save report to {}", dest.display()))?;
        eprintln!("Report saved to {}", dest.display());
    } else {
        print!("{}", report.text);
    }

    let stats = &report.stats;
    debug!("run finished with {} node errors", session.node_errors().len());
    eprintln!(
        "Scanned {} files in {} directories, {} total, in {:.1} s",
        format_count(stats.total_files),
        format_count(stats.total_directories),
        format_size(stats.total_size_bytes),
        stats.duration.as_secs_f64(),
    );
    let skipped = session.node_errors().len();
    if skipped > 0 {
        eprintln!("{skipped} entries could not be read");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    }
    Ok(())
}

/// Where the report goes when not printed: an explicit path, or the
/// timestamped default name with `--save`.
fn export_destination(args: &Cli) -> Option<PathBuf> {
    if let Some(path) = &args.output {
        return Some(path.clone());
    }
    args.save
        .then(|| PathBuf::from(default_export_file_name(chrono::Local::now())))
}

fn make_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .expect("static spinner template"),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
