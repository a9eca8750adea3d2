/// Summary finalization — prepends the aggregate header to the tree body.
use super::{RenderBuffer, ScanReport};
use crate::model::size::{format_count, format_size};
use crate::model::ScanStats;
use std::fmt::Write as _;
use std::path::Path;

const REPORT_HEADER: &str = "=== Scan Report ===";
const STRUCTURE_HEADER: &str = "=== Directory Structure ===";

/// Build the final report from a completed walk.
///
/// A single-pass, non-recursive transform invoked exactly once per run,
/// and never for a cancelled run. The header carries the scanned path,
/// start timestamp, duration, totals, and the extension histogram in
/// descending count order, followed by the tree body.
pub fn finalize_report(buffer: RenderBuffer, stats: ScanStats, root: &Path) -> ScanReport {
    let mut text = String::with_capacity(512 + buffer.len() * 48);

    text.push_str(REPORT_HEADER);
    text.push('\n');
    let _ = writeln!(text, "Path: {}", root.display());
    let _ = writeln!(text, "Started: {}", stats.started_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(text, "Duration: {:.1} s", stats.duration.as_secs_f64());
    let _ = writeln!(text, "Total files: {}", format_count(stats.total_files));
    let _ = writeln!(text, "Total directories: {}", format_count(stats.total_directories));
    let _ = writeln!(text, "Total size: {}", format_size(stats.total_size_bytes));
    text.push_str("File type distribution:\n");
    for (ext, count) in stats.sorted_histogram() {
        let _ = writeln!(text, "{ext}: {}", format_count(count));
    }
    text.push_str(STRUCTURE_HEADER);
    text.push('\n');
    text.push_str(&buffer.into_text());

    ScanReport { text, stats }
}
