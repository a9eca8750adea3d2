/// Per-run statistics accumulator.
///
/// One `ScanStats` is created fresh for each run and mutated exclusively
/// by that run's worker thread: exactly one `record_file` per visited
/// file, exactly one `record_directory` per visited directory. Nodes whose
/// visit failed are never recorded.
use chrono::{DateTime, Local};
use compact_str::{format_compact, CompactString};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Aggregate statistics for one scan run.
#[derive(Debug, Clone, Serialize)]
pub struct ScanStats {
    pub total_files: u64,
    pub total_directories: u64,
    /// Sum of file sizes actually read; unreadable files are skipped,
    /// never estimated.
    pub total_size_bytes: u64,
    /// Occurrence count per normalized extension. Keys are lowercase with
    /// a leading dot; extensionless files use the empty string.
    pub extension_counts: HashMap<CompactString, u64>,
    /// Wall-clock start of the run.
    pub started_at: DateTime<Local>,
    /// Total walk duration, set once the walk completes.
    pub duration: Duration,
}

impl ScanStats {
    /// Fresh accumulator stamped with the current wall-clock time.
    pub fn new() -> Self {
        Self {
            total_files: 0,
            total_directories: 0,
            total_size_bytes: 0,
            extension_counts: HashMap::new(),
            started_at: Local::now(),
            duration: Duration::ZERO,
        }
    }

    /// Record one successfully-read file.
    pub fn record_file(&mut self, size_bytes: u64, extension: CompactString) {
        self.total_files += 1;
        self.total_size_bytes += size_bytes;
        *self.extension_counts.entry(extension).or_insert(0) += 1;
    }

    /// Record one visited directory.
    pub fn record_directory(&mut self) {
        self.total_directories += 1;
    }

    /// Extension histogram ordered by descending count.
    ///
    /// Ties are broken by extension name so rerun output is identical on an
    /// unchanged tree.
    pub fn sorted_histogram(&self) -> Vec<(CompactString, u64)> {
        let mut entries: Vec<(CompactString, u64)> = self
            .extension_counts
            .iter()
            .map(|(ext, &count)| (ext.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a file name's extension into a histogram key: lowercase, with
/// the leading dot, or the empty string when the name has no extension.
///
/// Uses `Path::extension` semantics, so dotfiles like `.gitignore` count
/// as extensionless and `archive.tar.gz` keys under `.gz`.
pub fn normalize_extension(file_name: &str) -> CompactString {
    match Path::new(file_name).extension() {
        Some(ext) => format_compact!(".{}", ext.to_string_lossy().to_lowercase()),
        None => CompactString::new(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_keeps_the_dot() {
        assert_eq!(normalize_extension("photo.JPG"), ".jpg");
        assert_eq!(normalize_extension("notes.txt"), ".txt");
        assert_eq!(normalize_extension("archive.tar.gz"), ".gz");
    }

    #[test]
    fn normalize_extensionless_names() {
        assert_eq!(normalize_extension("Makefile"), "");
        assert_eq!(normalize_extension(".gitignore"), "");
    }

    /// The file total must always equal the histogram sum.
    #[test]
    fn file_total_matches_histogram_sum() {
        let mut stats = ScanStats::new();
        stats.record_file(100, normalize_extension("a.txt"));
        stats.record_file(200, normalize_extension("b.TXT"));
        stats.record_file(300, normalize_extension("c.rs"));
        stats.record_file(400, normalize_extension("Makefile"));
        stats.record_directory();

        assert_eq!(stats.total_files, 4);
        assert_eq!(stats.total_directories, 1);
        assert_eq!(stats.total_size_bytes, 1_000);
        assert_eq!(stats.total_files, stats.extension_counts.values().sum::<u64>());
        // Case-insensitive by construction: .txt and .TXT share one key.
        assert_eq!(stats.extension_counts[&CompactString::new(".txt")], 2);
    }

    #[test]
    fn histogram_sorted_by_descending_count_then_name() {
        let mut stats = ScanStats::new();
        for _ in 0..3 {
            stats.record_file(1, CompactString::new(".rs"));
        }
        stats.record_file(1, CompactString::new(".txt"));
        stats.record_file(1, CompactString::new(".md"));

        let histogram = stats.sorted_histogram();
        assert_eq!(histogram[0], (CompactString::new(".rs"), 3));
        // Tied counts fall back to name order.
        assert_eq!(histogram[1], (CompactString::new(".md"), 1));
        assert_eq!(histogram[2], (CompactString::new(".txt"), 1));
    }
}
