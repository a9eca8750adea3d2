/// Depth-first recursive walker — renders the tree and accumulates
/// statistics as it goes, with cooperative cancellation at every node.
///
/// The walk is render-as-you-go: no tree structure is materialized. Each
/// visited directory appends one line and recurses into its children in
/// lexicographic name order; each readable file appends one line and is
/// recorded in the stats exactly once.
///
/// Fault isolation is per node. A directory whose listing fails renders a
/// single placeholder line in place of its children; a file whose metadata
/// read fails renders an error line and is skipped. Neither aborts the run.
use crate::model::size::format_size;
use crate::model::stats::normalize_extension;
use crate::model::{FileCategory, ScanStats};
use crate::platform::FileQualifiers;
use crate::report::{branch_glyph, RenderBuffer, INDENT_BLANK, INDENT_RULE};
use crate::scanner::progress::ScanProgress;
use crate::scanner::CancelHandle;
use crossbeam_channel::Sender;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Placeholder rendered when a directory listing is denied.
const ACCESS_DENIED: &str = "[Access denied]";

/// Marker for a walk interrupted by the cancel flag.
///
/// Not an error: the caller maps it to the distinct cancelled outcome and
/// drops the partial buffer and stats.
pub(crate) struct Interrupted;

/// One directory child, pre-sorted and pre-typed for the visit loop.
struct ChildEntry {
    path: std::path::PathBuf,
    name: String,
    is_dir: bool,
}

/// Single-run walk state. Owns the stats and render buffer exclusively
/// until the run hands them back as a finished pair.
pub(crate) struct Walker {
    stats: ScanStats,
    buffer: RenderBuffer,
    cancel: CancelHandle,
    progress_tx: Sender<ScanProgress>,
}

impl Walker {
    pub(crate) fn new(cancel: CancelHandle, progress_tx: Sender<ScanProgress>) -> Self {
        Self {
            stats: ScanStats::new(),
            buffer: RenderBuffer::new(),
            cancel,
            progress_tx,
        }
    }

    /// Walk the tree rooted at `root`.
    ///
    /// Returns the completed render buffer and stats, or `Interrupted` if
    /// the cancel flag was observed mid-walk.
    pub(crate) fn run(mut self, root: &Path) -> Result<(RenderBuffer, ScanStats), Interrupted> {
        let name = root_display_name(root);
        self.visit_dir(root, &name, "", true)?;
        Ok((self.buffer, self.stats))
    }

    fn check_cancel(&self) -> Result<(), Interrupted> {
        if self.cancel.is_cancelled() {
            Err(Interrupted)
        } else {
            Ok(())
        }
    }

    /// Visit one directory: render its line, then its children pre-order.
    ///
    /// Cancellation is checked at the top of every directory and before
    /// every child, so responsiveness does not depend on subtree size.
    fn visit_dir(
        &mut self,
        path: &Path,
        name: &str,
        prefix: &str,
        is_last: bool,
    ) -> Result<(), Interrupted> {
        self.check_cancel()?;

        let glyph = branch_glyph(is_last);
        self.buffer.push_line(format!("{prefix}{glyph}{name}/"));
        self.stats.record_directory();

        let children = match read_dir_sorted(path) {
            Ok(children) => children,
            Err(err) => {
                self.push_listing_failure(path, prefix, glyph, &err);
                return Ok(());
            }
        };

        let child_prefix = format!(
            "{prefix}{}",
            if is_last { INDENT_BLANK } else { INDENT_RULE }
        );
        let total = children.len();
        let label = path.display().to_string();

        for (index, child) in children.iter().enumerate() {
            self.check_cancel()?;
            let child_last = index + 1 == total;
            if child.is_dir {
                self.visit_dir(&child.path, &child.name, &child_prefix, child_last)?;
            } else {
                self.visit_file(child, &child_prefix, child_last);
            }
            self.report_progress(index + 1, total, &label);
        }
        Ok(())
    }

    /// Visit one file leaf: record stats and render its entry line.
    ///
    /// Symlinks land here as leaves and are described by their own link
    /// metadata; the walk never follows them.
    fn visit_file(&mut self, child: &ChildEntry, prefix: &str, is_last: bool) {
        let glyph = branch_glyph(is_last);

        let metadata = match fs::symlink_metadata(&child.path) {
            Ok(metadata) => metadata,
            Err(err) => {
                self.buffer.push_line(format!("{prefix}{glyph}[Error: {err}]"));
                self.send_node_error(&child.path, &err);
                return;
            }
        };

        let ext = normalize_extension(&child.name);
        let category = FileCategory::classify(&ext);
        let qualifiers = FileQualifiers::detect(&child.name, &metadata);
        self.stats.record_file(metadata.len(), ext.clone());

        let mut line = format!(
            "{prefix}{glyph}{} [{}] [{ext}] [{}]",
            child.name,
            format_size(metadata.len()),
            category.label(),
        );
        if qualifiers.any() {
            line.push_str(" [");
            line.push_str(&qualifiers.labels().join(", "));
            line.push(']');
        }
        self.buffer.push_line(line);
    }

    /// Render the placeholder for a directory whose listing failed, at the
    /// directory's own prefix and glyph position.
    fn push_listing_failure(&mut self, path: &Path, prefix: &str, glyph: &str, err: &io::Error) {
        let line = if err.kind() == io::ErrorKind::PermissionDenied {
            format!("{prefix}{glyph}{ACCESS_DENIED}")
        } else {
            format!("{prefix}{glyph}[Error: {err}]")
        };
        self.buffer.push_line(line);
        self.send_node_error(path, err);
    }

    fn send_node_error(&self, path: &Path, err: &io::Error) {
        debug!("node error at {}: {err}", path.display());
        let _ = self.progress_tx.try_send(ScanProgress::NodeError {
            path: path.display().to_string(),
            message: err.to_string(),
        });
    }

    /// Fractional progress within the current directory only, clamped
    /// below 100 so the shell owns the final jump to complete. Dropped
    /// silently when the channel is full.
    fn report_progress(&self, done: usize, total: usize, label: &str) {
        if total == 0 {
            return;
        }
        let percent = (done as f64 / total as f64 * 100.0).min(99.9);
        let _ = self.progress_tx.try_send(ScanProgress::Update {
            percent,
            label: label.to_string(),
        });
    }
}

/// List a directory's immediate children in lexicographic name order.
///
/// Listing is all-or-nothing: an error on any entry fails the whole
/// directory so the caller renders a single placeholder in its place.
/// Sorting makes rerun output independent of filesystem enumeration order.
fn read_dir_sorted(path: &Path) -> io::Result<Vec<ChildEntry>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        children.push(ChildEntry {
            path: entry.path(),
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: file_type.is_dir(),
        });
    }
    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}

/// Display name for the scan root: the final path component, or the
/// trimmed path itself for filesystem roots like `/` or `C:\`.
fn root_display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => {
            let s = path.display().to_string();
            s.trim_end_matches(['/', '\\']).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn children_come_back_name_sorted() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        File::create(tmp.path().join("zeta.txt")).unwrap();
        File::create(tmp.path().join("alpha.txt")).unwrap();
        fs::create_dir(tmp.path().join("middle")).unwrap();

        let children = read_dir_sorted(tmp.path()).expect("listing");
        let names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["alpha.txt", "middle", "zeta.txt"]);
        assert!(children[1].is_dir);
    }

    #[test]
    fn root_name_falls_back_for_bare_roots() {
        assert_eq!(root_display_name(Path::new("/tmp/data")), "data");
        assert_eq!(root_display_name(Path::new("/")), "");
    }
}
