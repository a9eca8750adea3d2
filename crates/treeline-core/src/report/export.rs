/// Plain-text export — writes a completed report verbatim.
use crate::error::ExportError;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

/// Write the report text to `dest` as a straight byte dump.
///
/// The written file is byte-identical to the in-memory text; nothing is
/// re-derived from scan state.
pub fn write_report(text: &str, dest: &Path) -> Result<(), ExportError> {
    fs::write(dest, text.as_bytes()).map_err(|source| ExportError::Io {
        path: dest.to_path_buf(),
        source,
    })
}

/// Default export file name, stamped to the second.
pub fn default_export_file_name(now: DateTime<Local>) -> String {
    format!("DirectoryStructure_{}.txt", now.format("%Y-%m-%d_%H-%M-%S"))
}
