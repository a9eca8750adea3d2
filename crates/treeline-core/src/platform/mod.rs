/// Platform-specific file attribute probing.
///
/// Windows exposes hidden/system as real attribute bits; Unix has neither,
/// so the conventional leading-dot rule stands in for hidden and the
/// system qualifier never applies.
use std::fs::Metadata;
use std::time::Duration;

/// A file created within this window earns the `new` qualifier.
const RECENT_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Per-file qualifier flags rendered after a file entry.
///
/// Each qualifier appears in the line only when true; when none apply the
/// whole qualifier bracket is omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileQualifiers {
    pub hidden: bool,
    pub read_only: bool,
    pub system: bool,
    pub recent: bool,
}

impl FileQualifiers {
    /// Probe qualifiers from a file's name and already-read metadata.
    pub fn detect(file_name: &str, metadata: &Metadata) -> Self {
        Self {
            hidden: is_hidden(file_name, metadata),
            read_only: metadata.permissions().readonly(),
            system: is_system(metadata),
            recent: is_recent(metadata),
        }
    }

    /// True when at least one qualifier applies.
    pub fn any(self) -> bool {
        self.hidden || self.read_only || self.system || self.recent
    }

    /// Fixed display labels in rendering order.
    pub fn labels(self) -> Vec<&'static str> {
        let mut labels = Vec::with_capacity(4);
        if self.hidden {
            labels.push("hidden");
        }
        if self.read_only {
            labels.push("read-only");
        }
        if self.system {
            labels.push("system");
        }
        if self.recent {
            labels.push("new");
        }
        labels
    }
}

/// Created within [`RECENT_WINDOW`]. Filesystems without creation-time
/// support yield no qualifier rather than a guess.
fn is_recent(metadata: &Metadata) -> bool {
    metadata
        .created()
        .ok()
        .and_then(|created| created.elapsed().ok())
        .map(|age| age < RECENT_WINDOW)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_hidden(_file_name: &str, metadata: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    use windows::Win32::Storage::FileSystem::FILE_ATTRIBUTE_HIDDEN;
    metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN.0 != 0
}

#[cfg(not(windows))]
fn is_hidden(file_name: &str, _metadata: &Metadata) -> bool {
    file_name.starts_with('.')
}

#[cfg(windows)]
fn is_system(metadata: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    use windows::Win32::Storage::FileSystem::FILE_ATTRIBUTE_SYSTEM;
    metadata.file_attributes() & FILE_ATTRIBUTE_SYSTEM.0 != 0
}

#[cfg(not(windows))]
fn is_system(_metadata: &Metadata) -> bool {
    false
}
