/// Tree rendering — box-drawing lines appended during the walk, finalized
/// once with a prepended summary block.
pub mod export;
pub mod summary;

use crate::model::ScanStats;
use serde::Serialize;

/// Branch glyph for the last sibling at a level.
pub const BRANCH_LAST: &str = "└── ";
/// Branch glyph for a non-last sibling.
pub const BRANCH_MID: &str = "├── ";
/// Child-prefix continuation under a last sibling.
pub const INDENT_BLANK: &str = "    ";
/// Child-prefix continuation under a non-last sibling.
pub const INDENT_RULE: &str = "│   ";

/// Branch glyph for a sibling position.
pub fn branch_glyph(is_last: bool) -> &'static str {
    if is_last {
        BRANCH_LAST
    } else {
        BRANCH_MID
    }
}

/// Append-only sequence of rendered tree lines.
///
/// Owned exclusively by the scan worker for the run's duration; lines are
/// appended strictly in pre-order traversal order. The buffer is consumed
/// once, either by finalization or by being dropped on cancellation.
#[derive(Debug, Default)]
pub struct RenderBuffer {
    lines: Vec<String>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join into the final text body, one `\n` after every line.
    pub fn into_text(self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Immutable output snapshot of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Summary header plus tree body. UTF-8, `\n` line endings.
    pub text: String,
    pub stats: ScanStats,
}
