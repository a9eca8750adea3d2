/// File categorisation based on normalized extensions.
///
/// Maps an extension to one of four coarse categories shown in rendered
/// file lines. The sets are fixed; anything unmatched is a plain file.

/// Coarse file category derived solely from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Image,
    Document,
    Archive,
    Other,
}

impl FileCategory {
    /// Short bracket label used in file entry lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "IMG",
            Self::Document => "DOC",
            Self::Archive => "ARC",
            Self::Other => "FILE",
        }
    }

    /// Classify a normalized extension (lowercase, leading dot, empty for
    /// extensionless files).
    ///
    /// Zero-heap-allocation hot path: input is lowercased into a fixed-size
    /// stack buffer (`[u8; 16]`) rather than allocating a `String`, so
    /// callers may also pass unnormalized case. Extensions longer than
    /// 16 bytes cannot match any known set.
    pub fn classify(ext: &str) -> Self {
        let bytes = ext.as_bytes();
        if bytes.len() > 16 {
            return Self::Other;
        }

        let mut lower = [0u8; 16];
        for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
            *dest = src.to_ascii_lowercase();
        }
        let lower_str = match std::str::from_utf8(&lower[..bytes.len()]) {
            Ok(s) => s,
            Err(_) => return Self::Other,
        };

        match lower_str {
            ".jpg" | ".jpeg" | ".png" | ".gif" | ".bmp" | ".tiff" | ".webp" => Self::Image,
            ".doc" | ".docx" | ".pdf" | ".txt" | ".rtf" | ".xlsx" | ".xls" | ".pptx" | ".ppt" => {
                Self::Document
            }
            ".zip" | ".rar" | ".7z" | ".tar" | ".gz" => Self::Archive,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_image_extensions() {
        for ext in &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp"] {
            assert_eq!(
                FileCategory::classify(ext),
                FileCategory::Image,
                "expected Image for {ext}"
            );
        }
    }

    #[test]
    fn classify_known_document_extensions() {
        for ext in &[".doc", ".docx", ".pdf", ".txt", ".rtf", ".xlsx", ".ppt"] {
            assert_eq!(
                FileCategory::classify(ext),
                FileCategory::Document,
                "expected Document for {ext}"
            );
        }
    }

    #[test]
    fn classify_known_archive_extensions() {
        for ext in &[".zip", ".rar", ".7z", ".tar", ".gz"] {
            assert_eq!(
                FileCategory::classify(ext),
                FileCategory::Archive,
                "expected Archive for {ext}"
            );
        }
    }

    #[test]
    fn classify_unknown_returns_other() {
        assert_eq!(FileCategory::classify(".xyz"), FileCategory::Other);
        assert_eq!(FileCategory::classify(""), FileCategory::Other);
        assert_eq!(FileCategory::classify(".averylongextensionname"), FileCategory::Other);
    }

    /// Matching must be case-insensitive so ".JPG" == ".jpg".
    #[test]
    fn classify_case_insensitive() {
        assert_eq!(FileCategory::classify(".JPG"), FileCategory::Image);
        assert_eq!(FileCategory::classify(".Pdf"), FileCategory::Document);
        assert_eq!(FileCategory::classify(".ZIP"), FileCategory::Archive);
    }

    #[test]
    fn labels_are_the_fixed_bracket_strings() {
        assert_eq!(FileCategory::Image.label(), "IMG");
        assert_eq!(FileCategory::Document.label(), "DOC");
        assert_eq!(FileCategory::Archive.label(), "ARC");
        assert_eq!(FileCategory::Other.label(), "FILE");
    }
}
