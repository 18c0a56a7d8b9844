//! Document kinds and the plain-text source
//!
//! Only plain-text files are read here. Every other supported kind needs an
//! external extractor (or OCR) to produce a body; callers pass that body to
//! [`crate::suggest::Suggester`] directly.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::ExtractError;

/// Default cap on extracted body length, in characters
pub const DEFAULT_MAX_CHARS: usize = 4000;

/// Supported document kinds, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Txt,
    LegacyDoc,
    Docx,
    Pptx,
    Image,
    Xlsx,
    Pdf,
}

impl DocumentKind {
    /// Classify a path by its lower-cased extension
    ///
    /// A path without extension is treated as plain text.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = match path.extension() {
            Some(ext) => ext.to_string_lossy().to_lowercase(),
            None => return Some(Self::Txt),
        };
        Self::from_extension(&ext)
    }

    /// Classify an extension given without the leading dot
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "txt" | "" => Some(Self::Txt),
            "doc" => Some(Self::LegacyDoc),
            "docx" => Some(Self::Docx),
            "pptx" => Some(Self::Pptx),
            "png" | "jpg" | "jpeg" | "bmp" | "gif" | "tif" | "tiff" | "webp" => Some(Self::Image),
            "xlsx" => Some(Self::Xlsx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Returns `true` if the body can be read without an external extractor
    pub fn is_plain_text(&self) -> bool {
        matches!(self, Self::Txt)
    }
}

/// Keep at most `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

/// Read the body of a plain-text document, capped at `max_chars` characters
///
/// Bytes are decoded as UTF-8 with a leading BOM removed; invalid sequences
/// are replaced rather than rejected.
pub fn read_text(path: impl AsRef<Path>, max_chars: usize) -> Result<String, ExtractError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }

    let kind = DocumentKind::from_path(path).ok_or_else(|| {
        ExtractError::Unsupported(
            path.extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default(),
        )
    })?;
    if !kind.is_plain_text() {
        return Err(ExtractError::NeedsExternal {
            kind,
            path: PathBuf::from(path),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
    let text = String::from_utf8_lossy(bytes);

    Ok(truncate_chars(&text, max_chars).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(DocumentKind::from_path(Path::new("a.TXT")), Some(DocumentKind::Txt));
        assert_eq!(DocumentKind::from_path(Path::new("README")), Some(DocumentKind::Txt));
        assert_eq!(DocumentKind::from_path(Path::new("a.doc")), Some(DocumentKind::LegacyDoc));
        assert_eq!(DocumentKind::from_path(Path::new("a.docx")), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_path(Path::new("a.pptx")), Some(DocumentKind::Pptx));
        assert_eq!(DocumentKind::from_path(Path::new("scan.JPG")), Some(DocumentKind::Image));
        assert_eq!(DocumentKind::from_path(Path::new("a.xlsx")), Some(DocumentKind::Xlsx));
        assert_eq!(DocumentKind::from_path(Path::new("a.pdf")), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_path(Path::new("a.zip")), None);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("年度工作报告", 2), "年度");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_read_text_strips_bom_and_caps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"\xEF\xBB\xBFhello world").unwrap();

        assert_eq!(read_text(&path, 5).unwrap(), "hello");
        assert_eq!(read_text(&path, 100).unwrap(), "hello world");
    }

    #[test]
    fn test_read_text_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, b"ok\xFFok").unwrap();

        assert_eq!(read_text(&path, 100).unwrap(), "ok\u{FFFD}ok");
    }

    #[test]
    fn test_read_text_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = read_text(dir.path().join("missing.txt"), 10);
        assert!(matches!(missing, Err(ExtractError::NotFound(_))));

        let pdf = dir.path().join("paper.pdf");
        std::fs::write(&pdf, b"%PDF-1.4").unwrap();
        assert!(matches!(
            read_text(&pdf, 10),
            Err(ExtractError::NeedsExternal {
                kind: DocumentKind::Pdf,
                ..
            })
        ));

        let zip = dir.path().join("archive.zip");
        std::fs::write(&zip, b"PK").unwrap();
        assert!(matches!(read_text(&zip, 10), Err(ExtractError::Unsupported(_))));
    }
}
