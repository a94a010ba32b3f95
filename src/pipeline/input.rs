//! Input stage: load the Markdown source into memory.
//!
//! The file is read whole and must be valid UTF-8. `NotFound` gets its own
//! error variant so the user sees a plain "not found" message; every other
//! failure keeps the underlying `io::Error` as its source.

use crate::error::Md2HtmlError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read the whole Markdown file at `path` as UTF-8 text.
pub fn read_markdown(path: &Path) -> Result<String, Md2HtmlError> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!("Read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Md2HtmlError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Md2HtmlError::InputReadFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_utf8_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "# Olá, mundo\n").unwrap();

        assert_eq!(read_markdown(&path).unwrap(), "# Olá, mundo\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");

        let err = read_markdown(&path).unwrap_err();
        assert!(matches!(err, Md2HtmlError::InputNotFound { .. }));
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn invalid_utf8_is_read_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.md");
        std::fs::write(&path, [0x23, 0x20, 0xE9, 0xFF, 0x0A]).unwrap();

        let err = read_markdown(&path).unwrap_err();
        assert!(matches!(err, Md2HtmlError::InputReadFailed { .. }), "got: {err:?}");
    }

    #[test]
    fn directory_is_read_failure() {
        let dir = TempDir::new().unwrap();

        let err = read_markdown(dir.path()).unwrap_err();
        assert!(matches!(err, Md2HtmlError::InputReadFailed { .. }), "got: {err:?}");
    }
}
