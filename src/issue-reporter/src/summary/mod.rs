//! Summary document loading.
//!
//! The summary is an opaque markdown document produced by the assessment
//! tooling. It is read once and used verbatim as the issue body.

mod document;
mod error;

pub use document::SummaryDocument;
pub use error::SummaryError;

use crate::config::SUMMARY_FILE_NAME;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads the summary document from `path`.
///
/// # Errors
///
/// Returns [`SummaryError::NotFound`] if the file does not exist, or
/// [`SummaryError::Io`] if it cannot be read as UTF-8 text.
pub fn load_summary(path: &Path) -> Result<SummaryDocument, SummaryError> {
    debug!(path = %path.display(), "Reading summary document");

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SummaryError::NotFound {
            path: path.display().to_string(),
        },
        _ => SummaryError::Io {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    let document = SummaryDocument::new(path.to_path_buf(), content);
    info!(
        path = %path.display(),
        characters = document.char_count(),
        "Loaded summary document"
    );
    Ok(document)
}

/// Returns the default summary location: `summary.md` next to the executable.
///
/// Falls back to the working directory when the executable path is unknown.
#[must_use]
pub fn default_summary_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(SUMMARY_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(SUMMARY_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn can_load_summary() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("summary.md");
        fs::write(&path, "# Assessment\n\nAll good.\n").unwrap();

        let document = load_summary(&path).unwrap();

        assert_eq!(document.content(), "# Assessment\n\nAll good.\n");
        assert_eq!(document.path(), path.as_path());
    }

    #[test]
    fn load_summary_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("summary.md");

        let result = load_summary(&path);
        assert!(matches!(result, Err(SummaryError::NotFound { .. })));
    }

    #[test]
    fn load_summary_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("summary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let result = load_summary(&path);
        assert!(matches!(result, Err(SummaryError::Io { .. })));
    }

    #[test]
    fn default_path_uses_summary_file_name() {
        let path = default_summary_path();
        assert_eq!(path.file_name().unwrap(), SUMMARY_FILE_NAME);
    }
}
