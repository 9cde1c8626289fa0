//! Loaded summary document.

use std::path::{Path, PathBuf};

/// The summary text that becomes the issue body.
#[derive(Debug, Clone)]
pub struct SummaryDocument {
    path: PathBuf,
    content: String,
}

impl SummaryDocument {
    /// Wraps already loaded summary text.
    #[must_use]
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }

    /// Path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Document text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in characters, as shown to the user.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Consumes the document, returning its text.
    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_not_bytes() {
        let document = SummaryDocument::new(PathBuf::from("summary.md"), "✅ ok".to_string());

        assert_eq!(document.char_count(), 4);
        assert_eq!(document.content().len(), 6);
    }
}
