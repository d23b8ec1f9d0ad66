// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Markdown report output.
//!
//! Documents are written whole, overwriting any file of the same name.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::{PerfTablesError, PerfTablesResult};

/// Writes documents under a fixed output directory.
pub struct MarkdownReporter {
    output_dir: PathBuf,
}

impl MarkdownReporter {
    /// Create a reporter, creating the output directory if needed.
    pub fn new(output_dir: impl AsRef<Path>) -> PerfTablesResult<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir).map_err(|e| PerfTablesError::Io {
            context: "creating output directory",
            source: e,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save a document under its fixed file name.
    ///
    /// Returns the path to the written file.
    pub fn save(&self, document: &Document) -> PerfTablesResult<PathBuf> {
        let filepath = self.output_dir.join(document.file_name());
        fs::write(&filepath, &document.content).map_err(|e| PerfTablesError::Io {
            context: "writing markdown document",
            source: e,
        })?;

        tracing::info!(path = %filepath.display(), kind = %document.kind, "Saved document");
        Ok(filepath)
    }
}

/// Where generated documents go.
pub enum OutputTarget {
    /// Print each document to a writer (usually stdout).
    Print,
    /// Save each document as a file.
    Files(MarkdownReporter),
}

impl OutputTarget {
    /// Deliver a document. Returns the written path for file output.
    pub fn emit(
        &self,
        document: &Document,
        out: &mut impl Write,
    ) -> PerfTablesResult<Option<PathBuf>> {
        match self {
            OutputTarget::Print => {
                writeln!(out, "{}", document.content).map_err(|e| PerfTablesError::Io {
                    context: "printing markdown document",
                    source: e,
                })?;
                Ok(None)
            }
            OutputTarget::Files(reporter) => reporter.save(document).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentKind;
    use tempfile::TempDir;

    fn document(kind: DocumentKind, content: &str) -> Document {
        Document {
            kind,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = MarkdownReporter::new(temp_dir.path().join("tables")).unwrap();

        reporter.save(&document(DocumentKind::Summary, "first")).unwrap();
        let path = reporter.save(&document(DocumentKind::Summary, "second")).unwrap();

        assert_eq!(path, temp_dir.path().join("tables/README_performance_table.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_save_tier_with_separator() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = MarkdownReporter::new(temp_dir.path()).unwrap();
        let kind = DocumentKind::Tier {
            selector: "Tiny Test (100/50)".to_string(),
        };

        let path = reporter.save(&document(kind, "| a |")).unwrap();
        assert_eq!(path.parent(), Some(temp_dir.path()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "| a |");
    }

    #[test]
    fn test_print_target() {
        let mut out = Vec::new();
        let written = OutputTarget::Print
            .emit(&document(DocumentKind::Complete, "| a |"), &mut out)
            .unwrap();

        assert!(written.is_none());
        assert_eq!(String::from_utf8(out).unwrap(), "| a |\n");
    }
}
