//! Text-shaped exports built on linearization.
//!
//! Every export path starts from the same reading-ordered linearization and
//! differs only in post-processing: the plain-text download uses it
//! verbatim, the paginated export re-interprets the page-break marker as an
//! explicit page break, and the structured export splits it into
//! paragraphs.

pub mod paged;
pub mod structured;

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::block::TextBlock;
use crate::error::Result;
use crate::linearize::linearize;

lazy_static! {
    /// Matches a trailing file extension, including the dot
    static ref RE_EXTENSION: Regex = Regex::new(r"\.[^.]+$").unwrap();
}

/// Derive an export file name from the source document's name by replacing
/// its extension.
///
/// # Examples
///
/// ```
/// use doclens::export::export_file_name;
///
/// assert_eq!(export_file_name("report.pdf", "txt"), "report.txt");
/// assert_eq!(export_file_name("archive.tar.gz", "txt"), "archive.tar.txt");
/// assert_eq!(export_file_name("no_extension", "txt"), "no_extension.txt");
/// ```
pub fn export_file_name(source_name: &str, extension: &str) -> String {
    let stem = RE_EXTENSION.replace(source_name, "");
    format!("{}.{}", stem, extension)
}

/// The plain-text export: reading-ordered UTF-8 text with the default
/// page-break marker.
pub fn plain_text(blocks: &[TextBlock]) -> String {
    linearize(blocks)
}

/// Write the plain-text export to disk.
pub fn write_plain_text(blocks: &[TextBlock], path: impl AsRef<Path>) -> Result<()> {
    let text = plain_text(blocks);
    log::debug!(
        "writing {} bytes of plain text to {}",
        text.len(),
        path.as_ref().display()
    );
    std::fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_replaces_extension() {
        assert_eq!(export_file_name("document.pdf", "txt"), "document.txt");
        assert_eq!(export_file_name("scan.jpeg", "docx"), "scan.docx");
    }

    #[test]
    fn test_export_file_name_without_extension() {
        assert_eq!(export_file_name("document", "txt"), "document.txt");
    }

    #[test]
    fn test_plain_text_uses_linearization() {
        let blocks = vec![TextBlock::new(1, "Hello"), TextBlock::new(2, "World")];
        assert_eq!(plain_text(&blocks), "Hello\n\nWorld");
    }

    #[test]
    fn test_write_plain_text_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let blocks = vec![TextBlock::new(1, "a"), TextBlock::new(1, "b")];
        write_plain_text(&blocks, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb");
    }
}
