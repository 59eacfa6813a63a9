//! Structured export: one paragraph per linearized line.
//!
//! Target formats with their own paragraph model get one paragraph per
//! line of the linearization. Page-break markers have no native equivalent
//! and are dropped: pages are joined with the same single newline as
//! same-page blocks before splitting.

use crate::block::TextBlock;
use crate::linearize::linearize_with;

/// One paragraph of the structured export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// The paragraph's text
    pub text: String,
}

/// Split blocks into paragraphs, one per linearized line.
pub fn paragraphs(blocks: &[TextBlock]) -> Vec<Paragraph> {
    if blocks.is_empty() {
        return Vec::new();
    }
    // A bare newline as page break collapses page boundaries into ordinary
    // line separators, which is exactly "markers dropped"
    linearize_with(blocks, "\n")
        .split('\n')
        .map(|line| Paragraph {
            text: line.to_string(),
        })
        .collect()
}
