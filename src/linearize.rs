//! Flattening ordered text blocks into a single text stream.
//!
//! Linearization is the single source of truth for every text-shaped
//! export: the plain-text download, the paginated export (which interprets
//! the page-break marker as an explicit page break), and the structured
//! export (one paragraph per line) all start from this function and differ
//! only in post-processing.

use crate::block::TextBlock;
use crate::config::LayoutConfig;
use crate::layout::reading_order::sort_blocks;

/// Default marker emitted between pages.
pub const DEFAULT_PAGE_BREAK: &str = "\n\n";

/// Linearize blocks into reading-ordered plain text with the default
/// page-break marker.
///
/// # Examples
///
/// ```
/// use doclens::block::TextBlock;
/// use doclens::linearize::linearize;
///
/// let blocks = vec![TextBlock::new(1, "Hello"), TextBlock::new(2, "World")];
/// assert_eq!(linearize(&blocks), "Hello\n\nWorld");
/// ```
pub fn linearize(blocks: &[TextBlock]) -> String {
    linearize_with(blocks, DEFAULT_PAGE_BREAK)
}

/// Linearize blocks using the page-break marker configured on a
/// [`LayoutConfig`].
pub fn linearize_with_config(blocks: &[TextBlock], config: &LayoutConfig) -> String {
    linearize_with(blocks, &config.page_break_marker)
}

/// Linearize blocks into reading-ordered plain text.
///
/// Blocks are sorted into reading order first. Consecutive blocks on the
/// same page are joined with a single newline; when the page changes, the
/// page-break marker is emitted instead. No marker is ever emitted before
/// the first block, and an empty block set produces an empty string.
pub fn linearize_with(blocks: &[TextBlock], page_break: &str) -> String {
    let sorted = sort_blocks(blocks);

    let mut out = String::new();
    let mut last_page = 0;
    for (i, block) in sorted.iter().enumerate() {
        let page = block.page.max(1);
        if i > 0 {
            if page != last_page {
                out.push_str(page_break);
            } else {
                out.push('\n');
            }
        }
        out.push_str(&block.content);
        last_page = page;
    }
    out
}
