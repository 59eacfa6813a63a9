//! Paginated export: linearized text broken into printable pages.
//!
//! The page-break marker from linearization is recognized as an explicit
//! page-break instruction rather than printed text. Lines are wrapped to
//! the target page's printable width; a page that runs out of line capacity
//! overflows onto a fresh one. The output is plain wrapped lines per page,
//! ready to hand to an actual page writer.

use crate::block::TextBlock;
use crate::linearize::linearize_with;

/// Sentinel line emitted between pages; recognized as a page break, never
/// printed.
pub const PAGE_BREAK_SENTINEL: &str = "--- Page Break ---";

/// Printable dimensions of a target page, in characters and lines.
///
/// Defaults approximate an A4 page at a 12pt monospaced face with generous
/// margins.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    /// Maximum characters per wrapped line
    pub max_chars_per_line: usize,
    /// Maximum lines per page
    pub max_lines_per_page: usize,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            max_chars_per_line: 90,
            max_lines_per_page: 52,
        }
    }
}

/// One page of wrapped export lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportPage {
    /// The page's lines, top to bottom
    pub lines: Vec<String>,
}

/// Break blocks into printable pages.
///
/// Every source page boundary forces a new export page; within a page,
/// lines wrap at the spec's width and overflow onto fresh pages when the
/// line capacity runs out. An empty block set produces no pages.
pub fn paginate(blocks: &[TextBlock], spec: &PageSpec) -> Vec<ExportPage> {
    if blocks.is_empty() {
        return Vec::new();
    }
    let marker = format!("\n\n{}\n\n", PAGE_BREAK_SENTINEL);
    let text = linearize_with(blocks, &marker);

    let mut pages = vec![ExportPage::default()];
    for line in text.split('\n') {
        if line == PAGE_BREAK_SENTINEL {
            pages.push(ExportPage::default());
            continue;
        }
        for wrapped in wrap_line(line, spec.max_chars_per_line) {
            if pages
                .last()
                .map(|p| p.lines.len() >= spec.max_lines_per_page)
                .unwrap_or(false)
            {
                pages.push(ExportPage::default());
            }
            if let Some(page) = pages.last_mut() {
                page.lines.push(wrapped);
            }
        }
    }
    log::debug!("paginated {} blocks into {} pages", blocks.len(), pages.len());
    pages
}

/// Greedy word wrap by character count; overlong words are hard-split.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 || line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in line.split(' ') {
        let word_len = word.chars().count();
        if current_len == 0 {
            place_word(word, word_len, width, &mut lines, &mut current, &mut current_len);
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
            place_word(word, word_len, width, &mut lines, &mut current, &mut current_len);
        }
    }
    lines.push(current);
    lines
}

/// Start a fresh wrapped line with `word`, hard-splitting it if it exceeds
/// the width on its own.
fn place_word(
    word: &str,
    word_len: usize,
    width: usize,
    lines: &mut Vec<String>,
    current: &mut String,
    current_len: &mut usize,
) {
    if word_len <= width {
        current.push_str(word);
        *current_len = word_len;
        return;
    }
    let chars: Vec<char> = word.chars().collect();
    let mut start = 0;
    while chars.len() - start > width {
        lines.push(chars[start..start + width].iter().collect());
        start += width;
    }
    *current = chars[start..].iter().collect();
    *current_len = chars.len() - start;
}
