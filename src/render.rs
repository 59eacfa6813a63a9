//! Safely-escaped markup rendering of diff spans for side-by-side panes.
//!
//! Diff spans contain arbitrary extracted document text, which is untrusted
//! input: every span is escaped here before wrapping, so the downstream
//! markup renderer can be configured to trust the output without executing
//! injected tags. The renderer must not re-escape it.
//!
//! Highlighting follows a single first-argument-relative convention for
//! both panes: in the pane for document A compared against B,
//! `DeleteFromFirst` spans (content A has that B lacks) get the delete
//! style, and `InsertFromSecond` spans (content B has that A lacks) are
//! rendered inline with the insert style to show what is "missing" relative
//! to B. The pane for B uses `diff(B, A)`, so the same tag semantics apply
//! relative to B.

use crate::diff::{diff, DiffOp, DiffSpan};

/// Escape `&`, `<` and `>` so extracted text cannot inject markup.
///
/// Unconditional and total over any string input.
///
/// # Examples
///
/// ```
/// use doclens::render::escape_markup;
///
/// assert_eq!(escape_markup("AT&T <Company>"), "AT&amp;T &lt;Company&gt;");
/// ```
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render diff spans into one pane's markup.
///
/// `Equal` spans pass through as plain escaped text; `DeleteFromFirst` and
/// `InsertFromSecond` spans are wrapped in `<span>` elements carrying the
/// given style classes.
pub fn render_spans(spans: &[DiffSpan], delete_style: &str, insert_style: &str) -> String {
    let mut markup = String::new();
    for span in spans {
        let escaped = escape_markup(&span.text);
        match span.op {
            DiffOp::Equal => markup.push_str(&escaped),
            DiffOp::DeleteFromFirst => {
                markup.push_str(&format!(
                    "<span class=\"{}\">{}</span>",
                    delete_style, escaped
                ));
            },
            DiffOp::InsertFromSecond => {
                markup.push_str(&format!(
                    "<span class=\"{}\">{}</span>",
                    insert_style, escaped
                ));
            },
        }
    }
    markup
}

/// The two rendered panes of a side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPanes {
    /// Markup for the first document's pane (`diff(first, second)`)
    pub first: String,
    /// Markup for the second document's pane (`diff(second, first)`)
    pub second: String,
}

/// Render both panes of a comparison between two linearized texts.
///
/// The first pane highlights the first text's view of the difference, the
/// second pane the mirrored view; both use the same delete/insert styles.
pub fn render_panes(
    first: &str,
    second: &str,
    delete_style: &str,
    insert_style: &str,
) -> ComparisonPanes {
    let forward = diff(first, second);
    let backward = diff(second, first);
    ComparisonPanes {
        first: render_spans(&forward, delete_style, insert_style),
        second: render_spans(&backward, delete_style, insert_style),
    }
}
