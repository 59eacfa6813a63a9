//! Token-level diffing of two linearized extraction texts.
//!
//! The diff is computed character-by-character over the full strings (not
//! per block), then passed through a semantic cleanup that merges fragmented
//! edits into coherent runs, so a single reworded phrase renders as one
//! highlight instead of confetti.
//!
//! Span tags are first-argument-relative: [`DiffOp::DeleteFromFirst`] marks
//! content the first string has that the second lacks,
//! [`DiffOp::InsertFromSecond`] the reverse. Swapping the arguments yields
//! the structurally mirrored result (Delete and Insert swap, Equal spans
//! are unchanged), which is what makes dual-pane rendering consistent.

mod cleanup;
mod myers;

/// Classification of a run of text produced by comparing two strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp {
    /// Present in both strings
    Equal,
    /// Present in the first string, absent from the second
    DeleteFromFirst,
    /// Absent from the first string, present in the second
    InsertFromSecond,
}

impl DiffOp {
    /// The role-swapped op, as seen from the other string's perspective.
    pub fn mirrored(self) -> Self {
        match self {
            DiffOp::Equal => DiffOp::Equal,
            DiffOp::DeleteFromFirst => DiffOp::InsertFromSecond,
            DiffOp::InsertFromSecond => DiffOp::DeleteFromFirst,
        }
    }
}

/// A labeled run of text produced by one diff run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSpan {
    /// How this run relates to the two input strings
    pub op: DiffOp,
    /// The run's text
    pub text: String,
}

impl DiffSpan {
    /// Create a new span.
    pub fn new(op: DiffOp, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }
}

/// Internal spans carry char vectors so cleanup can slice at character
/// boundaries without re-walking UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawSpan {
    pub(crate) op: DiffOp,
    pub(crate) text: Vec<char>,
}

impl RawSpan {
    pub(crate) fn equal(text: &[char]) -> Self {
        Self {
            op: DiffOp::Equal,
            text: text.to_vec(),
        }
    }

    pub(crate) fn delete(text: &[char]) -> Self {
        Self {
            op: DiffOp::DeleteFromFirst,
            text: text.to_vec(),
        }
    }

    pub(crate) fn insert(text: &[char]) -> Self {
        Self {
            op: DiffOp::InsertFromSecond,
            text: text.to_vec(),
        }
    }
}

/// Compute the cleaned character-level difference between two strings.
///
/// Total over any two strings, including empty ones. Deterministic, and
/// symmetric by construction: `diff(b, a)` is exactly the role-swapped image
/// of `diff(a, b)`. That property is guaranteed by always running the
/// underlying algorithm in one canonical argument order and mirroring the
/// spans for the other order.
///
/// # Examples
///
/// ```
/// use doclens::diff::{diff, DiffOp};
///
/// let spans = diff("the cat sat", "the dog sat");
/// assert!(spans.iter().any(|s| s.op == DiffOp::DeleteFromFirst));
/// assert!(spans.iter().any(|s| s.op == DiffOp::InsertFromSecond));
/// ```
pub fn diff(first: &str, second: &str) -> Vec<DiffSpan> {
    if first <= second {
        diff_directed(first, second)
    } else {
        let mut spans = diff_directed(second, first);
        for span in &mut spans {
            span.op = span.op.mirrored();
        }
        spans
    }
}

fn diff_directed(first: &str, second: &str) -> Vec<DiffSpan> {
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();

    let mut raw = myers::diff_slices(&a, &b);
    cleanup::semantic(&mut raw);

    log::debug!(
        "diff of {} x {} chars produced {} spans",
        a.len(),
        b.len(),
        raw.len()
    );

    raw.into_iter()
        .map(|span| DiffSpan {
            op: span.op,
            text: span.text.into_iter().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(spans: &[DiffSpan]) -> Vec<(DiffOp, &str)> {
        spans.iter().map(|s| (s.op, s.text.as_str())).collect()
    }

    #[test]
    fn test_identical_strings_yield_single_equal_span() {
        let spans = diff("same text", "same text");
        assert_eq!(ops(&spans), vec![(DiffOp::Equal, "same text")]);
    }

    #[test]
    fn test_both_empty_yields_no_spans() {
        assert!(diff("", "").is_empty());
    }

    #[test]
    fn test_insert_into_empty_first() {
        let spans = diff("", "abc");
        assert_eq!(ops(&spans), vec![(DiffOp::InsertFromSecond, "abc")]);
    }

    #[test]
    fn test_delete_to_empty_second() {
        let spans = diff("abc", "");
        assert_eq!(ops(&spans), vec![(DiffOp::DeleteFromFirst, "abc")]);
    }

    #[test]
    fn test_reconstructs_both_inputs() {
        let a = "The quick brown fox jumps over the lazy dog.";
        let b = "The quick red fox leaps over the dog!";
        let spans = diff(a, b);

        let rebuilt_a: String = spans
            .iter()
            .filter(|s| s.op != DiffOp::InsertFromSecond)
            .map(|s| s.text.as_str())
            .collect();
        let rebuilt_b: String = spans
            .iter()
            .filter(|s| s.op != DiffOp::DeleteFromFirst)
            .map(|s| s.text.as_str())
            .collect();

        assert_eq!(rebuilt_a, a);
        assert_eq!(rebuilt_b, b);
    }

    #[test]
    fn test_mirror_symmetry() {
        let a = "paragraph one\n\nparagraph two";
        let b = "paragraph 1\n\nparagraph two and more";
        let forward = diff(a, b);
        let backward = diff(b, a);

        assert_eq!(forward.len(), backward.len());
        for (f, r) in forward.iter().zip(&backward) {
            assert_eq!(f.op, r.op.mirrored());
            assert_eq!(f.text, r.text);
        }
    }

    #[test]
    fn test_semantic_cleanup_coalesces_fragmented_edits() {
        // A character-level diff of these would interleave tiny equalities
        // ("t", "e", ...); cleanup should collapse the rewording into one
        // delete/insert pair around the shared prefix and suffix.
        let spans = diff("The cat in the hat.", "The dog in the hat.");
        assert_eq!(
            ops(&spans),
            vec![
                (DiffOp::Equal, "The "),
                (DiffOp::DeleteFromFirst, "cat"),
                (DiffOp::InsertFromSecond, "dog"),
                (DiffOp::Equal, " in the hat."),
            ]
        );
    }

    #[test]
    fn test_unicode_content() {
        let spans = diff("naïve café", "naïve cafés");
        let rebuilt_b: String = spans
            .iter()
            .filter(|s| s.op != DiffOp::DeleteFromFirst)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(rebuilt_b, "naïve cafés");
    }

    #[test]
    fn test_mirrored_op_roundtrip() {
        assert_eq!(DiffOp::Equal.mirrored(), DiffOp::Equal);
        assert_eq!(
            DiffOp::DeleteFromFirst.mirrored(),
            DiffOp::InsertFromSecond
        );
        assert_eq!(
            DiffOp::InsertFromSecond.mirrored(),
            DiffOp::DeleteFromFirst
        );
    }
}
