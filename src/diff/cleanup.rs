//! Semantic cleanup of raw diff spans.
//!
//! Character-level diffs are optimal but noisy: a single reworded phrase
//! comes back as a run of alternating one-character spans. The passes here
//! merge adjacent spans of one kind, factor shared prefixes/suffixes out of
//! delete/insert pairs, discard equalities that are smaller than the edits
//! around them, and split overlapping delete/insert pairs on their shared
//! middle.

use super::myers::{common_prefix, common_suffix};
use super::{DiffOp, RawSpan};

/// Run the full cleanup pipeline in place.
pub(crate) fn semantic(spans: &mut Vec<RawSpan>) {
    merge(spans);
    if eliminate_small_equalities(spans) {
        merge(spans);
    }
    resolve_overlaps(spans);
}

/// Merge adjacent spans of the same kind and factor common prefixes and
/// suffixes out of delete/insert runs into the neighboring equalities.
fn merge(spans: &mut Vec<RawSpan>) {
    spans.retain(|s| !s.text.is_empty());

    // Sentinel equality so the loop flushes the final edit run.
    spans.push(RawSpan {
        op: DiffOp::Equal,
        text: Vec::new(),
    });

    let mut pointer = 0usize;
    let mut count_delete = 0usize;
    let mut count_insert = 0usize;
    let mut text_delete: Vec<char> = Vec::new();
    let mut text_insert: Vec<char> = Vec::new();

    while pointer < spans.len() {
        match spans[pointer].op {
            DiffOp::InsertFromSecond => {
                count_insert += 1;
                text_insert.extend_from_slice(&spans[pointer].text);
                pointer += 1;
            },
            DiffOp::DeleteFromFirst => {
                count_delete += 1;
                text_delete.extend_from_slice(&spans[pointer].text);
                pointer += 1;
            },
            DiffOp::Equal => {
                if count_delete + count_insert > 1 {
                    if count_delete != 0 && count_insert != 0 {
                        let prefix_len = common_prefix(&text_insert, &text_delete);
                        if prefix_len > 0 {
                            let run_start = pointer - count_delete - count_insert;
                            if run_start > 0 && spans[run_start - 1].op == DiffOp::Equal {
                                let prefix = text_insert[..prefix_len].to_vec();
                                spans[run_start - 1].text.extend(prefix);
                            } else {
                                spans.insert(
                                    0,
                                    RawSpan {
                                        op: DiffOp::Equal,
                                        text: text_insert[..prefix_len].to_vec(),
                                    },
                                );
                                pointer += 1;
                            }
                            text_insert.drain(..prefix_len);
                            text_delete.drain(..prefix_len);
                        }
                        let suffix_len = common_suffix(&text_insert, &text_delete);
                        if suffix_len > 0 {
                            let mut merged = text_insert[text_insert.len() - suffix_len..].to_vec();
                            merged.append(&mut spans[pointer].text);
                            spans[pointer].text = merged;
                            text_insert.truncate(text_insert.len() - suffix_len);
                            text_delete.truncate(text_delete.len() - suffix_len);
                        }
                    }
                    // Collapse the run into at most one delete plus one insert
                    let run_start = pointer - count_delete - count_insert;
                    spans.drain(run_start..pointer);
                    pointer = run_start;
                    if !text_delete.is_empty() {
                        spans.insert(
                            pointer,
                            RawSpan {
                                op: DiffOp::DeleteFromFirst,
                                text: std::mem::take(&mut text_delete),
                            },
                        );
                        pointer += 1;
                    }
                    if !text_insert.is_empty() {
                        spans.insert(
                            pointer,
                            RawSpan {
                                op: DiffOp::InsertFromSecond,
                                text: std::mem::take(&mut text_insert),
                            },
                        );
                        pointer += 1;
                    }
                    pointer += 1;
                } else if pointer != 0 && spans[pointer - 1].op == DiffOp::Equal {
                    // Fold into the previous equality
                    let text = std::mem::take(&mut spans[pointer].text);
                    spans[pointer - 1].text.extend(text);
                    spans.remove(pointer);
                } else {
                    pointer += 1;
                }
                count_delete = 0;
                count_insert = 0;
                text_delete.clear();
                text_insert.clear();
            },
        }
    }

    if spans.last().map(|s| s.text.is_empty()).unwrap_or(false) {
        spans.pop();
    }

    // Shift single edits sandwiched between equalities sideways when that
    // lets them merge with a neighbor: A<ins>BA</ins>C becomes <ins>AB</ins>AC.
    let mut changes = false;
    let mut pointer = 1usize;
    while pointer + 1 < spans.len() {
        if spans[pointer - 1].op == DiffOp::Equal && spans[pointer + 1].op == DiffOp::Equal {
            let prev_len = spans[pointer - 1].text.len();
            let next_len = spans[pointer + 1].text.len();
            if spans[pointer].text.len() >= prev_len
                && spans[pointer].text[spans[pointer].text.len() - prev_len..]
                    == spans[pointer - 1].text[..]
            {
                // Edit ends with the previous equality: shift left
                let prev = spans[pointer - 1].text.clone();
                let edit_len = spans[pointer].text.len();
                let mut shifted = prev.clone();
                shifted.extend_from_slice(&spans[pointer].text[..edit_len - prev_len]);
                spans[pointer].text = shifted;
                let mut next = prev;
                next.append(&mut spans[pointer + 1].text);
                spans[pointer + 1].text = next;
                spans.remove(pointer - 1);
                changes = true;
            } else if spans[pointer].text.len() >= next_len
                && spans[pointer].text[..next_len] == spans[pointer + 1].text[..]
            {
                // Edit starts with the next equality: shift right
                let next = spans[pointer + 1].text.clone();
                spans[pointer - 1].text.extend_from_slice(&next);
                let mut shifted = spans[pointer].text[next_len..].to_vec();
                shifted.extend_from_slice(&next);
                spans[pointer].text = shifted;
                spans.remove(pointer + 1);
                changes = true;
            } else {
                pointer += 1;
            }
        } else {
            pointer += 1;
        }
    }
    if changes {
        merge(spans);
    }
}

/// Discard equalities that are no larger than the edits on both sides,
/// reclassifying them as a delete plus an insert so the surrounding edits
/// coalesce into one coherent run.
fn eliminate_small_equalities(spans: &mut Vec<RawSpan>) -> bool {
    let mut changes = false;
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<Vec<char>> = None;
    let mut pointer = 0usize;
    // Edit sizes on either side of the candidate equality
    let mut len_insertions1 = 0usize;
    let mut len_deletions1 = 0usize;
    let mut len_insertions2 = 0usize;
    let mut len_deletions2 = 0usize;

    while pointer < spans.len() {
        if spans[pointer].op == DiffOp::Equal {
            equalities.push(pointer);
            len_insertions1 = len_insertions2;
            len_deletions1 = len_deletions2;
            len_insertions2 = 0;
            len_deletions2 = 0;
            last_equality = Some(spans[pointer].text.clone());
            pointer += 1;
            continue;
        }

        if spans[pointer].op == DiffOp::InsertFromSecond {
            len_insertions2 += spans[pointer].text.len();
        } else {
            len_deletions2 += spans[pointer].text.len();
        }

        let mut eliminated = false;
        if let Some(eq) = &last_equality {
            if !eq.is_empty()
                && eq.len() <= len_insertions1.max(len_deletions1)
                && eq.len() <= len_insertions2.max(len_deletions2)
            {
                if let Some(&eq_index) = equalities.last() {
                    // Duplicate the equality as a deletion and flip the
                    // original into an insertion
                    spans.insert(
                        eq_index,
                        RawSpan {
                            op: DiffOp::DeleteFromFirst,
                            text: eq.clone(),
                        },
                    );
                    spans[eq_index + 1].op = DiffOp::InsertFromSecond;
                    equalities.pop();
                    // The previous equality needs re-examination too
                    equalities.pop();
                    pointer = equalities.last().map(|&i| i + 1).unwrap_or(0);
                    len_insertions1 = 0;
                    len_deletions1 = 0;
                    len_insertions2 = 0;
                    len_deletions2 = 0;
                    eliminated = true;
                    changes = true;
                }
            }
        }
        if eliminated {
            last_equality = None;
        } else {
            pointer += 1;
        }
    }

    changes
}

/// Split overlapping delete/insert pairs on their shared middle:
/// `delete("abcxxx"), insert("xxxdef")` becomes
/// `delete("abc"), equal("xxx"), insert("def")`.
fn resolve_overlaps(spans: &mut Vec<RawSpan>) {
    let mut pointer = 1usize;
    while pointer < spans.len() {
        if spans[pointer - 1].op == DiffOp::DeleteFromFirst
            && spans[pointer].op == DiffOp::InsertFromSecond
        {
            let deletion = spans[pointer - 1].text.clone();
            let insertion = spans[pointer].text.clone();
            let overlap1 = overlap_length(&deletion, &insertion);
            let overlap2 = overlap_length(&insertion, &deletion);
            if overlap1 >= overlap2 {
                if overlap1 * 2 >= deletion.len() || overlap1 * 2 >= insertion.len() {
                    spans.insert(
                        pointer,
                        RawSpan {
                            op: DiffOp::Equal,
                            text: insertion[..overlap1].to_vec(),
                        },
                    );
                    spans[pointer - 1].text = deletion[..deletion.len() - overlap1].to_vec();
                    spans[pointer + 1].text = insertion[overlap1..].to_vec();
                    pointer += 1;
                }
            } else if overlap2 * 2 >= deletion.len() || overlap2 * 2 >= insertion.len() {
                // Reverse overlap: the insertion's tail matches the
                // deletion's head
                spans.insert(
                    pointer,
                    RawSpan {
                        op: DiffOp::Equal,
                        text: deletion[..overlap2].to_vec(),
                    },
                );
                spans[pointer - 1] = RawSpan {
                    op: DiffOp::InsertFromSecond,
                    text: insertion[..insertion.len() - overlap2].to_vec(),
                };
                spans[pointer + 1] = RawSpan {
                    op: DiffOp::DeleteFromFirst,
                    text: deletion[overlap2..].to_vec(),
                };
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }
}

/// Length of the longest suffix of `a` that is a prefix of `b`.
fn overlap_length(a: &[char], b: &[char]) -> usize {
    let max = a.len().min(b.len());
    for len in (1..=max).rev() {
        if a[a.len() - len..] == b[..len] {
            return len;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn equal(s: &str) -> RawSpan {
        RawSpan {
            op: DiffOp::Equal,
            text: chars(s),
        }
    }

    fn delete(s: &str) -> RawSpan {
        RawSpan {
            op: DiffOp::DeleteFromFirst,
            text: chars(s),
        }
    }

    fn insert(s: &str) -> RawSpan {
        RawSpan {
            op: DiffOp::InsertFromSecond,
            text: chars(s),
        }
    }

    #[test]
    fn test_merge_adjacent_same_op() {
        let mut spans = vec![equal("a"), equal("b"), equal("c")];
        merge(&mut spans);
        assert_eq!(spans, vec![equal("abc")]);

        let mut spans = vec![delete("a"), delete("b"), insert("x"), insert("y")];
        merge(&mut spans);
        assert_eq!(spans, vec![delete("ab"), insert("xy")]);
    }

    #[test]
    fn test_merge_factors_common_prefix_and_suffix() {
        let mut spans = vec![equal("x"), delete("abc"), insert("abz"), equal("y")];
        merge(&mut spans);
        assert_eq!(spans, vec![equal("xab"), delete("c"), insert("z"), equal("y")]);

        let mut spans = vec![delete("cba"), insert("zba"), equal("y")];
        merge(&mut spans);
        assert_eq!(spans, vec![delete("c"), insert("z"), equal("bay")]);
    }

    #[test]
    fn test_merge_drops_empty_spans() {
        let mut spans = vec![equal("a"), delete(""), equal("b")];
        merge(&mut spans);
        assert_eq!(spans, vec![equal("ab")]);
    }

    #[test]
    fn test_merge_shifts_edit_left() {
        let mut spans = vec![equal("a"), insert("ba"), equal("c")];
        merge(&mut spans);
        assert_eq!(spans, vec![insert("ab"), equal("ac")]);
    }

    #[test]
    fn test_merge_shifts_edit_right() {
        let mut spans = vec![equal("c"), insert("ab"), equal("a")];
        merge(&mut spans);
        assert_eq!(spans, vec![equal("ca"), insert("ba")]);
    }

    #[test]
    fn test_eliminate_small_equality() {
        let mut spans = vec![delete("a"), equal("b"), delete("c")];
        semantic(&mut spans);
        assert_eq!(spans, vec![delete("abc"), insert("b")]);
    }

    #[test]
    fn test_keeps_large_equality() {
        let mut spans = vec![delete("a"), equal("a long shared stretch"), insert("b")];
        semantic(&mut spans);
        assert_eq!(
            spans,
            vec![delete("a"), equal("a long shared stretch"), insert("b")]
        );
    }

    #[test]
    fn test_resolve_overlap() {
        let mut spans = vec![delete("abcxxx"), insert("xxxdef")];
        resolve_overlaps(&mut spans);
        assert_eq!(spans, vec![delete("abc"), equal("xxx"), insert("def")]);
    }

    #[test]
    fn test_resolve_reverse_overlap() {
        let mut spans = vec![delete("xxxabc"), insert("defxxx")];
        resolve_overlaps(&mut spans);
        assert_eq!(spans, vec![insert("def"), equal("xxx"), delete("abc")]);
    }

    #[test]
    fn test_overlap_length() {
        assert_eq!(overlap_length(&chars("abcxxx"), &chars("xxxdef")), 3);
        assert_eq!(overlap_length(&chars("abc"), &chars("xyz")), 0);
        assert_eq!(overlap_length(&chars("fi"), &chars("i")), 1);
    }
}
