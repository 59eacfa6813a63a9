//! Character-level diff core (Myers' O(ND) algorithm with bisection).
//!
//! Operates on char slices and returns raw spans; semantic cleanup happens
//! afterwards in [`super::cleanup`]. The bisection variant finds the middle
//! of an optimal edit path in linear space and recurses on both halves.

use super::RawSpan;

/// Diff two char slices into raw spans.
pub(crate) fn diff_slices(a: &[char], b: &[char]) -> Vec<RawSpan> {
    if a == b {
        if a.is_empty() {
            return Vec::new();
        }
        return vec![RawSpan::equal(a)];
    }

    // Peel off shared prefix and suffix; the algorithm only needs to look
    // at the differing core.
    let prefix = common_prefix(a, b);
    let suffix = common_suffix(&a[prefix..], &b[prefix..]);
    let core_a = &a[prefix..a.len() - suffix];
    let core_b = &b[prefix..b.len() - suffix];

    let mut spans = Vec::new();
    if prefix > 0 {
        spans.push(RawSpan::equal(&a[..prefix]));
    }
    spans.extend(compute(core_a, core_b));
    if suffix > 0 {
        spans.push(RawSpan::equal(&a[a.len() - suffix..]));
    }
    spans
}

/// Diff two cores that share no common prefix or suffix.
fn compute(a: &[char], b: &[char]) -> Vec<RawSpan> {
    if a.is_empty() {
        return vec![RawSpan::insert(b)];
    }
    if b.is_empty() {
        return vec![RawSpan::delete(a)];
    }

    if a.len() > b.len() {
        if let Some(i) = find_subslice(a, b) {
            // b sits whole inside a: pure deletions around one equality
            let mut spans = Vec::new();
            if i > 0 {
                spans.push(RawSpan::delete(&a[..i]));
            }
            spans.push(RawSpan::equal(b));
            if i + b.len() < a.len() {
                spans.push(RawSpan::delete(&a[i + b.len()..]));
            }
            return spans;
        }
        if b.len() == 1 {
            // Single char not present in a: no commonality possible
            return vec![RawSpan::delete(a), RawSpan::insert(b)];
        }
    } else {
        if let Some(i) = find_subslice(b, a) {
            let mut spans = Vec::new();
            if i > 0 {
                spans.push(RawSpan::insert(&b[..i]));
            }
            spans.push(RawSpan::equal(a));
            if i + a.len() < b.len() {
                spans.push(RawSpan::insert(&b[i + a.len()..]));
            }
            return spans;
        }
        if a.len() == 1 {
            return vec![RawSpan::delete(a), RawSpan::insert(b)];
        }
    }

    bisect(a, b)
}

/// Walk forward and reverse D-paths simultaneously until they overlap, then
/// split the problem at the crossover and recurse.
fn bisect(a: &[char], b: &[char]) -> Vec<RawSpan> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max_d = (n + m + 1) / 2;
    let v_offset = max_d;
    let v_len = (2 * max_d + 2) as usize;

    let mut v1 = vec![-1isize; v_len];
    let mut v2 = vec![-1isize; v_len];
    v1[(v_offset + 1) as usize] = 0;
    v2[(v_offset + 1) as usize] = 0;

    let delta = n - m;
    // With an odd delta the forward path detects the overlap; with an even
    // delta the reverse path does.
    let front = delta % 2 != 0;

    let mut k1start: isize = 0;
    let mut k1end: isize = 0;
    let mut k2start: isize = 0;
    let mut k2end: isize = 0;

    for d in 0..max_d {
        // Forward path
        let mut k1 = -d + k1start;
        while k1 <= d - k1end {
            let k1_offset = (v_offset + k1) as usize;
            let mut x1 = if k1 == -d || (k1 != d && v1[k1_offset - 1] < v1[k1_offset + 1]) {
                v1[k1_offset + 1]
            } else {
                v1[k1_offset - 1] + 1
            };
            let mut y1 = x1 - k1;
            while x1 < n && y1 < m && a[x1 as usize] == b[y1 as usize] {
                x1 += 1;
                y1 += 1;
            }
            v1[k1_offset] = x1;
            if x1 > n {
                // Ran off the right of the graph
                k1end += 2;
            } else if y1 > m {
                // Ran off the bottom of the graph
                k1start += 2;
            } else if front {
                let k2_offset = v_offset + delta - k1;
                if k2_offset >= 0 && (k2_offset as usize) < v_len && v2[k2_offset as usize] != -1 {
                    let x2 = n - v2[k2_offset as usize];
                    if x1 >= x2 {
                        return split(a, b, x1 as usize, y1 as usize);
                    }
                }
            }
            k1 += 2;
        }

        // Reverse path
        let mut k2 = -d + k2start;
        while k2 <= d - k2end {
            let k2_offset = (v_offset + k2) as usize;
            let mut x2 = if k2 == -d || (k2 != d && v2[k2_offset - 1] < v2[k2_offset + 1]) {
                v2[k2_offset + 1]
            } else {
                v2[k2_offset - 1] + 1
            };
            let mut y2 = x2 - k2;
            while x2 < n && y2 < m && a[(n - x2 - 1) as usize] == b[(m - y2 - 1) as usize] {
                x2 += 1;
                y2 += 1;
            }
            v2[k2_offset] = x2;
            if x2 > n {
                k2end += 2;
            } else if y2 > m {
                k2start += 2;
            } else if !front {
                let k1_offset = v_offset + delta - k2;
                if k1_offset >= 0 && (k1_offset as usize) < v_len && v1[k1_offset as usize] != -1 {
                    let x1 = v1[k1_offset as usize];
                    let y1 = v_offset + x1 - k1_offset;
                    if x1 >= n - x2 {
                        return split(a, b, x1 as usize, y1 as usize);
                    }
                }
            }
            k2 += 2;
        }
    }

    // The paths never overlapped: the inputs share nothing
    vec![RawSpan::delete(a), RawSpan::insert(b)]
}

fn split(a: &[char], b: &[char], x: usize, y: usize) -> Vec<RawSpan> {
    let mut spans = diff_slices(&a[..x], &b[..y]);
    spans.extend(diff_slices(&a[x..], &b[y..]));
    spans
}

pub(crate) fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

pub(crate) fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

fn find_subslice(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffOp;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn rebuild(spans: &[RawSpan], keep: fn(DiffOp) -> bool) -> String {
        spans
            .iter()
            .filter(|s| keep(s.op))
            .flat_map(|s| s.text.iter())
            .collect()
    }

    fn assert_valid_diff(a: &str, b: &str) {
        let spans = diff_slices(&chars(a), &chars(b));
        let rebuilt_a = rebuild(&spans, |op| op != DiffOp::InsertFromSecond);
        let rebuilt_b = rebuild(&spans, |op| op != DiffOp::DeleteFromFirst);
        assert_eq!(rebuilt_a, a, "first input must be reconstructable");
        assert_eq!(rebuilt_b, b, "second input must be reconstructable");
    }

    #[test]
    fn test_equal_inputs() {
        let spans = diff_slices(&chars("abc"), &chars("abc"));
        assert_eq!(spans, vec![RawSpan::equal(&chars("abc"))]);
    }

    #[test]
    fn test_containment_shortcut() {
        let spans = diff_slices(&chars("abcdef"), &chars("cd"));
        assert_eq!(
            spans,
            vec![
                RawSpan::delete(&chars("ab")),
                RawSpan::equal(&chars("cd")),
                RawSpan::delete(&chars("ef")),
            ]
        );
    }

    #[test]
    fn test_no_commonality() {
        let spans = diff_slices(&chars("abc"), &chars("xyz"));
        assert_eq!(
            spans,
            vec![RawSpan::delete(&chars("abc")), RawSpan::insert(&chars("xyz"))]
        );
    }

    #[test]
    fn test_prefix_suffix_peeling() {
        let spans = diff_slices(&chars("start middle end"), &chars("start changed end"));
        assert_eq!(spans[0], RawSpan::equal(&chars("start ")));
        assert_eq!(spans[spans.len() - 1].op, DiffOp::Equal);
    }

    #[test]
    fn test_reconstruction_various_inputs() {
        assert_valid_diff("", "");
        assert_valid_diff("a", "");
        assert_valid_diff("", "b");
        assert_valid_diff("abcabba", "cbabac");
        assert_valid_diff("The quick brown fox", "The slow brown dog");
        assert_valid_diff("one\ntwo\nthree", "one\n2\nthree\nfour");
        assert_valid_diff("xxxabc", "defxxx");
    }

    #[test]
    fn test_find_subslice() {
        assert_eq!(find_subslice(&chars("abcdef"), &chars("cd")), Some(2));
        assert_eq!(find_subslice(&chars("abcdef"), &chars("xy")), None);
        assert_eq!(find_subslice(&chars("ab"), &chars("abc")), None);
    }

    #[test]
    fn test_common_prefix_suffix() {
        assert_eq!(common_prefix(&chars("abcx"), &chars("abcy")), 3);
        assert_eq!(common_suffix(&chars("xabc"), &chars("yabc")), 3);
        assert_eq!(common_prefix(&chars(""), &chars("a")), 0);
    }
}
