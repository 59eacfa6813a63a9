//! Reading order determination for extracted text blocks.
//!
//! Blocks arrive in arbitrary wire order. Sorting them into the human
//! reading sequence uses a per-pair tie-break chain: page first, then the
//! models' explicit `reading_order` numbers when both sides of a comparison
//! carry one, then top-to-bottom / left-to-right geometry.

use std::cmp::Ordering;

use crate::block::TextBlock;

/// Sort blocks into human reading order.
///
/// The comparison chain, applied per pair:
///
/// 1. `page` ascending (blocks default to page 1 if unset).
/// 2. Explicit `reading_order` ascending, but only when **both** blocks in
///    the comparison carry one.
/// 3. Geometric fallback: top coordinate ascending, then left coordinate
///    ascending, both defaulting to 0 for blocks without a bbox.
///
/// Rule 2 degrades per comparison, not globally: a mixed block set falls
/// back to geometry exactly for those pairs where either side lacks an
/// explicit order. The sort is stable, so fully tied blocks keep their
/// original relative order.
pub fn sort_blocks(blocks: &[TextBlock]) -> Vec<TextBlock> {
    let mut sorted: Vec<TextBlock> = blocks.to_vec();
    // The pairwise fallback means the comparator is not a total order over
    // sets where only some blocks carry an explicit reading_order, and the
    // standard sorts reject inconsistent comparators. A stable insertion
    // sort only ever acts on individual pairwise answers.
    insertion_sort(&mut sorted, compare_blocks);
    sorted
}

fn insertion_sort<T>(items: &mut [T], cmp: impl Fn(&T, &T) -> Ordering) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn compare_blocks(a: &TextBlock, b: &TextBlock) -> Ordering {
    match a.page.max(1).cmp(&b.page.max(1)) {
        Ordering::Equal => {},
        other => return other,
    }

    if let (Some(ra), Some(rb)) = (a.reading_order, b.reading_order) {
        return ra.cmp(&rb);
    }

    match geometric_top(a).partial_cmp(&geometric_top(b)) {
        Some(Ordering::Equal) | None => {},
        Some(other) => return other,
    }
    geometric_left(a)
        .partial_cmp(&geometric_left(b))
        .unwrap_or(Ordering::Equal)
}

fn geometric_top(block: &TextBlock) -> f32 {
    block.bbox.as_ref().map(|b| b.top()).unwrap_or(0.0)
}

fn geometric_left(block: &TextBlock) -> f32 {
    block.bbox.as_ref().map(|b| b.left()).unwrap_or(0.0)
}
