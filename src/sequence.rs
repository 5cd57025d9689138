//! In-place helpers over caller-owned slices.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::cmp::Ordering;

use tracing::trace;

use crate::random::{RandomSource, pick_index};

/// Shuffle `items` in place with a uniform Fisher–Yates walk.
///
/// For each index `i` from the last down to 1, an index `j` is drawn
/// uniformly from `0..=i` and the two are swapped. Empty and single-element
/// slices are left untouched and draw nothing from `source`.
///
/// Returns the same slice so calls can be chained.
pub fn shuffle<'a, T, S>(items: &'a mut [T], source: &mut S) -> &'a mut [T]
where
    S: RandomSource + ?Sized,
{
    trace!(len = items.len(), "shuffling sequence");
    for i in (1..items.len()).rev() {
        let j = pick_index(source, i);
        items.swap(i, j);
    }
    items
}

/// Exchange the elements at `i` and `j`.
///
/// # Panics
///
/// Panics if either index is out of bounds.
pub fn swap<T>(items: &mut [T], i: usize, j: usize) {
    items.swap(i, j);
}

/// Whether `items[start..=end]` is in non-descending order.
///
/// Only adjacent pairs inside the range are compared. Empty ranges
/// (`start >= end`) and single elements are sorted; an `end` past the last
/// index is clamped to it. Incomparable pairs (NaN) are not treated as
/// out of order.
#[must_use]
pub fn is_sorted<T: PartialOrd>(items: &[T], start: usize, end: usize) -> bool {
    let end = end.min(items.len().saturating_sub(1));
    if start >= end {
        return true;
    }
    items[start..=end]
        .windows(2)
        .all(|pair| pair[0].partial_cmp(&pair[1]) != Some(Ordering::Greater))
}
