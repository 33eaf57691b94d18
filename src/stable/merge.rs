//! Top-down merge sort with an auxiliary buffer per merge step.
//!
//! Stable: when the heads of the two runs compare equal, the left run's head
//! is taken first. *O*(*n* \* log(*n*)) comparisons and moves regardless of
//! input order. The buffer is sized to the merged range and filled with
//! clones, hence the `Clone` bound.

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::check_range;
use crate::Error;

pub fn sort<T: Ord + Clone>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts `v` with a comparator. An empty or single-element slice returns
/// immediately without allocating.
pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    if v.len() > 1 {
        merge_sort(v, 0, v.len() - 1, &mut compare);
    }
}

/// Sorts `v[range]` only, leaving the rest of the slice untouched.
pub fn sort_range_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(
    v: &mut [T],
    range: Range<usize>,
    mut compare: F,
) -> Result<(), Error> {
    check_range(&range, v.len())?;
    if range.len() > 1 {
        merge_sort(v, range.start, range.end - 1, &mut compare);
    }
    Ok(())
}

// Inclusive bounds, caller guarantees left <= right < v.len().
fn merge_sort<T: Clone, F: FnMut(&T, &T) -> Ordering>(
    v: &mut [T],
    left: usize,
    right: usize,
    compare: &mut F,
) {
    if left < right {
        let mid = (left + right) / 2;
        merge_sort(v, left, mid, compare);
        merge_sort(v, mid + 1, right, compare);
        merge(v, left, mid, right, compare);
    }
}

/// Merges the sorted runs `v[left..=mid]` and `v[mid+1..=right]`.
fn merge<T: Clone, F: FnMut(&T, &T) -> Ordering>(
    v: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    compare: &mut F,
) {
    let mut temp = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = mid + 1;
    while i <= mid && j <= right {
        // `Less | Equal` takes the left head, which is what makes this stable.
        if compare(&v[i], &v[j]) != Ordering::Greater {
            temp.push(v[i].clone());
            i += 1;
        } else {
            temp.push(v[j].clone());
            j += 1;
        }
    }
    temp.extend(v[i..=mid].iter().cloned());
    temp.extend(v[j..=right].iter().cloned());

    for (k, item) in temp.into_iter().enumerate() {
        v[left + k] = item;
    }
}
