//! Quicksort with smaller-side-first recursion.
//!
//! After each partition only the smaller side is sorted recursively, the larger one is handled by
//! the next loop iteration. Every recursive call therefore gets at most half of the current
//! range, which caps the recursion depth at `floor(log2(len)) + 2` frames regardless of pivot
//! quality. The comparison count is still quadratic in the worst case.

use std::cmp::Ordering;

use crate::partition;

sort_impl!("quicksort_tail_call_unstable", stable = false, worst_case = Quadratic);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if super::is_zst::<T>() {
        return;
    }

    quicksort(v, &mut is_less);
}

/// Returns the number of stack frames used, including this one.
fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F) -> u32
where
    F: FnMut(&T, &T) -> bool,
{
    let mut frames = 1;

    loop {
        if v.len() < 2 {
            return frames;
        }

        let pivot_pos = partition::lomuto(v, is_less);

        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        if left.len() < right.len() {
            frames = frames.max(1 + quicksort(left, is_less));
            v = right;
        } else {
            frames = frames.max(1 + quicksort(right, is_less));
            v = left;
        }
    }
}
