//! Bubble sort that stops after the first pass without swaps.
//!
//! Already sorted input is detected in a single pass of `n - 1` comparisons.

use std::cmp::Ordering;

sort_impl!("bubble_adaptive_stable", stable = true, worst_case = Quadratic);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Returns the number of passes performed.
fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut passes = 0;

    for unsorted_len in (2..=v.len()).rev() {
        passes += 1;
        if !super::bubble_pass(&mut v[..unsorted_len], is_less) {
            break;
        }
    }

    passes
}
