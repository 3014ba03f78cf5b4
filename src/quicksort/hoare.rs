//! Quicksort with Hoare partitioning and a randomized pivot.
//!
//! A fixed first-element pivot would be enough for termination, but it splits sorted and
//! duplicate-heavy inputs badly. The pivot is drawn from a generator seeded with the input
//! length, so a given input is always processed identically.

use std::cmp::Ordering;

use rand::rngs::SmallRng;

use crate::partition;

sort_impl!("quicksort_hoare_unstable", stable = false, worst_case = Quadratic);

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

    let mut rng = partition::pivot_rng(v.len());
    quicksort(v, &mut rng, &mut is_less);
}

fn quicksort<T, F>(mut v: &mut [T], rng: &mut SmallRng, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        partition::random_pivot_to_front(v, rng);
        let pivot_pos = partition::hoare(v, is_less);

        // The pivot is in its final place, so both sides shrink even if the comparison is
        // inconsistent.
        let (left, right) = v.split_at_mut(pivot_pos);

        // Recurse into the left side.
        quicksort(left, rng, is_less);

        // Continue with the right side.
        v = &mut right[1..];
    }
}
