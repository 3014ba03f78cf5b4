//! Basic recursive quicksort.

use std::cmp::Ordering;

use crate::partition;

sort_impl!("quicksort_basic_unstable", stable = false, worst_case = Quadratic);

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

fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let pivot_pos = partition::lomuto(v, is_less);

    let (left, right) = v.split_at_mut(pivot_pos);
    quicksort(left, is_less);
    quicksort(&mut right[1..], is_less);
}
