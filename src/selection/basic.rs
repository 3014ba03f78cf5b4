//! Selection sort placing each minimum with a single swap.
//!
//! At most `n - 1` swaps, but the swap can carry an element past others that compare equal to
//! it, so this is not stable. Returns the sorted slice for chaining.

use std::cmp::Ordering;

sort_impl!("selection_basic_unstable", stable = false, worst_case = Quadratic);

#[inline]
pub fn sort<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn selection_sort<'a, T, F>(v: &'a mut [T], is_less: &mut F) -> &'a mut [T]
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let min = i + super::min_index(&v[i..], is_less);
        if min != i {
            v.swap(i, min);
        }
    }

    v
}
