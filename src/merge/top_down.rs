//! Recursive top-down merge sort.

use std::cmp::Ordering;

sort_impl!("merge_top_down_stable", stable = true, worst_case = Linearithmic);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    stable_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn stable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    stable_sort(&mut v[..mid], is_less);
    stable_sort(&mut v[mid..], is_less);

    super::merge(v, mid, is_less);
}
