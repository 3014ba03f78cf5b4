use std::cmp::Ordering;

sort_impl!("insertion_iterative_stable", stable = true, worst_case = Quadratic);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` in place, `n - 1` comparisons if it is already sorted.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        super::insert_tail(v, i, is_less);
    }
}
