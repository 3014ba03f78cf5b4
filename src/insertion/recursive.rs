//! Recursive insertion sort, the prefix is sorted by the recursive call.
//!
//! Uses one stack frame per element, so this is only sensible for short inputs.

use std::cmp::Ordering;

sort_impl!("insertion_recursive_stable", stable = true, worst_case = Quadratic);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    recurse(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    recurse(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn recurse<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    recurse(&mut v[..len - 1], is_less);
    super::insert_tail(v, len - 1, is_less);
}
