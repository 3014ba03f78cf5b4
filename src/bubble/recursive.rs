//! Recursive bubble sort, one pass per call.
//!
//! Recursion depth grows with the input length, this exists for comparison with the iterative
//! forms.

use std::cmp::Ordering;

sort_impl!("bubble_recursive_stable", stable = true, worst_case = Quadratic);

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

    if !super::bubble_pass(v, is_less) {
        return;
    }

    recurse(&mut v[..len - 1], is_less);
}
