//! Stable selection sort.
//!
//! Instead of swapping, the minimum is rotated into place and everything between shifts right by
//! one, which keeps equal elements in input order. Costs `O(n^2)` moves instead of `O(n)` swaps.

use std::cmp::Ordering;

sort_impl!("selection_stable", stable = true, worst_case = Quadratic);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let min = i + super::min_index(&v[i..], is_less);
        if min != i {
            v[i..=min].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_equal_order() {
        let mut v = [(2, 'a'), (2, 'b'), (1, 'c')];
        sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, [(1, 'c'), (2, 'a'), (2, 'b')]);
    }
}
