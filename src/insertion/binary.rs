//! Binary insertion sort.
//!
//! The insertion point is found with `O(log i)` comparisons, but shifting stays `O(i)`, so the
//! total is still quadratic. Only the comparison count drops.

use std::cmp::Ordering;

sort_impl!("insertion_binary_stable", stable = true, worst_case = Quadratic);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    binary_insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    binary_insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn binary_insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let pos = upper_bound(&v[..i], &v[i], is_less);
        if pos != i {
            v[pos..=i].rotate_right(1);
        }
    }
}

/// Index of the first element in the sorted `v` that is greater than `key`.
///
/// Equal elements stay in front of the insertion point, which keeps the sort stable.
fn upper_bound<T, F>(v: &[T], key: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lo = 0;
    let mut hi = v.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_less(key, &v[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_bound_after_equal() {
        let v = [1, 3, 3, 3, 7];
        let mut lt = |a: &i32, b: &i32| a < b;

        assert_eq!(upper_bound(&v, &0, &mut lt), 0);
        assert_eq!(upper_bound(&v, &3, &mut lt), 4);
        assert_eq!(upper_bound(&v, &5, &mut lt), 4);
        assert_eq!(upper_bound(&v, &9, &mut lt), 5);
        assert_eq!(upper_bound(&[], &9, &mut lt), 0);
    }

    #[test]
    fn fewer_comparisons_than_linear_scan() {
        let input = (0..512).rev().collect::<Vec<i32>>();

        let mut binary_comps = 0;
        let mut v = input.clone();
        sort_by(&mut v, |a, b| {
            binary_comps += 1;
            a.cmp(b)
        });

        let mut linear_comps = 0;
        let mut w = input;
        crate::insertion::iterative::sort_by(&mut w, |a, b| {
            linear_comps += 1;
            a.cmp(b)
        });

        assert_eq!(v, w);
        assert!(binary_comps * 10 < linear_comps);
    }
}
