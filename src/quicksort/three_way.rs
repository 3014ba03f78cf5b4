//! Quicksort with three-way partitioning.
//!
//! Elements equal to the pivot are settled by the partition and never looked at again, so inputs
//! with few distinct values are sorted in close to linear time. All-equal input takes a single
//! pass of `n - 1` comparisons.

use std::cmp::Ordering;

use crate::partition;

sort_impl!("quicksort_three_way_unstable", stable = false, worst_case = Quadratic);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.cmp(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, compare);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if super::is_zst::<T>() {
        return;
    }

    quicksort(v, &mut compare);
}

fn quicksort<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let (lt, gt) = partition::three_way(v, compare);

        let (rest, greater) = v.split_at_mut(gt);
        let less = &mut rest[..lt];

        if less.len() < greater.len() {
            quicksort(less, compare);
            v = greater;
        } else {
            quicksort(greater, compare);
            v = less;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates() {
        let mut v = [6, -8, -3, -3, 2, 5, 6, 2, -10, -3];
        sort(&mut v);
        assert_eq!(v, [-10, -8, -3, -3, -3, 2, 2, 5, 6, 6]);
    }

    #[test]
    fn all_equal_linear() {
        let mut v = vec![3; 1_000];
        let mut comps = 0;
        sort_by(&mut v, |a, b| {
            comps += 1;
            a.cmp(b)
        });

        assert_eq!(comps, 999);
    }

    #[test]
    fn few_distinct_values() {
        // 4 distinct keys, each partition settles one key.
        let mut v = (0..1_000).map(|i| (i * 7) % 4).collect::<Vec<i32>>();
        let mut comps = 0;
        sort_by(&mut v, |a, b| {
            comps += 1;
            a.cmp(b)
        });

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        assert!(comps < 4 * 1_000, "{comps}");
    }
}
