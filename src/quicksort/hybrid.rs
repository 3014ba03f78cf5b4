//! Bounded-stack quicksort that finishes short ranges with insertion sort.
//!
//! Same recursion shape as [`super::tail_call`]. Ranges of at most
//! [`HybridConfig::insertion_threshold`] elements are handed to insertion sort, which has less
//! overhead and better locality on short inputs.

use std::cmp::Ordering;

use crate::config::HybridConfig;
use crate::insertion::insertion_sort;
use crate::partition;

sort_impl!("quicksort_hybrid_unstable", stable = false, worst_case = Quadratic);

/// Sorts with the process-wide [`HybridConfig::global`] threshold.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with_config(v, HybridConfig::global());
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_config(v, compare, HybridConfig::global());
}

#[inline]
pub fn sort_with_config<T>(v: &mut [T], config: &HybridConfig)
where
    T: Ord,
{
    unstable_sort(v, config.insertion_threshold, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by_with_config<T, F>(v: &mut [T], mut compare: F, config: &HybridConfig)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, config.insertion_threshold, |a, b| {
        compare(a, b) == Ordering::Less
    });
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], threshold: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if super::is_zst::<T>() {
        return;
    }

    quicksort(v, threshold, &mut is_less);
}

fn quicksort<T, F>(mut v: &mut [T], threshold: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        if len <= threshold {
            insertion_sort(v, is_less);
            return;
        }

        let pivot_pos = partition::lomuto(v, is_less);

        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, threshold, is_less);
            v = right;
        } else {
            quicksort(right, threshold, is_less);
            v = left;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comps_with(threshold: usize, input: &[i32]) -> (Vec<i32>, u64) {
        let mut v = input.to_vec();
        let mut comps = 0;
        sort_by_with_config(
            &mut v,
            |a, b| {
                comps += 1;
                a.cmp(b)
            },
            &HybridConfig::new(threshold),
        );

        (v, comps)
    }

    #[test]
    fn threshold_covers_whole_input() {
        // Sorted input within the threshold goes straight to insertion sort: n - 1 comparisons.
        let input = (0..10).collect::<Vec<i32>>();
        let (v, comps) = comps_with(10, &input);

        assert_eq!(v, input);
        assert_eq!(comps, 9);
    }

    #[test]
    fn threshold_zero_is_plain_quicksort() {
        let input = (0..10).collect::<Vec<i32>>();
        let (v, comps) = comps_with(0, &input);

        assert_eq!(v, input);
        // Lomuto with last-element pivot on sorted input: 9 + 8 + ... + 1.
        assert_eq!(comps, 45);
    }

    #[test]
    fn larger_threshold_same_result() {
        let input = [
            24, 97, 40, 67, 88, -85, 15, 66, 53, 44, -26, 48, 16, 52, 44, 23, 97, 18, 44, 80,
        ];

        let mut expected = input.to_vec();
        expected.sort();

        for threshold in [0, 1, 2, 5, 10, 16, 32] {
            assert_eq!(comps_with(threshold, &input).0, expected, "threshold {threshold}");
        }
    }
}
