//! Bounded-stack quicksort with a median-of-three pivot.
//!
//! The median of the first, middle and last element keeps sorted and reverse sorted inputs at
//! `O(n log(n))`.

use std::cmp::Ordering;

use crate::partition;

sort_impl!("quicksort_median_of_three_unstable", stable = false, worst_case = Quadratic);

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

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        partition::median_of_three(v, is_less);
        let pivot_pos = partition::lomuto(v, is_less);

        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_is_not_quadratic() {
        let mut v = (0..2_000).collect::<Vec<i32>>();
        let mut comps = 0u64;
        sort_by(&mut v, |a, b| {
            comps += 1;
            a.cmp(b)
        });

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        // A last-element pivot needs ~2_000_000 comparisons here.
        assert!(comps < 100_000, "{comps}");
    }
}
