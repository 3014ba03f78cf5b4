//! Non-recursive quicksort with an explicit range stack.
//!
//! Both sides of every partition with more than one element are pushed, the larger one first.
//! Popping the smaller side first keeps the stack at `O(log(n))` entries.

use std::cmp::Ordering;

use log::debug;

use crate::partition;

sort_impl!("quicksort_iterative_unstable", stable = false, worst_case = Quadratic);

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

    let peak_stack_len = quicksort(v, &mut is_less);
    debug!(len = v.len(), peak_stack_len; "iterative quicksort done");
}

/// Returns the largest number of ranges that were on the stack at once.
fn quicksort<T, F>(v_full: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if v_full.len() < 2 {
        return 0;
    }

    // Half-open ranges into `v_full`.
    let mut stack: Vec<(usize, usize)> =
        Vec::with_capacity(2 * (v_full.len().ilog2() as usize + 1));
    stack.push((0, v_full.len()));
    let mut peak_stack_len = stack.len();

    while let Some((begin, end)) = stack.pop() {
        let v = &mut v_full[begin..end];

        let pivot_pos = begin + partition::lomuto(v, is_less);

        let left = (begin, pivot_pos);
        let right = (pivot_pos + 1, end);

        let (larger, smaller) = if left.1 - left.0 < right.1 - right.0 {
            (right, left)
        } else {
            (left, right)
        };

        for range in [larger, smaller] {
            if range.1 - range.0 > 1 {
                stack.push(range);
            }
        }

        peak_stack_len = peak_stack_len.max(stack.len());
    }

    peak_stack_len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak_for(mut v: Vec<i32>) -> usize {
        let peak = quicksort(&mut v, &mut |a: &i32, b: &i32| a < b);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        peak
    }

    #[test]
    fn stack_stays_logarithmic() {
        let len: usize = 8_192;
        let limit = len.ilog2() as usize + 1;

        assert!(peak_for((0..len as i32).collect()) <= limit);
        assert!(peak_for((0..len as i32).rev().collect()) <= limit);
        assert!(peak_for((0..len).map(|i| ((i * 2_741) % len) as i32).collect()) <= limit);
    }

    #[test]
    fn nothing_pushed_for_trivial_input() {
        assert_eq!(peak_for(vec![]), 0);
        assert_eq!(peak_for(vec![1]), 0);
        assert_eq!(peak_for(vec![2, 1]), 1);
    }
}
