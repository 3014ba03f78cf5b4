//! Iterative bottom-up merge sort.
//!
//! Merges adjacent runs of width 1, 2, 4, ... until a single run covers the input.

use std::cmp::Ordering;

sort_impl!("merge_bottom_up_stable", stable = true, worst_case = Linearithmic);

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

    let mut width = 1;
    while width < len {
        let mut start = 0;
        while len - start > width {
            // Run pair [start, start + width) and [start + width, end), written so that no sum
            // can exceed `len`.
            let end = start + width + (len - start - width).min(width);
            super::merge(&mut v[start..end], width, is_less);
            start = end;
        }

        if width > len / 2 {
            break;
        }
        width *= 2;
    }
}
