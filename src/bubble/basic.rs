//! Bubble sort without early exit, always `n * (n - 1) / 2` comparisons.

use std::cmp::Ordering;

sort_impl!("bubble_basic_stable", stable = true, worst_case = Quadratic);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for unsorted_len in (2..=v.len()).rev() {
        super::bubble_pass(&mut v[..unsorted_len], is_less);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_still_quadratic() {
        let mut v = (0..100).collect::<Vec<i32>>();
        let mut comps = 0;
        sort_by(&mut v, |a, b| {
            comps += 1;
            a.cmp(b)
        });

        assert_eq!(comps, 100 * 99 / 2);
    }
}
