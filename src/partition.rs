//! Partition schemes and pivot selection shared by the quicksort family.
//!
//! All functions work on the slice they are given and report positions relative to it. The sorts
//! never call them with fewer than two elements. Called directly on such a slice they move nothing
//! and return `0`, or the empty equal zone `(0, len)` for [`three_way`].

use std::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Lomuto partition around the last element.
///
/// Returns the final position `p` of the pivot. Afterwards `v[..p]` is `<=` the pivot and
/// `v[p + 1..]` is `>=` the pivot. On all-equal input every element is swapped and the pivot ends
/// up last, which is what makes plain Lomuto quicksort quadratic there.
pub fn lomuto<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let (rest, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    let mut partition_index = 0;
    for i in 0..rest.len() {
        // v[i] <= pivot
        if !is_less(pivot, &rest[i]) {
            rest.swap(i, partition_index);
            partition_index += 1;
        }
    }

    v.swap(partition_index, len - 1);

    partition_index
}

/// Hoare partition around the first element.
///
/// Two cursors converge from both ends of `v[1..]`, stopping on elements that are not strictly on
/// their side, so runs of equal elements are split evenly. Once they meet, the pivot is swapped
/// into the boundary. Returns its final position `p`: `v[..p]` is `<=` the pivot and `v[p + 1..]`
/// is `>=` the pivot.
///
/// The first element is a fixed-position pivot, pair this with [`random_pivot_to_front`] to keep
/// degenerate inputs from producing one-sided splits over and over.
pub fn hoare<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return 0;
    }

    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    // rest[..l] <= pivot, rest[r..] >= pivot. Both cursors are bounded by each other, an
    // inconsistent comparison can not move them out of range.
    let mut l = 0;
    let mut r = rest.len();
    loop {
        while l < r && is_less(&rest[l], pivot) {
            l += 1;
        }

        while l < r && is_less(pivot, &rest[r - 1]) {
            r -= 1;
        }

        if l >= r {
            break;
        }

        r -= 1;
        rest.swap(l, r);
        l += 1;
    }

    // v[l] is rest[l - 1], the last element <= pivot, or the pivot itself if l == 0.
    v.swap(0, l);

    l
}

/// Three-way (Dutch national flag) partition around the last element.
///
/// Returns the half-open equal zone `(lt, gt)`: `v[..lt]` is `<` the pivot, `v[lt..gt]` equals it
/// and `v[gt..]` is `>` it. Each element other than the pivot is compared exactly once.
pub fn three_way<T, F>(v: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return (0, len);
    }

    let last = len - 1;
    let (rest, pivot) = v.split_at_mut(last);
    let pivot = &pivot[0];

    // rest[..lt] < pivot, rest[lt..i] == pivot, rest[i..gt] unclassified, rest[gt..] > pivot.
    let mut lt = 0;
    let mut i = 0;
    let mut gt = last;

    while i < gt {
        match compare(&rest[i], pivot) {
            Ordering::Less => {
                rest.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                rest.swap(i, gt);
            }
            Ordering::Equal => {
                i += 1;
            }
        }
    }

    // Move the pivot to the end of the equal zone.
    v.swap(gt, last);

    (lt, gt + 1)
}

/// Orders the first, middle and last elements so that the smallest is first, the largest is in
/// the middle and the median is last, where [`lomuto`] picks it up as pivot.
pub fn median_of_three<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let first = 0;
    let mid = len / 2;
    let last = len - 1;

    if is_less(&v[mid], &v[first]) {
        v.swap(first, mid);
    }
    if is_less(&v[last], &v[first]) {
        v.swap(first, last);
    }
    if is_less(&v[mid], &v[last]) {
        v.swap(last, mid);
    }
}

/// Swaps a uniformly chosen element into position 0.
pub fn random_pivot_to_front<T>(v: &mut [T], rng: &mut SmallRng) {
    if v.len() < 2 {
        return;
    }

    let pivot_pos = rng.gen_range(0..v.len());
    v.swap(0, pivot_pos);
}

/// Deterministic generator for pivot selection, so a given input always sorts the same way.
pub(crate) fn pivot_rng(len: usize) -> SmallRng {
    SmallRng::seed_from_u64(len as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn lomuto_places_pivot() {
        let mut v = [16, -25, 38, 55, 38, 1, 12, 120, 9];
        let pivot = v[v.len() - 1];
        let p = lomuto(&mut v, &mut lt);

        assert_eq!(v[p], pivot);
        assert!(v[..p].iter().all(|x| *x <= pivot));
        assert!(v[p + 1..].iter().all(|x| *x >= pivot));
    }

    #[test]
    fn lomuto_all_equal_pivot_last() {
        let mut v = [4; 12];
        assert_eq!(lomuto(&mut v, &mut lt), 11);
    }

    #[test]
    fn lomuto_short() {
        let mut empty: [i32; 0] = [];
        assert_eq!(lomuto(&mut empty, &mut lt), 0);

        let mut one = [3];
        assert_eq!(lomuto(&mut one, &mut lt), 0);
        assert_eq!(one, [3]);
    }

    #[test]
    fn hoare_places_pivot() {
        let inputs: [&[i32]; 6] = [
            &[10, 5, 6, 20],
            &[20, 10, 5, 6],
            &[2, 1],
            &[1, 2],
            &[7, 7, 7, 7, 7, 7],
            &[6, -8, -3, -3, 2, 5, 6, 2, -10, -3],
        ];

        for input in inputs {
            let mut v = input.to_vec();
            let pivot = v[0];
            let p = hoare(&mut v, &mut lt);

            assert_eq!(v[p], pivot, "{input:?}");
            assert!(v[..p].iter().all(|x| *x <= pivot), "{input:?}");
            assert!(v[p + 1..].iter().all(|x| *x >= pivot), "{input:?}");
        }
    }

    #[test]
    fn hoare_all_equal_splits_in_middle() {
        let mut v = [1; 10];
        assert_eq!(hoare(&mut v, &mut lt), 5);
    }

    #[test]
    fn hoare_inconsistent_comparison_stays_in_bounds() {
        let mut always_less = |_: &i32, _: &i32| true;
        let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
        let p = hoare(&mut v, &mut always_less);
        assert!(p < v.len());

        let mut never_less = |_: &i32, _: &i32| false;
        let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
        let p = hoare(&mut v, &mut never_less);
        assert!(p < v.len());

        let mut sorted = v;
        sorted.sort();
        assert_eq!(sorted, [1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn three_way_zones() {
        let mut v = [6, -8, -3, -3, 2, 5, 6, 2, -10, -3];
        let (lo, hi) = three_way(&mut v, &mut |a: &i32, b: &i32| a.cmp(b));

        assert_eq!((lo, hi), (2, 5));
        assert!(v[..lo].iter().all(|x| *x < -3));
        assert!(v[lo..hi].iter().all(|x| *x == -3));
        assert!(v[hi..].iter().all(|x| *x > -3));
    }

    #[test]
    fn three_way_all_equal_single_pass() {
        let mut v = [5; 100];
        let mut comps = 0;
        let zone = three_way(&mut v, &mut |a: &i32, b: &i32| {
            comps += 1;
            a.cmp(b)
        });

        assert_eq!(zone, (0, 100));
        assert_eq!(comps, 99);
    }

    #[test]
    fn median_of_three_order() {
        let mut v = [9, 0, 0, 1, 0, 0, 4];
        median_of_three(&mut v, &mut lt);
        assert_eq!((v[0], v[3], v[6]), (1, 9, 4));

        let mut v = [1, 2, 3, 4, 5];
        median_of_three(&mut v, &mut lt);
        assert_eq!((v[0], v[2], v[4]), (1, 5, 3));
    }

    #[test]
    fn random_pivot_is_permutation() {
        let mut rng = pivot_rng(8);
        let mut v = [1, 2, 3, 4, 5, 6, 7, 8];
        random_pivot_to_front(&mut v, &mut rng);

        let mut sorted = v;
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
