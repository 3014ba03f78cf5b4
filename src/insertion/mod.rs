//! Insertion sort: grows a sorted prefix one element at a time.
//!
//! All variants are stable and adaptive. Insertion is done with `rotate_right(1)` on the span
//! between the insertion point and the element, which shifts the larger prefix elements by one.

pub mod binary;
pub mod iterative;
pub mod recursive;

pub(crate) use iterative::insertion_sort;

/// Inserts `v[i]` into the sorted prefix `v[..i]` by scanning backwards.
#[inline]
fn insert_tail<T, F>(v: &mut [T], i: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut j = i;
    while j > 0 && is_less(&v[i], &v[j - 1]) {
        j -= 1;
    }

    if j != i {
        v[j..=i].rotate_right(1);
    }
}
