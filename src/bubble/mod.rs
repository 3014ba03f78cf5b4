//! Bubble sort. Each pass moves the largest remaining element to the end of the unsorted part.
//!
//! Only strictly greater elements are swapped past their neighbour, so all variants are stable.

pub mod adaptive;
pub mod basic;
pub mod recursive;

/// One pass over `v`, returns whether anything was swapped.
#[inline]
fn bubble_pass<T, F>(v: &mut [T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let mut swapped = false;

    for j in 1..v.len() {
        if is_less(&v[j], &v[j - 1]) {
            v.swap(j - 1, j);
            swapped = true;
        }
    }

    swapped
}
