//! Selection sort: repeatedly moves the minimum of the unsorted suffix to its front.

pub mod basic;
pub mod stable;

/// Index of the first minimum in `v`, which must not be empty.
#[inline]
fn min_index<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min = 0;
    for j in 1..v.len() {
        if is_less(&v[j], &v[min]) {
            min = j;
        }
    }

    min
}
