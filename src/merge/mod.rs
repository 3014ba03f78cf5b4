//! Merge sort, top-down and bottom-up, sharing one stable merge step.

pub mod bottom_up;
pub mod top_down;

/// Merges the sorted runs `v[..mid]` and `v[mid..]`.
///
/// The result is assembled in a temporary buffer of `v.len()` elements and written back once
/// complete, so a panicking comparison leaves `v` untouched. On ties the element from the left
/// run is taken first, which is what makes merge sort stable.
pub fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if mid == 0 || mid >= len {
        return;
    }

    let mut merged = Vec::with_capacity(len);

    let mut left = 0;
    let mut right = mid;

    while left < mid && right < len {
        if is_less(&v[right], &v[left]) {
            merged.push(v[right].clone());
            right += 1;
        } else {
            merged.push(v[left].clone());
            left += 1;
        }
    }

    merged.extend_from_slice(&v[left..mid]);
    merged.extend_from_slice(&v[right..]);

    for (dst, src) in v.iter_mut().zip(merged) {
        *dst = src;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_runs() {
        let mut v = [1, 4, 9, 2, 3, 10, 11];
        merge(&mut v, 3, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [1, 2, 3, 4, 9, 10, 11]);
    }

    #[test]
    fn merge_takes_left_on_ties() {
        let mut v = [(1, 'a'), (2, 'a'), (1, 'b'), (2, 'b')];
        merge(&mut v, 2, &mut |a: &(i32, char), b: &(i32, char)| a.0 < b.0);
        assert_eq!(v, [(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    }

    #[test]
    fn merge_empty_run_is_noop() {
        let mut v = [3, 1, 2];
        merge(&mut v, 0, &mut |a: &i32, b: &i32| a < b);
        merge(&mut v, 3, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [3, 1, 2]);
    }
}
