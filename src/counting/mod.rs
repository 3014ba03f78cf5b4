//! Counting sort for integer keys.
//!
//! Time and memory are `O(n + k)` where `k` is the distance between the smallest and the largest
//! key. The count table spans the whole key range no matter how sparse the input is, so a range
//! much wider than the input turns into a performance cliff. It is never an error: the sort
//! completes, it just allocates and scans the full table. Keys are limited to 32 bit types, which
//! bounds the table at `2^32` entries.

use log::{debug, warn};

pub mod direct_fill;
pub mod stable;

/// Integer types that can serve as counting sort keys.
pub trait DiscreteKey: Copy + Ord {
    fn to_i64(self) -> i64;

    fn from_i64(val: i64) -> Self;
}

macro_rules! impl_discrete_key {
    ($($t:ty),*) => {
        $(
            impl DiscreteKey for $t {
                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn from_i64(val: i64) -> Self {
                    val as $t
                }
            }
        )*
    };
}

impl_discrete_key!(i8, i16, i32, u8, u16, u32);

// Beyond this ratio of key span to element count the table dominates the cost.
const SPARSE_RANGE_FACTOR: u64 = 64;

/// Smallest key and the number of table slots needed to cover `keys`, `None` if empty.
fn key_range(keys: impl Iterator<Item = i64>, len: usize) -> Option<(i64, usize)> {
    let (min, max) = keys.fold(None, |acc: Option<(i64, i64)>, key| match acc {
        None => Some((key, key)),
        Some((min, max)) => Some((min.min(key), max.max(key))),
    })?;

    // At most 2^32 for 32 bit keys, no overflow in i64.
    let span = (max - min) as u64;
    debug!(len, min, max, span; "counting sort key range");

    if span > (len as u64).saturating_mul(SPARSE_RANGE_FACTOR) {
        warn!(len, span; "counting sort key range is much wider than the input");
    }

    Some((min, span as usize + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_range_bounds() {
        let keys = [10i64, 5, 10_000, 5_000];
        assert_eq!(key_range(keys.into_iter(), 4), Some((5, 9_996)));

        assert_eq!(key_range(std::iter::empty(), 0), None);
        assert_eq!(key_range([-3i64].into_iter(), 1), Some((-3, 1)));
    }

    #[test]
    fn key_round_trip_extremes() {
        assert_eq!(i32::from_i64(i32::MIN.to_i64()), i32::MIN);
        assert_eq!(u32::from_i64(u32::MAX.to_i64()), u32::MAX);
        assert_eq!(u32::MAX.to_i64() - i32::MIN.to_i64(), 6_442_450_943);
    }
}
