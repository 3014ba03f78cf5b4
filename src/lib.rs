//! In-memory sorting algorithms, one module per variant.
//!
//! Every comparison sort exposes `sort` and `sort_by` free functions plus a `SortImpl` type that
//! implements [`Sort`], so callers can pick a variant generically. Counting sort works on integer
//! keys only, see [`counting`].

use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr, stable = $stable:expr, worst_case = $worst_case:ident) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn is_stable() -> bool {
                $stable
            }

            fn worst_case() -> $crate::Complexity {
                $crate::Complexity::$worst_case
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod algorithm;
pub mod bubble;
pub mod config;
pub mod counting;
pub mod insertion;
pub mod merge;
pub mod partition;
pub mod quicksort;
pub mod selection;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use config::{ConfigError, HybridConfig};
pub use counting::DiscreteKey;

/// Worst-case number of comparisons, as a function of the input length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Complexity {
    Linear,
    Linearithmic,
    Quadratic,
}

pub trait Sort {
    fn name() -> String;

    /// Whether elements that compare equal keep their relative input order.
    fn is_stable() -> bool;

    fn worst_case() -> Complexity;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

/// Returns the inclusive range `[left, right]` of `v` as a sub-slice.
///
/// `left > right` is the empty-range sentinel and yields an empty slice, as does an empty `v`.
/// Panics if `right` is out of bounds for a non-empty range, same as slice indexing.
pub fn subrange<T>(v: &mut [T], left: usize, right: usize) -> &mut [T] {
    if left > right || v.is_empty() {
        return &mut [];
    }

    &mut v[left..=right]
}
