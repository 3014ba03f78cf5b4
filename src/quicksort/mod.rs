//! Quicksort variants.
//!
//! | variant           | partition       | pivot            | stack depth (worst) |
//! |-------------------|-----------------|------------------|---------------------|
//! | `basic`           | Lomuto          | last             | `O(n)`              |
//! | `hoare`           | Hoare           | random           | `O(n)`, rare        |
//! | `median_of_three` | Lomuto          | median of three  | `O(log n)`          |
//! | `tail_call`       | Lomuto          | last             | `O(log n)`          |
//! | `hybrid`          | Lomuto          | last             | `O(log n)`          |
//! | `iterative`       | Lomuto          | last             | explicit `O(log n)` |
//! | `three_way`       | three-way       | last             | `O(log n)`          |
//!
//! None of them are stable.

pub mod basic;
pub mod hoare;
pub mod hybrid;
pub mod iterative;
pub mod median_of_three;
pub mod tail_call;
pub mod three_way;

use std::mem;

/// Sorting has no meaningful behavior on zero-sized types.
#[inline]
fn is_zst<T>() -> bool {
    mem::size_of::<T>() == 0
}
