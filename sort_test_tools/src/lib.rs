//! Shared test patterns and the conformance suite every sort variant is instantiated against.

pub use sort_algos::{Complexity, Sort};

pub mod patterns;
