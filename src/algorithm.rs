//! Runtime selection of a sort variant by name.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::HybridConfig;
use crate::counting::DiscreteKey;
use crate::{bubble, counting, insertion, merge, quicksort, selection};

#[derive(Debug, Error)]
#[error("unknown sort algorithm '{name}'")]
pub struct ParseAlgorithmError {
    pub name: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    QuickBasic,
    QuickHoare,
    QuickMedianOfThree,
    QuickTailCall,
    QuickHybrid,
    QuickIterative,
    QuickThreeWay,
    InsertionIterative,
    InsertionRecursive,
    InsertionBinary,
    MergeTopDown,
    MergeBottomUp,
    BubbleBasic,
    BubbleAdaptive,
    BubbleRecursive,
    SelectionBasic,
    SelectionStable,
    CountingStable,
    CountingDirectFill,
}

impl Algorithm {
    pub const ALL: [Algorithm; 19] = [
        Algorithm::QuickBasic,
        Algorithm::QuickHoare,
        Algorithm::QuickMedianOfThree,
        Algorithm::QuickTailCall,
        Algorithm::QuickHybrid,
        Algorithm::QuickIterative,
        Algorithm::QuickThreeWay,
        Algorithm::InsertionIterative,
        Algorithm::InsertionRecursive,
        Algorithm::InsertionBinary,
        Algorithm::MergeTopDown,
        Algorithm::MergeBottomUp,
        Algorithm::BubbleBasic,
        Algorithm::BubbleAdaptive,
        Algorithm::BubbleRecursive,
        Algorithm::SelectionBasic,
        Algorithm::SelectionStable,
        Algorithm::CountingStable,
        Algorithm::CountingDirectFill,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::QuickBasic => "quick-basic",
            Algorithm::QuickHoare => "quick-hoare",
            Algorithm::QuickMedianOfThree => "quick-median-of-three",
            Algorithm::QuickTailCall => "quick-tail-call",
            Algorithm::QuickHybrid => "quick-hybrid",
            Algorithm::QuickIterative => "quick-iterative",
            Algorithm::QuickThreeWay => "quick-three-way",
            Algorithm::InsertionIterative => "insertion",
            Algorithm::InsertionRecursive => "insertion-recursive",
            Algorithm::InsertionBinary => "insertion-binary",
            Algorithm::MergeTopDown => "merge",
            Algorithm::MergeBottomUp => "merge-bottom-up",
            Algorithm::BubbleBasic => "bubble",
            Algorithm::BubbleAdaptive => "bubble-adaptive",
            Algorithm::BubbleRecursive => "bubble-recursive",
            Algorithm::SelectionBasic => "selection",
            Algorithm::SelectionStable => "selection-stable",
            Algorithm::CountingStable => "counting",
            Algorithm::CountingDirectFill => "counting-direct-fill",
        }
    }

    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::InsertionIterative
                | Algorithm::InsertionRecursive
                | Algorithm::InsertionBinary
                | Algorithm::MergeTopDown
                | Algorithm::MergeBottomUp
                | Algorithm::BubbleBasic
                | Algorithm::BubbleAdaptive
                | Algorithm::BubbleRecursive
                | Algorithm::SelectionStable
                | Algorithm::CountingStable
        )
    }

    #[inline]
    pub fn sort<K: DiscreteKey>(self, v: &mut [K]) {
        self.sort_with_config(v, HybridConfig::global());
    }

    /// Like [`Algorithm::sort`], `config` only affects [`Algorithm::QuickHybrid`].
    pub fn sort_with_config<K: DiscreteKey>(self, v: &mut [K], config: &HybridConfig) {
        match self {
            Algorithm::QuickBasic => quicksort::basic::sort(v),
            Algorithm::QuickHoare => quicksort::hoare::sort(v),
            Algorithm::QuickMedianOfThree => quicksort::median_of_three::sort(v),
            Algorithm::QuickTailCall => quicksort::tail_call::sort(v),
            Algorithm::QuickHybrid => quicksort::hybrid::sort_with_config(v, config),
            Algorithm::QuickIterative => quicksort::iterative::sort(v),
            Algorithm::QuickThreeWay => quicksort::three_way::sort(v),
            Algorithm::InsertionIterative => insertion::iterative::sort(v),
            Algorithm::InsertionRecursive => insertion::recursive::sort(v),
            Algorithm::InsertionBinary => insertion::binary::sort(v),
            Algorithm::MergeTopDown => merge::top_down::sort(v),
            Algorithm::MergeBottomUp => merge::bottom_up::sort(v),
            Algorithm::BubbleBasic => bubble::basic::sort(v),
            Algorithm::BubbleAdaptive => bubble::adaptive::sort(v),
            Algorithm::BubbleRecursive => bubble::recursive::sort(v),
            Algorithm::SelectionBasic => {
                selection::basic::sort(v);
            }
            Algorithm::SelectionStable => selection::stable::sort(v),
            Algorithm::CountingStable => counting::stable::sort(v),
            Algorithm::CountingDirectFill => counting::direct_fill::sort(v),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| ParseAlgorithmError { name: s.to_owned() })
    }
}
