mod iterative {
    sort_test_tools::instantiate_sort_tests!(sort_algos::insertion::iterative::SortImpl);
}

mod recursive {
    sort_test_tools::instantiate_sort_tests!(sort_algos::insertion::recursive::SortImpl);
}

mod binary {
    sort_test_tools::instantiate_sort_tests!(sort_algos::insertion::binary::SortImpl);
}
