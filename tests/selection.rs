use sort_algos::selection;

mod basic {
    sort_test_tools::instantiate_sort_tests!(sort_algos::selection::basic::SortImpl);
}

mod stable {
    sort_test_tools::instantiate_sort_tests!(sort_algos::selection::stable::SortImpl);
}

#[test]
fn basic_breaks_equal_order() {
    let mut v = [(2, 'a'), (2, 'b'), (1, 'c')];
    selection::basic::sort_by(&mut v, |x, y| x.0.cmp(&y.0));

    // The swap that brings (1, 'c') to the front moves (2, 'a') behind (2, 'b').
    assert_eq!(v, [(1, 'c'), (2, 'b'), (2, 'a')]);
}

#[test]
fn stable_keeps_equal_order() {
    let mut v = [(2, 'a'), (2, 'b'), (1, 'c')];
    selection::stable::sort_by(&mut v, |x, y| x.0.cmp(&y.0));

    assert_eq!(v, [(1, 'c'), (2, 'a'), (2, 'b')]);
}

#[test]
fn basic_returns_sorted_slice() {
    let mut v = [99, 85, 61, 23, 2, 0, -14];
    let sorted = selection::basic::sort(&mut v);

    assert_eq!(sorted.first(), Some(&-14));
    assert_eq!(sorted.last(), Some(&99));
}
