use sort_test_tools::instantiate_sort_tests;

mod rust_std {
    use super::*;
    type TestSort = sort_timer_rs::comparison::rust_std::SortImpl;
    instantiate_sort_tests!(TestSort);
}

mod heapsort {
    use super::*;
    type TestSort = sort_timer_rs::comparison::heapsort::SortImpl;
    instantiate_sort_tests!(TestSort);
}

mod insertion_sort {
    use super::*;
    type TestSort = sort_timer_rs::comparison::insertion_sort::SortImpl;
    instantiate_sort_tests!(TestSort);
}

mod comb_sort {
    use super::*;
    type TestSort = sort_timer_rs::comparison::comb_sort::SortImpl;
    instantiate_sort_tests!(TestSort);
}

mod quicksort {
    use super::*;
    type TestSort = sort_timer_rs::comparison::quicksort::SortImpl;
    instantiate_sort_tests!(TestSort);
}

mod parallel_quicksort {
    use super::*;
    type TestSort = sort_timer_rs::comparison::parallel_quicksort::SortImpl;
    instantiate_sort_tests!(TestSort);
}

// Wider keys would need up to 2^64 counters.
mod counting_sort {
    use super::*;
    type TestSort = sort_timer_rs::integer::counting_sort::SortImpl;
    instantiate_sort_tests!(TestSort, [i8, u8, i16, u16]);
}

mod radix_sort {
    use super::*;
    type TestSort = sort_timer_rs::integer::radix_sort::SortImpl;
    instantiate_sort_tests!(TestSort);
}

mod parallel_radix_sort {
    use super::*;
    type TestSort = sort_timer_rs::integer::parallel_radix_sort::SortImpl;
    instantiate_sort_tests!(TestSort);
}
