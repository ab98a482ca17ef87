// Calls slice::sort_unstable, the introsort style baseline.
pub mod rust_std;

pub mod heapsort;

pub mod insertion_sort;

// Bubble sort with a shrinking gap, gap factor 1.3 and the "rule of 11".
pub mod comb_sort;

// Hoare partition, first element pivot, maximum moved to the end as sentinel.
pub mod quicksort;

// Fork-join version of quicksort. Falls back to quicksort without the `parallel` feature.
pub mod parallel_quicksort;
