use once_cell::sync::Lazy;
use sort_test_tools::Sort;

use crate::benchmark::{benchmark, BenchResult};
use crate::comparison::{
    comb_sort, heapsort, insertion_sort, parallel_quicksort, quicksort, rust_std,
};
use crate::error::BenchError;
use crate::integer::{counting_sort, parallel_radix_sort, radix_sort};
use crate::patterns::Pattern;

pub type BenchFn = fn(usize, Pattern) -> Result<BenchResult, BenchError>;

/// A runnable line of the benchmark report.
pub struct Entry {
    pub name: String,
    /// Overrides the requested pattern, used to show quicksort's ordered input behaviour.
    pub fixed_pattern: Option<Pattern>,
    bench: BenchFn,
}

impl Entry {
    fn new<S: Sort>() -> Self {
        Self {
            name: S::name(),
            fixed_pattern: None,
            bench: benchmark::<S>,
        }
    }

    fn with_pattern<S: Sort>(pattern: Pattern) -> Self {
        Self {
            name: format!("{}_{}", S::name(), pattern),
            fixed_pattern: Some(pattern),
            bench: benchmark::<S>,
        }
    }

    pub fn run(&self, len: usize, pattern: Pattern) -> Result<BenchResult, BenchError> {
        (self.bench)(len, self.fixed_pattern.unwrap_or(pattern))
    }
}

static ENTRIES: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        Entry::new::<rust_std::SortImpl>(),
        Entry::new::<heapsort::SortImpl>(),
        Entry::new::<insertion_sort::SortImpl>(),
        Entry::new::<comb_sort::SortImpl>(),
        Entry::new::<counting_sort::SortImpl>(),
        Entry::new::<radix_sort::SortImpl>(),
        Entry::new::<parallel_quicksort::SortImpl>(),
        Entry::new::<parallel_radix_sort::SortImpl>(),
        Entry::new::<quicksort::SortImpl>(),
        Entry::with_pattern::<quicksort::SortImpl>(Pattern::Ordered),
    ]
});

/// Every benchmark in report order.
pub fn entries() -> &'static [Entry] {
    &ENTRIES
}
