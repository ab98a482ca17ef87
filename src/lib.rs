pub use sort_test_tools::{Key, Sort};

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: sort_test_tools::Key,
            {
                sort(v);
            }
        }
    };
}

pub mod comparison;
pub mod integer;

pub mod benchmark;
pub mod error;
pub mod patterns;
pub mod registry;

pub use benchmark::{benchmark, benchmark_with, is_sorted, verify_sorted, BenchResult};
pub use error::BenchError;
pub use patterns::Pattern;
