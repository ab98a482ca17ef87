use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sort_test_tools::{Key, Sort};

use crate::error::BenchError;
use crate::patterns::{self, Pattern};

/// Outcome of one verified benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    pub sort: String,
    pub len: usize,
    pub pattern: Pattern,
    pub elapsed: Duration,
}

impl BenchResult {
    /// Elapsed time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// Generates a `len` element array ordered according to `pattern`, times `S` sorting it and
/// checks the result is non-decreasing.
///
/// The array is dropped before this returns, on the error path too. A `len` of zero is a no-op
/// that reports a zero duration.
pub fn benchmark<S: Sort>(len: usize, pattern: Pattern) -> Result<BenchResult, BenchError> {
    benchmark_with::<S, _>(len, pattern, &mut StdRng::from_entropy())
}

/// Same as [`benchmark`], generating the array with `rng`.
pub fn benchmark_with<S: Sort, R: Rng>(
    len: usize,
    pattern: Pattern,
    rng: &mut R,
) -> Result<BenchResult, BenchError> {
    let sort = S::name();

    if len == 0 {
        return Ok(BenchResult {
            sort,
            len,
            pattern,
            elapsed: Duration::ZERO,
        });
    }

    let mut v = patterns::generate_with(len, pattern, rng)?;

    let start = Instant::now();
    S::sort(&mut v);
    let elapsed = start.elapsed();

    if let Err(err) = verify_sorted(&sort, &v) {
        tracing::error!(len, %pattern, %err, "sort produced unsorted output");
        return Err(err);
    }

    tracing::debug!(
        %sort,
        len,
        %pattern,
        elapsed_ms = elapsed.as_secs_f64() * 1_000.0,
        "benchmark done"
    );

    Ok(BenchResult {
        sort,
        len,
        pattern,
        elapsed,
    })
}

/// Returns true if every element is less than or equal to its successor.
pub fn is_sorted<T: Key>(v: &[T]) -> bool {
    first_unsorted(v).is_ok()
}

/// Checks that `v` is non-decreasing, `sort` names the culprit in the error.
pub fn verify_sorted<T: Key>(sort: &str, v: &[T]) -> Result<(), BenchError> {
    first_unsorted(v).map_err(|index| BenchError::Unsorted {
        sort: sort.to_owned(),
        index,
    })
}

fn first_unsorted<T: Key>(v: &[T]) -> Result<(), usize> {
    match v.windows(2).position(|w| w[1] < w[0]) {
        Some(index) => Err(index),
        None => Ok(()),
    }
}
