use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;

use sort_test_tools::Sort;
use sort_timer_rs::comparison::{
    comb_sort, heapsort, insertion_sort, parallel_quicksort, quicksort, rust_std,
};
use sort_timer_rs::integer::{counting_sort, parallel_radix_sort, radix_sort};
use sort_timer_rs::patterns::generate_with;
use sort_timer_rs::Pattern;

const TEST_SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

// Quadratic sorts get only the small sizes, everything else would take minutes per sample.
const QUADRATIC_MAX_LEN: usize = 10_000;

fn pin_thread_to_core() {
    let core_ids = core_affinity::get_core_ids().unwrap_or_default();
    // Avoid the first core, it tends to pick up most interrupts.
    if let Some(core_id) = core_ids.get(1).or_else(|| core_ids.first()) {
        core_affinity::set_for_current(*core_id);
    }
}

fn bench_sort<S: Sort>(c: &mut Criterion, filter: &Option<Regex>, max_len: usize) {
    let name = S::name();

    if let Some(re) = filter {
        if !re.is_match(&name) {
            return;
        }
    }

    for pattern in Pattern::ALL {
        let mut group = c.benchmark_group(format!("{name}-{pattern}"));

        for len in TEST_SIZES.into_iter().filter(|&len| len <= max_len) {
            if name == "quicksort" && pattern == Pattern::Ordered && len > QUADRATIC_MAX_LEN {
                continue;
            }

            let mut rng = StdRng::seed_from_u64(len as u64);
            let input = generate_with(len, pattern, &mut rng).unwrap();

            group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
                b.iter_batched_ref(
                    || input.clone(),
                    |v| {
                        S::sort(black_box(v.as_mut_slice()));
                    },
                    BatchSize::LargeInput,
                )
            });
        }

        group.finish();
    }
}

fn sort_benchmarks(c: &mut Criterion) {
    pin_thread_to_core();

    // e.g. BENCH_REGEX="radix" cargo bench
    let filter = env::var("BENCH_REGEX")
        .ok()
        .map(|s| Regex::new(&s).unwrap());

    bench_sort::<rust_std::SortImpl>(c, &filter, usize::MAX);
    bench_sort::<heapsort::SortImpl>(c, &filter, usize::MAX);
    bench_sort::<insertion_sort::SortImpl>(c, &filter, QUADRATIC_MAX_LEN);
    bench_sort::<comb_sort::SortImpl>(c, &filter, usize::MAX);
    bench_sort::<counting_sort::SortImpl>(c, &filter, usize::MAX);
    bench_sort::<radix_sort::SortImpl>(c, &filter, usize::MAX);
    bench_sort::<quicksort::SortImpl>(c, &filter, usize::MAX);
    bench_sort::<parallel_quicksort::SortImpl>(c, &filter, usize::MAX);
    bench_sort::<parallel_radix_sort::SortImpl>(c, &filter, usize::MAX);
}

criterion_group!(benches, sort_benchmarks);
criterion_main!(benches);
