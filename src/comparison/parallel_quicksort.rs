use sort_test_tools::Key;

sort_impl!("parallel_quicksort");

/// Sorts `v` with the quicksort partition scheme, running both sides of a partition as separate
/// rayon tasks.
///
/// Forking stops after `log2(threads) + 4` levels or once a subrange holds at most
/// `PAR_THRESHOLD` elements, `slice::sort_unstable` finishes those subranges. With a single
/// worker thread the plain quicksort runs instead.
#[cfg(feature = "parallel")]
pub fn sort<T: Key>(v: &mut [T]) {
    use super::quicksort;

    let len = v.len();

    if len < 2 {
        return;
    }

    let threads = rayon::current_num_threads();
    if threads < 2 {
        tracing::trace!(threads, "single worker, running sequential quicksort");
        quicksort::sort(v);
        return;
    }

    let max = quicksort::max_index(v);
    v.swap(max, len - 1);

    par_quicksort(v, depth_budget(threads));
}

#[cfg(not(feature = "parallel"))]
pub fn sort<T: Key>(v: &mut [T]) {
    tracing::trace!("built without the parallel feature, running sequential quicksort");
    super::quicksort::sort(v);
}

#[cfg(feature = "parallel")]
const PAR_THRESHOLD: usize = 256;

#[cfg(feature = "parallel")]
fn depth_budget(threads: usize) -> u32 {
    threads.ilog2() + 4
}

/// Sorts all but the last element of `v`, which is the sentinel.
#[cfg(feature = "parallel")]
fn par_quicksort<T: Key>(v: &mut [T], depth_remaining: u32) {
    let region_len = v.len() - 1;

    if region_len <= PAR_THRESHOLD || depth_remaining == 0 {
        v[..region_len].sort_unstable();
        return;
    }

    let pivot = super::quicksort::partition(v);
    let (left, right) = v.split_at_mut(pivot + 1);

    rayon::join(
        || par_quicksort(left, depth_remaining - 1),
        || par_quicksort(right, depth_remaining - 1),
    );
}
