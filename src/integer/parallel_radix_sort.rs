use sort_test_tools::Key;

sort_impl!("parallel_radix_sort");

/// Sorts `v` with a parallel bucket sort.
///
/// One pass scatters the elements by their most significant byte into 256 buckets, then every
/// non-empty bucket is finished by `radix_sort` on its own rayon task. Inputs below
/// `PAR_THRESHOLD` elements, or a pool with a single worker, use the sequential radix sort.
#[cfg(feature = "parallel")]
pub fn sort<T: Key>(v: &mut [T]) {
    use std::mem;

    use rayon::prelude::*;

    use super::radix_sort::{self, digit, DIGIT_BITS, NUM_BUCKETS};

    let len = v.len();
    let threads = rayon::current_num_threads();

    if len < PAR_THRESHOLD || threads < 2 {
        tracing::trace!(len, threads, "running sequential radix sort");
        radix_sort::sort(v);
        return;
    }

    let shift = T::BITS - DIGIT_BITS;

    let mut counts = [0usize; NUM_BUCKETS];
    for &x in v.iter() {
        counts[digit(x, shift)] += 1;
    }

    let mut pos = [0usize; NUM_BUCKETS];
    for i in 0..NUM_BUCKETS - 1 {
        pos[i + 1] = pos[i] + counts[i];
    }

    let mut scratch = vec![T::default(); len];
    for &x in v.iter() {
        let d = digit(x, shift);
        scratch[pos[d]] = x;
        pos[d] += 1;
    }

    // Carve matching, disjoint bucket chunks out of both buffers.
    let mut buckets: Vec<(&mut [T], &mut [T])> = Vec::with_capacity(NUM_BUCKETS);
    let mut rest_v: &mut [T] = v;
    let mut rest_scratch: &mut [T] = &mut scratch;

    for &count in counts.iter().filter(|&&count| count != 0) {
        let (bucket_v, tail_v) = mem::take(&mut rest_v).split_at_mut(count);
        let (bucket_scratch, tail_scratch) = mem::take(&mut rest_scratch).split_at_mut(count);
        rest_v = tail_v;
        rest_scratch = tail_scratch;
        buckets.push((bucket_v, bucket_scratch));
    }

    buckets.into_par_iter().for_each(|(bucket_v, bucket_scratch)| {
        bucket_v.copy_from_slice(bucket_scratch);
        radix_sort::sort_with_scratch(bucket_v, bucket_scratch);
    });
}

#[cfg(not(feature = "parallel"))]
pub fn sort<T: Key>(v: &mut [T]) {
    tracing::trace!("built without the parallel feature, running sequential radix sort");
    super::radix_sort::sort(v);
}

#[cfg(feature = "parallel")]
const PAR_THRESHOLD: usize = 4_096;
