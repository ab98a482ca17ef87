use std::mem;

use sort_test_tools::Key;

sort_impl!("radix_sort");

pub(crate) const DIGIT_BITS: u32 = 8;
pub(crate) const NUM_BUCKETS: usize = 1 << DIGIT_BITS;
const BUCKET_MASK: u64 = NUM_BUCKETS as u64 - 1;

#[inline(always)]
pub(crate) fn digit<T: Key>(x: T, shift: u32) -> usize {
    ((x.to_key() >> shift) & BUCKET_MASK) as usize
}

/// Sorts `v` with a least significant digit first radix sort, one byte per pass.
///
/// Stable, *O*(*n* \* w / 8) for keys of w bits, allocates a scratch buffer the size of `v`.
pub fn sort<T: Key>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }

    let mut scratch = vec![T::default(); v.len()];
    sort_with_scratch(v, &mut scratch);
}

/// Radix sorts `v` using `scratch` as the second buffer. Both must have the same length.
///
/// Two optimizations over a plain LSD radix sort:
///
/// 1. The histogram for the next digit is computed in the same loop that scatters the elements
///    for the current digit. This saves a full read of the keys per pass.
/// 2. If every element maps to the same bucket, the scatter is skipped. The elements already
///    are in order with respect to that digit. The histogram for the next digit then has to be
///    computed separately.
///
/// Source and destination swap roles after every scatter. If an odd number of scatters happened
/// the result lives in `scratch` and is copied back once at the end.
pub(crate) fn sort_with_scratch<T: Key>(v: &mut [T], scratch: &mut [T]) {
    let len = v.len();
    assert_eq!(len, scratch.len());

    if len < 2 {
        return;
    }

    let mut bucket_size = [0usize; NUM_BUCKETS];
    let mut bucket_pos = [0usize; NUM_BUCKETS];
    let mut separate_histogram = true;
    let mut result_in_scratch = false;

    let mut src: &mut [T] = v;
    let mut dst: &mut [T] = scratch;

    let last_shift = T::BITS - DIGIT_BITS;

    for shift in (0..T::BITS).step_by(DIGIT_BITS as usize) {
        if separate_histogram {
            bucket_size = [0; NUM_BUCKETS];
            for &x in src.iter() {
                bucket_size[digit(x, shift)] += 1;
            }
        }

        if bucket_size[digit(src[0], shift)] == len {
            separate_histogram = true;
            continue;
        }

        separate_histogram = false;

        bucket_pos[0] = 0;
        for i in 0..NUM_BUCKETS - 1 {
            bucket_pos[i + 1] = bucket_pos[i] + bucket_size[i];
        }

        if shift == last_shift {
            // No further digit, no histogram needed.
            for &x in src.iter() {
                let d = digit(x, shift);
                dst[bucket_pos[d]] = x;
                bucket_pos[d] += 1;
            }
        } else {
            let next_shift = shift + DIGIT_BITS;
            bucket_size = [0; NUM_BUCKETS];

            for &x in src.iter() {
                let d = digit(x, shift);
                dst[bucket_pos[d]] = x;
                bucket_pos[d] += 1;
                bucket_size[digit(x, next_shift)] += 1;
            }
        }

        mem::swap(&mut src, &mut dst);
        result_in_scratch = !result_in_scratch;
    }

    if result_in_scratch {
        // `src` is `scratch` and `dst` is `v` at this point.
        dst.copy_from_slice(src);
    }
}
