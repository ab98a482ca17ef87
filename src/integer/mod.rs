// Counting sort, memory grows with the value range of the input, not with its length.
pub mod counting_sort;

// LSD radix sort over bytes with fused histograms and single-bucket skip.
pub mod radix_sort;

// Bucket sort on the most significant byte, buckets finished with radix_sort in parallel.
pub mod parallel_radix_sort;
