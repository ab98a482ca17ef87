use sort_test_tools::Key;

sort_impl!("comb_sort");

/// Gap sequence step, shrink factor ~1.3. Gaps of 9 and 10 are bumped to 11, the sequences that
/// pass through them leave more turtles behind for the final gap 1 passes.
#[inline]
fn next_gap(gap: usize) -> usize {
    match (gap * 10 + 3) / 13 {
        9 | 10 => 11,
        g => g,
    }
}

pub fn sort<T: Key>(v: &mut [T]) {
    let len = v.len();
    let mut gap = len;
    let mut swapped = false;

    while gap > 1 || swapped {
        gap = next_gap(gap);
        swapped = false;

        for i in 0..len.saturating_sub(gap) {
            if v[i + gap] < v[i] {
                v.swap(i, i + gap);
                swapped = true;
            }
        }
    }
}
