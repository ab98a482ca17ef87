use sort_test_tools::Key;

sort_impl!("quicksort");

/// Sorts `v` with a textbook Hoare quicksort.
///
/// The maximum is moved to the last position first. It stays there and serves as the sentinel
/// that stops the left-to-right scan of every partition, so the scans need no bounds check of
/// their own. The pivot is always the first element of the subrange, which makes already sorted
/// input the degenerate case: *O*(*n*^2) comparisons with one empty partition per step.
pub fn sort<T: Key>(v: &mut [T]) {
    let len = v.len();

    if len < 2 {
        return;
    }

    let max = max_index(v);
    v.swap(max, len - 1);

    quicksort(v);
}

/// Position of the first maximal element. `v` must not be empty.
pub(crate) fn max_index<T: Key>(v: &[T]) -> usize {
    let mut max = 0;
    for i in 1..v.len() {
        if v[max] < v[i] {
            max = i;
        }
    }
    max
}

/// Sorts all but the last element of `v`. The last element must not be less than any other.
fn quicksort<T: Key>(mut v: &mut [T]) {
    // Subranges with less than two elements are sorted.
    while v.len() > 2 {
        let pivot = partition(v);

        // The pivot closes the left side and is its sentinel, the right side keeps the sentinel
        // of `v`.
        let (left, right) = v.split_at_mut(pivot + 1);

        // Recurse into the shorter side to bound the stack depth to log2(len), ordered input
        // would otherwise recurse once per element.
        if left.len() < right.len() {
            quicksort(left);
            v = right;
        } else {
            quicksort(right);
            v = left;
        }
    }
}

/// Partitions `v[..v.len() - 1]` around its first element and returns the final position of
/// that pivot. Afterwards no element left of it is greater and no element right of it is less.
///
/// `v.len()` must be at least 2 and `v[v.len() - 1]` must not be less than any element before it.
pub(crate) fn partition<T: Key>(v: &mut [T]) -> usize {
    let bound = v[0];
    let mut lower = 1;
    let mut upper = v.len() - 2;

    while lower <= upper {
        // Stops at the sentinel at the latest.
        while v[lower] < bound {
            lower += 1;
        }

        // Stops at the pivot at the latest.
        while bound < v[upper] {
            upper -= 1;
        }

        if lower < upper {
            v.swap(lower, upper);
            upper -= 1;
        }

        lower += 1;
    }

    v.swap(upper, 0);

    upper
}
