use sort_test_tools::Key;

sort_impl!("heapsort");

/// Sorts `v` using heapsort, which is *O*(*n* \* log(*n*)) worst-case and not stable.
///
/// First turns `v` into a binary max-heap in place, then repeatedly swaps the root with the last
/// heap element and restores the heap property over the shrunken prefix.
pub fn sort<T: Key>(v: &mut [T]) {
    let len = v.len();

    if len < 2 {
        return;
    }

    // Build the heap in linear time.
    for node in (0..len / 2).rev() {
        sift_down(v, node);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0);
    }
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<T: Key>(v: &mut [T], mut node: usize) {
    let len = v.len();

    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && v[child] < v[child + 1] {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if v[node] >= v[child] {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
