use sort_test_tools::Key;

sort_impl!("counting_sort");

/// Sorts `v` by tallying every value between the minimum and the maximum and writing the values
/// back in ascending order.
///
/// Runs in *O*(*n* + *k*) time and allocates *k* counters, where *k* is `max - min + 1`. This is
/// only practical for inputs with a bounded value range, a slice holding both `i32::MIN` and
/// `i32::MAX` needs 2^32 counters.
///
/// # Panics
///
/// Panics if *k* does not fit into `usize`.
pub fn sort<T: Key>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }

    let (min, max) = min_max(v);
    let base = min.to_key();

    let Some(range) = usize::try_from(max.to_key() - base)
        .ok()
        .and_then(|r| r.checked_add(1))
    else {
        panic!("value range {min:?}..={max:?} is too wide for counting sort");
    };

    let mut counts = vec![0usize; range];
    for x in v.iter() {
        counts[(x.to_key() - base) as usize] += 1;
    }

    let mut start = 0;
    for (offset, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        let end = start + count;
        v[start..end].fill(T::from_key(base + offset as u64));
        start = end;
    }
}

fn min_max<T: Key>(v: &[T]) -> (T, T) {
    let mut min = v[0];
    let mut max = v[0];

    for &x in &v[1..] {
        if x < min {
            min = x;
        } else if max < x {
            max = x;
        }
    }

    (min, max)
}
