use sort_test_tools::Key;

sort_impl!("insertion_sort");

/// Sorts `v` by swapping each element backwards until its predecessor is not greater.
///
/// *O*(*n*^2) average and worst-case, *O*(*n*) on already sorted input.
pub fn sort<T: Key>(v: &mut [T]) {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && v[j] < v[j - 1] {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
