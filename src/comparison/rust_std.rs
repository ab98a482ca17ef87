use sort_test_tools::Key;

sort_impl!("rust_std_unstable");

#[inline]
pub fn sort<T: Key>(v: &mut [T]) {
    v.sort_unstable();
}
