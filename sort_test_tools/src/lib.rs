use std::fmt::Debug;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Key;
}

/// Fixed-width integer element that every sort in the set can handle.
///
/// `to_key` maps the value onto `u64` so that unsigned comparison of keys matches `Ord` on the
/// values, flipping the sign bit for signed types. Distribution sorts read their digits and value
/// offsets from this key instead of the raw bit pattern.
pub trait Key: Copy + Ord + Default + Debug + Send + Sync + 'static {
    const BITS: u32;

    fn to_key(self) -> u64;

    fn from_key(key: u64) -> Self;
}

macro_rules! impl_key_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn to_key(self) -> u64 {
                    self as u64
                }

                #[inline(always)]
                fn from_key(key: u64) -> Self {
                    key as $ty
                }
            }
        )*
    };
}

macro_rules! impl_key_signed {
    ($($ty:ty => $unsigned:ty),*) => {
        $(
            impl Key for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn to_key(self) -> u64 {
                    ((self as $unsigned) ^ (1 << (<$ty>::BITS - 1))) as u64
                }

                #[inline(always)]
                fn from_key(key: u64) -> Self {
                    ((key as $unsigned) ^ (1 << (<$ty>::BITS - 1))) as $ty
                }
            }
        )*
    };
}

impl_key_unsigned!(u8, u16, u32, u64);
impl_key_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

#[doc(hidden)]
pub use paste;
