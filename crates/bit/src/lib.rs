//! Bit-manipulation primitives shared by the binary-indexed structures.

/// Bit queries on unsigned integers.
pub trait Bits: Copy {
    /// Smallest power of two that is `>= self`. `0` maps to `1`.
    fn bit_ceil(self) -> Self;

    /// Index of the most significant set bit. `self` must be non-zero.
    fn highest_bit_pos(self) -> u32;

    /// Index of the least significant set bit. `self` must be non-zero.
    fn lowest_bit_pos(self) -> u32;

    /// Value of the least significant set bit (`0` for `0`).
    fn lowest_bit(self) -> Self;

    fn popcount(self) -> u32;
}

macro_rules! impl_bits {
    ($($t:ty),*) => {$(
        impl Bits for $t {
            #[inline(always)]
            fn bit_ceil(self) -> Self {
                self.next_power_of_two()
            }

            #[inline(always)]
            fn highest_bit_pos(self) -> u32 {
                debug_assert!(self != 0);
                <$t>::BITS - 1 - self.leading_zeros()
            }

            #[inline(always)]
            fn lowest_bit_pos(self) -> u32 {
                debug_assert!(self != 0);
                self.trailing_zeros()
            }

            #[inline(always)]
            fn lowest_bit(self) -> Self {
                self & self.wrapping_neg()
            }

            #[inline(always)]
            fn popcount(self) -> u32 {
                self.count_ones()
            }
        }
    )*};
}

impl_bits!(u8, u16, u32, u64, u128, usize);
