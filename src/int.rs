use core::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// A primitive integer the codec can take apart and put back together.
///
/// Every value is moved through a `u128` "raw bits" form: the two's complement
/// pattern of the value, zero-extended. All masking and shifting happens there,
/// so the same code serves every width and signedness.
pub trait Integer: Copy + PartialEq + PartialOrd + Debug + Send + Sync + private::Sealed {
    /// Width of the type in bits.
    const BITS: u32;
    const SIGNED: bool;
    /// Largest positive value, as raw bits.
    const MAX: u128;
    /// Every bit of the type set, as raw bits.
    const ONES: u128 = u128::MAX >> (128 - Self::BITS);

    /// Converts a base that is known to fit the type.
    fn from_base(base: u32) -> Self;

    /// Native truncating division and remainder.
    fn div_rem(self, rhs: Self) -> (Self, Self);

    /// Absolute value. The identity for unsigned types.
    fn abs(self) -> Self;

    fn is_negative(self) -> bool;

    fn wrapping_mul(self, rhs: Self) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn to_bits(self) -> u128;

    /// Truncates `bits` to the width of the type.
    fn from_bits(bits: u128) -> Self;
}

/// Marker for the integer types a packed value may be stored in.
pub trait Unsigned: Integer {}

macro_rules! impl_integer {
    (unsigned $type:ty) => {
        impl private::Sealed for $type {}

        impl Integer for $type {
            const BITS: u32 = <$type>::BITS;
            const SIGNED: bool = false;
            const MAX: u128 = <$type>::MAX as u128;

            #[inline(always)]
            fn from_base(base: u32) -> Self {
                base as $type
            }

            #[inline(always)]
            fn div_rem(self, rhs: Self) -> (Self, Self) {
                (self / rhs, self % rhs)
            }

            #[inline(always)]
            fn abs(self) -> Self {
                self
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                false
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$type>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$type>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn to_bits(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn from_bits(bits: u128) -> Self {
                bits as $type
            }
        }

        impl Unsigned for $type {}
    };
    (signed $type:ty => $unsigned:ty) => {
        impl private::Sealed for $type {}

        impl Integer for $type {
            const BITS: u32 = <$type>::BITS;
            const SIGNED: bool = true;
            const MAX: u128 = <$type>::MAX as u128;

            #[inline(always)]
            fn from_base(base: u32) -> Self {
                base as $type
            }

            #[inline(always)]
            fn div_rem(self, rhs: Self) -> (Self, Self) {
                (self / rhs, self % rhs)
            }

            // A remainder is always smaller in magnitude than the base, so it
            // never hits the `MIN` case.
            #[inline(always)]
            fn abs(self) -> Self {
                self.wrapping_abs()
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$type>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$type>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn to_bits(self) -> u128 {
                self as $unsigned as u128
            }

            #[inline(always)]
            fn from_bits(bits: u128) -> Self {
                bits as $unsigned as $type
            }
        }
    };
}

impl_integer!(unsigned u8);
impl_integer!(unsigned u16);
impl_integer!(unsigned u32);
impl_integer!(unsigned u64);
impl_integer!(unsigned u128);
impl_integer!(unsigned usize);
impl_integer!(signed i8 => u8);
impl_integer!(signed i16 => u16);
impl_integer!(signed i32 => u32);
impl_integer!(signed i64 => u64);
impl_integer!(signed i128 => u128);
impl_integer!(signed isize => usize);

/// Mask with the low `bits` bits set, for a field inside a `width`-bit type.
///
/// Derived as "all ones of the type, shifted right by the unused bits", so the
/// mask never reaches past `width`.
#[inline(always)]
pub const fn field_mask(width: u32, bits: u32) -> u128 {
    (u128::MAX >> (128 - width)) >> (width - bits)
}
