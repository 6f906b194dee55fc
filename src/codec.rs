use core::marker::PhantomData;

use crate::{field_mask, Digits, Error, Field, Integer, Unsigned};

/// A two-digit packed decimal layout.
///
/// `I` is the integer being packed and `B` the unsigned type it is packed into.
/// The low `U_BITS` bits of the packed value hold the units digit and the
/// `T_BITS` bits above them hold the tens digit, both in base `BASE`:
///
/// ```text
///  | ... unused ... | tens (T_BITS) | units (U_BITS) |
/// ```
///
/// The layout is checked when it is instantiated: zero-width fields, fields
/// wider than `I`, or a base that `I` can not hold fail to compile.
///
/// ```
/// use bcdpack::Bcd;
///
/// type Clock = Bcd<u8, u8, 4, 4>;
///
/// assert_eq!(Clock::encode(59), 0x59);
/// assert_eq!(Clock::decode(0x59), 59);
/// ```
///
/// ```compile_fail
/// use bcdpack::Bcd;
///
/// // Nine bits of fields do not fit in a `u8`.
/// let _ = Bcd::<u8, u16, 1, 8>::encode(1);
/// ```
pub struct Bcd<I, B, const T_BITS: u32, const U_BITS: u32, const BASE: u32 = 10>(
    PhantomData<fn(I) -> B>,
);

impl<I, B, const T_BITS: u32, const U_BITS: u32, const BASE: u32> Bcd<I, B, T_BITS, U_BITS, BASE>
where
    I: Integer,
    B: Unsigned,
{
    /// Evaluated by every operation of the layout; fails the build when the
    /// parameters are invalid.
    ///
    /// Fields fill the source type exactly:
    ///
    /// ```
    /// use bcdpack::{encode, Bcd};
    ///
    /// assert_eq!(encode::<i16, u16, 8, 8>(-17), 0xff07);
    /// assert_eq!(Bcd::<i8, u8, 4, 4, 127>::encode(1), 1);
    /// ```
    ///
    /// A field can not be empty:
    ///
    /// ```compile_fail
    /// let _ = bcdpack::encode::<u8, u8, 0, 4>(7);
    /// ```
    ///
    /// ```compile_fail
    /// let _ = bcdpack::encode::<u8, u8, 4, 0>(7);
    /// ```
    ///
    /// Both fields must fit in the source type:
    ///
    /// ```compile_fail
    /// let _: i16 = bcdpack::decode::<i16, u32, 9, 8>(0);
    /// ```
    ///
    /// The packed type must be unsigned:
    ///
    /// ```compile_fail
    /// let _ = bcdpack::encode::<i16, i16, 8, 8>(-17);
    /// ```
    ///
    /// The base must be at least 2 and fit in the source type:
    ///
    /// ```compile_fail
    /// let _ = bcdpack::Bcd::<u8, u8, 4, 4, 1>::encode(1);
    /// ```
    ///
    /// ```compile_fail
    /// let _ = bcdpack::Bcd::<i8, u8, 4, 4, 128>::encode(1);
    /// ```
    pub const ASSERT_LAYOUT: () = {
        assert!(T_BITS != 0 && U_BITS != 0, "tens and units widths can not be zero");
        assert!(
            T_BITS as u64 + U_BITS as u64 <= I::BITS as u64,
            "tens and units widths exceed the width of the source type"
        );
        assert!(BASE >= 2, "base must be at least 2");
        assert!(BASE as u128 <= I::MAX, "base does not fit in the source type");
    };

    /// Total number of bits used by both fields.
    pub const WIDTH: u32 = {
        let () = Self::ASSERT_LAYOUT;
        T_BITS + U_BITS
    };

    pub const T_MASK: u128 = {
        let () = Self::ASSERT_LAYOUT;
        field_mask(I::BITS, T_BITS)
    };

    pub const U_MASK: u128 = {
        let () = Self::ASSERT_LAYOUT;
        field_mask(I::BITS, U_BITS)
    };

    #[inline(always)]
    fn base() -> I {
        I::from_base(BASE)
    }

    /// Splits `num` into its tens and units digits without masking.
    #[inline]
    pub fn split(num: I) -> Digits<I> {
        let () = Self::ASSERT_LAYOUT;
        let (tens, units) = num.div_rem(Self::base());
        Digits::new(tens, units.abs())
    }

    /// Packs the tens and units digits of `num`.
    ///
    /// Digits wider than their field are truncated to it. Negative values keep
    /// the two's complement bits of their tens digit, so they do not survive
    /// [`Bcd::decode`].
    #[inline]
    pub fn encode(num: I) -> B {
        let () = Self::ASSERT_LAYOUT;
        let digits = Self::split(num);
        B::from_bits(Self::pack(digits))
    }

    /// Like [`Bcd::encode`], but refuses values that would not decode back to
    /// themselves.
    pub fn encode_checked(num: I) -> Result<B, Error> {
        let () = Self::ASSERT_LAYOUT;
        if num.is_negative() {
            return Err(Error::SignLost);
        }

        let digits = Self::split(num);
        if digits.tens.to_bits() > Self::T_MASK {
            return Err(Error::FieldOverflow {
                field: Field::Tens,
                bits: T_BITS,
            });
        }
        if digits.units.to_bits() > Self::U_MASK {
            return Err(Error::FieldOverflow {
                field: Field::Units,
                bits: U_BITS,
            });
        }

        let packed = Self::pack(digits);
        if packed > B::ONES {
            return Err(Error::FieldOverflow {
                field: Field::Packed,
                bits: B::BITS,
            });
        }

        Ok(B::from_bits(packed))
    }

    /// Masked `(tens, units)` fields of a packed value.
    #[inline]
    pub fn fields(bin: B) -> (B, B) {
        let () = Self::ASSERT_LAYOUT;
        let bits = bin.to_bits();
        (
            B::from_bits((bits >> U_BITS) & Self::T_MASK),
            B::from_bits(bits & Self::U_MASK),
        )
    }

    /// Rebuilds `tens * BASE + units` from a packed value.
    ///
    /// Both fields are read as non-negative, so the result is never the
    /// negative number that was encoded.
    #[inline]
    pub fn decode(bin: B) -> I {
        let () = Self::ASSERT_LAYOUT;
        let (tens, units) = Self::fields(bin);
        let tens = I::from_bits(tens.to_bits());
        let units = I::from_bits(units.to_bits());
        // No-op: the units field is at most `I::BITS - 1` bits wide.
        let units = if I::SIGNED { units.abs() } else { units };
        Digits::new(tens, units).value(Self::base())
    }

    #[inline(always)]
    fn pack(digits: Digits<I>) -> u128 {
        let tens = digits.tens.to_bits() & Self::T_MASK;
        let units = digits.units.to_bits() & Self::U_MASK;
        (tens << U_BITS) | units
    }
}

/// Packs `num` in base 10. See [`Bcd::encode`].
#[inline]
pub fn encode<I, B, const T_BITS: u32, const U_BITS: u32>(num: I) -> B
where
    I: Integer,
    B: Unsigned,
{
    Bcd::<I, B, T_BITS, U_BITS>::encode(num)
}

/// Unpacks a base 10 value. See [`Bcd::decode`].
#[inline]
pub fn decode<I, B, const T_BITS: u32, const U_BITS: u32>(bin: B) -> I
where
    I: Integer,
    B: Unsigned,
{
    Bcd::<I, B, T_BITS, U_BITS>::decode(bin)
}
