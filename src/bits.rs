use alloc::string::String;
use core::fmt::{self, Write};

use crate::Integer;

/// Displays the raw bits of an integer as `0b` followed by one digit per bit.
///
/// With `MSB_FIRST` the most significant bit comes first, as in a binary
/// literal. Otherwise the bits are listed from bit 0 upwards.
///
/// ```
/// use bcdpack::Binary;
///
/// assert_eq!(Binary::<u8>(0b0000_0110).to_string(), "0b00000110");
/// assert_eq!(Binary::<u8, false>(0b0000_0110).to_string(), "0b01100000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary<I, const MSB_FIRST: bool = true>(pub I);

impl<I: Integer, const MSB_FIRST: bool> fmt::Display for Binary<I, MSB_FIRST> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::<MSB_FIRST, _, _>(f, self.0)
    }
}

fn render<const MSB_FIRST: bool, I: Integer, W: Write>(out: &mut W, value: I) -> fmt::Result {
    let bits = value.to_bits();
    out.write_str("0b")?;

    for i in 0..I::BITS {
        let shift = if MSB_FIRST { I::BITS - 1 - i } else { i };
        out.write_char(if (bits >> shift) & 1 == 1 { '1' } else { '0' })?;
    }

    Ok(())
}

/// Renders `value` into a new string of exactly `2 + I::BITS` characters.
pub fn binary_to_text<const MSB_FIRST: bool, I: Integer>(value: I) -> String {
    let mut text = String::with_capacity(2 + I::BITS as usize);
    // Writing into a `String` can not fail.
    let _ = render::<MSB_FIRST, _, _>(&mut text, value);
    text
}

/// Writes the rendering of `value` to `writer`.
#[cfg(feature = "std")]
pub fn write_binary<const MSB_FIRST: bool, I: Integer, W: std::io::Write>(
    mut writer: W,
    value: I,
) -> std::io::Result<()> {
    write!(writer, "{}", Binary::<I, MSB_FIRST>(value))
}

/// Prints the rendering of `value` to stdout, without a trailing newline.
#[cfg(feature = "std")]
pub fn print_binary<const MSB_FIRST: bool, I: Integer>(value: I) {
    print!("{}", Binary::<I, MSB_FIRST>(value));
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_single_bit() {
        let text = binary_to_text::<true, u32>(1 << 30);
        assert_eq!(text.len(), 34);
        assert_eq!(&text[..4], "0b01");
        assert!(text[4..].chars().all(|c| c == '0'));

        let text = binary_to_text::<false, u32>(1 << 30);
        assert_eq!(&text[..2], "0b");
        assert_eq!(text.find('1'), Some(2 + 30));
    }

    #[test]
    fn test_signed() {
        assert_eq!(binary_to_text::<true, i8>(-1), "0b11111111");
        assert_eq!(binary_to_text::<true, i16>(-17), "0b1111111111101111");
    }

    #[test]
    fn test_packed_value() {
        let packed = crate::encode::<i16, u16, 8, 8>(-17);
        assert_eq!(binary_to_text::<true, _>(packed), "0b1111111100000111");
        assert_eq!(binary_to_text::<false, _>(packed), "0b1110000011111111");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_write_binary() {
        let mut out = Vec::new();
        write_binary::<true, _, _>(&mut out, 5u8).unwrap();
        assert_eq!(out, b"0b00000101");
    }

    macro_rules! test_width {
        ($type:ident) => {
            paste::paste! {
                #[test_strategy::proptest]
                fn [<test_length_ $type>](value: $type) {
                    let text = binary_to_text::<true, _>(value);
                    prop_assert_eq!(text.len(), 2 + $type::BITS as usize);
                    prop_assert!(text.starts_with("0b"));
                }

                #[test_strategy::proptest]
                fn [<test_matches_std_ $type>](value: $type) {
                    let width = 2 + $type::BITS as usize;
                    prop_assert_eq!(
                        binary_to_text::<true, _>(value),
                        format!("{:#0width$b}", value)
                    );
                }

                #[test_strategy::proptest]
                fn [<test_lsb_first_is_reversed_ $type>](value: $type) {
                    let msb = binary_to_text::<true, _>(value);
                    let lsb = binary_to_text::<false, _>(value);
                    prop_assert_eq!(&lsb[2..], msb[2..].chars().rev().collect::<String>());
                }
            }
        };
    }

    test_width!(u8);
    test_width!(i16);
    test_width!(u32);
    test_width!(i64);
    test_width!(u128);
}
