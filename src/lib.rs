//! Packs the two low decimal digits of an integer into adjacent bit fields.
//!
//! ```
//! use bcdpack::{binary_to_text, decode, encode};
//!
//! let packed = encode::<i16, u16, 8, 8>(-17);
//! assert_eq!(packed, 0xff07);
//! assert_eq!(binary_to_text::<true, _>(packed), "0b1111111100000111");
//!
//! // The sign does not survive the round trip.
//! assert_eq!(decode::<i16, u16, 8, 8>(packed), 2557);
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod bits;
mod codec;
mod digits;
mod error;
mod int;

#[cfg(feature = "std")]
pub use self::bits::{print_binary, write_binary};
pub use self::{
    bits::{binary_to_text, Binary},
    codec::{decode, encode, Bcd},
    digits::Digits,
    error::{Error, Field},
    int::{field_mask, Integer, Unsigned},
};
