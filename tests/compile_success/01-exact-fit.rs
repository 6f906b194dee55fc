use bcdpack::{decode, encode, Bcd};

fn main() {
    // Both fields together use every bit of the source type.
    assert_eq!(encode::<i16, u16, 8, 8>(-17), 0xff07);
    assert_eq!(decode::<u8, u8, 4, 4>(0x99), 99);
    assert_eq!(Bcd::<i128, u128, 64, 64>::encode(42), (4 << 64) | 2);
}
