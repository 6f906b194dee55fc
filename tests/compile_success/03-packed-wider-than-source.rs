use bcdpack::{encode, Bcd};

fn main() {
    assert_eq!(encode::<u8, u64, 4, 4>(59), 0x59);
    assert_eq!(Bcd::<i32, u128, 16, 16>::decode(0x0001_0002), 12);
}
