use bcdpack::Bcd;

type Hex = Bcd<u16, u16, 12, 4, 16>;
type Octal = Bcd<i8, u8, 4, 3, 8>;

fn main() {
    assert_eq!(Hex::encode(0x1f3), 0x1f3);
    assert_eq!(Octal::encode(0o17), 0b0001_111);
    assert_eq!(Octal::decode(0b0001_111), 0o17);
}
