use crate::Integer;

/// The two base-`BASE` digits a value is packed from.
///
/// `tens` is the truncated quotient and keeps the sign of the value it came
/// from. `units` is the magnitude of the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits<I> {
    pub tens: I,
    pub units: I,
}

impl<I: Integer> Digits<I> {
    #[inline(always)]
    pub const fn new(tens: I, units: I) -> Self {
        Self { tens, units }
    }

    /// `tens * base + units`, wrapping on overflow.
    #[inline]
    pub fn value(self, base: I) -> I {
        self.tens.wrapping_mul(base).wrapping_add(self.units)
    }

    /// Whether both digits fit their field masks without truncation.
    #[inline]
    pub fn fits(self, t_mask: u128, u_mask: u128) -> bool {
        !self.tens.is_negative()
            && self.tens.to_bits() <= t_mask
            && self.units.to_bits() <= u_mask
    }
}
