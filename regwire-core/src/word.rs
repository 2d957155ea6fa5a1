//! Word assembly and narrowing helpers

/// Assemble a 16-bit value from two bytes in bus order
///
/// The first byte received is the high byte.
pub const fn assemble_be(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// Values that can be narrowed to the byte that goes on the wire
///
/// Narrowing keeps the low 8 bits and discards the rest. Callers holding
/// multi-byte quantities must split them before sending if the upper bits
/// matter.
pub trait LowByte: Copy {
    /// Low 8 bits of the value
    fn low_byte(self) -> u8;
}

macro_rules! impl_low_byte {
    ($($t:ty),*) => {
        $(
            impl LowByte for $t {
                #[inline]
                fn low_byte(self) -> u8 {
                    self as u8
                }
            }
        )*
    };
}

impl_low_byte!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
