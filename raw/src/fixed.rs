/// A value with a fixed-width, little-endian slot in a record body.
///
/// `put` and `get` operate on the slice starting at the field's offset and
/// panic if it is shorter than [`Fixed::SIZE`]; generated code checks the
/// record length once before reading any field.
pub trait Fixed: Sized {
    const SIZE: usize;

    fn put(&self, b: &mut [u8]);

    fn get(b: &[u8]) -> Self;
}

macro_rules! impl_fixed_le {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Fixed for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn put(&self, b: &mut [u8]) {
                    b[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
                }

                fn get(b: &[u8]) -> Self {
                    let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                    bytes.copy_from_slice(&b[..Self::SIZE]);
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_fixed_le!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl Fixed for bool {
    const SIZE: usize = 1;

    fn put(&self, b: &mut [u8]) {
        b[0] = u8::from(*self);
    }

    fn get(b: &[u8]) -> Self {
        b[0] != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_are_little_endian() {
        let mut b = [0u8; 4];
        0x0102_0304_i32.put(&mut b);
        assert_eq!(b, [4, 3, 2, 1]);
        assert_eq!(i32::get(&b), 0x0102_0304);
    }

    #[test]
    fn test_put_only_touches_its_slot() {
        let mut b = [0xAAu8; 6];
        7u16.put(&mut b[2..]);
        assert_eq!(b, [0xAA, 0xAA, 7, 0, 0xAA, 0xAA]);
    }

    #[test]
    fn test_bool_accepts_any_nonzero_byte() {
        assert!(bool::get(&[2]));
        assert!(!bool::get(&[0]));

        let mut b = [9u8];
        false.put(&mut b);
        assert_eq!(b, [0]);
    }

    #[test]
    fn test_float_bits_survive() {
        let mut b = [0u8; 8];
        let v = -0.0f64;
        v.put(&mut b);
        assert_eq!(f64::get(&b).to_bits(), v.to_bits());
    }
}
