use rancor::{fail, Source};

use crate::{error::InvalidChar, shape::Scalar};

// rend primitives keep their declared byte order on the wire regardless of
// the host.

macro_rules! impl_rend_scalar {
    ($($to:ident / $from:ident: $($ty:ident => $native:ty),*;)*) => {
        $($(
            impl Scalar for rend::$ty {
                type Bytes = [u8; core::mem::size_of::<$native>()];

                #[inline]
                fn to_bytes(self) -> Self::Bytes {
                    self.to_native().$to()
                }

                #[inline]
                fn from_bytes<E: Source>(
                    bytes: Self::Bytes,
                ) -> Result<Self, E> {
                    Ok(Self::from_native(<$native>::$from(bytes)))
                }
            }

            impl_transfer_scalar!(rend::$ty);
        )*)*
    };
}

impl_rend_scalar! {
    to_le_bytes / from_le_bytes:
        i16_le => i16,
        i32_le => i32,
        i64_le => i64,
        i128_le => i128,
        u16_le => u16,
        u32_le => u32,
        u64_le => u64,
        u128_le => u128,
        f32_le => f32,
        f64_le => f64;
    to_be_bytes / from_be_bytes:
        i16_be => i16,
        i32_be => i32,
        i64_be => i64,
        i128_be => i128,
        u16_be => u16,
        u32_be => u32,
        u64_be => u64,
        u128_be => u128,
        f32_be => f32,
        f64_be => f64;
}

macro_rules! impl_rend_char {
    ($($ty:ident: $to:ident / $from:ident),* $(,)?) => {
        $(
            impl Scalar for rend::$ty {
                type Bytes = [u8; 4];

                #[inline]
                fn to_bytes(self) -> Self::Bytes {
                    u32::from(self.to_native()).$to()
                }

                #[inline]
                fn from_bytes<E: Source>(
                    bytes: Self::Bytes,
                ) -> Result<Self, E> {
                    let value = u32::$from(bytes);
                    match char::from_u32(value) {
                        Some(c) => Ok(Self::from_native(c)),
                        None => fail!(InvalidChar { value }),
                    }
                }
            }

            impl_transfer_scalar!(rend::$ty);
        )*
    };
}

impl_rend_char! {
    char_le: to_le_bytes / from_le_bytes,
    char_be: to_be_bytes / from_be_bytes,
}

#[cfg(test)]
mod tests {
    use core::fmt::Debug;

    use rancor::Error;
    use rend::*;

    use crate::{api::test::encode, from_bytes_into, Transfer};

    fn roundtrip_rend<T: Transfer + Debug + PartialEq + Copy>(
        mut value: T,
        mut dest: T,
    ) {
        let bytes = encode(&mut value);
        let rest = from_bytes_into::<_, Error>(&mut dest, &bytes).unwrap();
        assert!(rest.is_empty());
        assert_eq!(dest, value);
    }

    #[test]
    fn roundtrip_rend_primitives() {
        roundtrip_rend(i16_le::from_native(12345), i16_le::from_native(0));
        roundtrip_rend(
            i128_be::from_native(123456789012345678901234567890123456789),
            i128_be::from_native(0),
        );
        roundtrip_rend(u64_be::from_native(u64::MAX), u64_be::from_native(0));
        roundtrip_rend(f32_le::from_native(1.5), f32_le::from_native(0.0));
        roundtrip_rend(char_be::from_native('q'), char_be::from_native('a'));
    }

    #[test]
    fn fixed_byte_order() {
        assert_eq!(encode(&mut u32_le::from_native(1)), [1, 0, 0, 0]);
        assert_eq!(encode(&mut u32_be::from_native(1)), [0, 0, 0, 1]);
        assert_eq!(encode(&mut i16_be::from_native(-2)), [0xff, 0xfe]);
    }
}
