use core::{
    marker::{PhantomData, PhantomPinned},
    mem::size_of,
};

use rancor::{fail, Source};

use crate::{
    error::{IntegerOverflow, InvalidBool, InvalidChar},
    shape::Scalar,
    Engine, Shape, Transfer,
};

macro_rules! impl_native_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                type Bytes = [u8; size_of::<$ty>()];

                #[inline]
                fn to_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                #[inline]
                fn from_bytes<E: Source>(bytes: Self::Bytes) -> Result<Self, E> {
                    Ok(<$ty>::from_ne_bytes(bytes))
                }
            }

            impl_transfer_scalar!($ty);
        )*
    };
}

impl_native_scalar! {
    i8, i16, i32, i64, i128,
    u8, u16, u32, u64, u128,
    f32, f64,
}

impl Scalar for bool {
    type Bytes = [u8; 1];

    #[inline]
    fn to_bytes(self) -> Self::Bytes {
        [self as u8]
    }

    #[inline]
    fn from_bytes<E: Source>(bytes: Self::Bytes) -> Result<Self, E> {
        match bytes[0] {
            0 => Ok(false),
            1 => Ok(true),
            byte => fail!(InvalidBool { byte }),
        }
    }
}

impl Scalar for char {
    type Bytes = [u8; 4];

    #[inline]
    fn to_bytes(self) -> Self::Bytes {
        u32::from(self).to_ne_bytes()
    }

    #[inline]
    fn from_bytes<E: Source>(bytes: Self::Bytes) -> Result<Self, E> {
        let value = u32::from_ne_bytes(bytes);
        match char::from_u32(value) {
            Some(c) => Ok(c),
            None => fail!(InvalidChar { value }),
        }
    }
}

impl_transfer_scalar!(bool, char);

// Pointer-sized integers always take 8 bytes so that the layout does not
// depend on the target.

impl Scalar for usize {
    type Bytes = [u8; 8];

    #[inline]
    fn to_bytes(self) -> Self::Bytes {
        (self as u64).to_ne_bytes()
    }

    #[inline]
    fn from_bytes<E: Source>(bytes: Self::Bytes) -> Result<Self, E> {
        match usize::try_from(u64::from_ne_bytes(bytes)) {
            Ok(value) => Ok(value),
            Err(_) => fail!(IntegerOverflow { type_name: "usize" }),
        }
    }
}

impl Scalar for isize {
    type Bytes = [u8; 8];

    #[inline]
    fn to_bytes(self) -> Self::Bytes {
        (self as i64).to_ne_bytes()
    }

    #[inline]
    fn from_bytes<E: Source>(bytes: Self::Bytes) -> Result<Self, E> {
        match isize::try_from(i64::from_ne_bytes(bytes)) {
            Ok(value) => Ok(value),
            Err(_) => fail!(IntegerOverflow { type_name: "isize" }),
        }
    }
}

impl_transfer_scalar!(usize, isize);

// Zero-sized types

macro_rules! impl_transfer_empty {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Transfer for $ty {
                const SHAPE: Shape = Shape::Empty;

                #[inline]
                fn transfer<E: Engine + ?Sized>(
                    &mut self,
                    _: &mut E,
                ) -> Result<(), E::Error> {
                    Ok(())
                }
            }
        )*
    };
}

impl_transfer_empty!((), PhantomPinned);

impl<T: ?Sized> Transfer for PhantomData<T> {
    const SHAPE: Shape = Shape::Empty;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        _: &mut E,
    ) -> Result<(), E::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use crate::{
        alloc::string::ToString,
        api::test::{encode, roundtrip, try_decode},
        Shape, Transfer,
    };

    #[test]
    fn roundtrip_integers() {
        roundtrip(&mut -12i8);
        roundtrip(&mut 0x1234i16);
        roundtrip(&mut -0x1234_5678i32);
        roundtrip(&mut i64::MIN);
        roundtrip(&mut i128::MAX);
        roundtrip(&mut 0xffu8);
        roundtrip(&mut 0xbeefu16);
        roundtrip(&mut u32::MAX);
        roundtrip(&mut 0x0123_4567_89ab_cdefu64);
        roundtrip(&mut (u128::MAX - 1));
        roundtrip(&mut usize::MAX);
        roundtrip(&mut isize::MIN);
    }

    #[test]
    fn roundtrip_floats() {
        roundtrip(&mut 1.5f32);
        roundtrip(&mut -0.0f64);
        roundtrip(&mut f64::INFINITY);

        let bytes = encode(&mut f32::NAN);
        assert!(crate::api::test::decode::<f32>(&bytes).is_nan());
    }

    #[test]
    fn scalars_use_native_byte_image() {
        assert_eq!(encode(&mut 0x0102_0304u32), 0x0102_0304u32.to_ne_bytes());
        assert_eq!(encode(&mut 2.5f64), 2.5f64.to_ne_bytes());
        assert_eq!(encode(&mut true), [1]);
        assert_eq!(encode(&mut 'a'), ('a' as u32).to_ne_bytes());
        assert_eq!(encode(&mut 3usize), 3u64.to_ne_bytes());
    }

    #[test]
    fn invalid_bool() {
        let err = try_decode::<bool>(&[2]).unwrap_err();
        assert!(err.to_string().contains("invalid bool byte 0x02"));
    }

    #[test]
    fn invalid_char() {
        let err = try_decode::<char>(&0xd800u32.to_ne_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid char value 0xd800"));

        roundtrip(&mut '\u{1f980}');
    }

    #[test]
    fn empty_types() {
        assert!(encode(&mut ()).is_empty());
        assert!(encode(&mut PhantomData::<u64>).is_empty());
        assert_eq!(<() as Transfer>::SHAPE, Shape::Empty);
        assert_eq!(<u8 as Transfer>::SHAPE, Shape::Scalar);
    }
}
