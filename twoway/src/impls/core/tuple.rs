use crate::{Engine, Shape, Transfer};

macro_rules! impl_tuple {
    ($shape:ident; $($ty:ident $index:tt),+ $(,)?) => {
        impl<$($ty: Transfer),+> Transfer for ($($ty,)+) {
            const SHAPE: Shape = Shape::$shape;

            #[inline]
            fn transfer<E: Engine + ?Sized>(
                &mut self,
                engine: &mut E,
            ) -> Result<(), E::Error> {
                $(self.$index.transfer(engine)?;)+
                Ok(())
            }
        }
    };
}

impl_tuple!(Tuple; T0 0);
impl_tuple!(KeyValuePair; K 0, V 1);
impl_tuple!(Tuple; T0 0, T1 1, T2 2);
impl_tuple!(Tuple; T0 0, T1 1, T2 2, T3 3);
impl_tuple!(Tuple; T0 0, T1 1, T2 2, T3 3, T4 4);
impl_tuple!(Tuple; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5);
impl_tuple!(Tuple; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6);
impl_tuple!(Tuple; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7);
impl_tuple!(Tuple; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8);
impl_tuple!(
    Tuple; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9,
);
impl_tuple!(
    Tuple; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9,
    T10 10,
);
impl_tuple!(
    Tuple; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9,
    T10 10, T11 11,
);

#[cfg(test)]
mod tests {
    use crate::{
        alloc::{string::String, vec, vec::Vec},
        api::test::{encode, roundtrip},
        Shape, Transfer,
    };

    #[test]
    fn roundtrip_tuples() {
        roundtrip(&mut (1u8,));
        roundtrip(&mut (1u8, String::from("one")));
        roundtrip(&mut (1u8, -2i16, 3u32, vec![4u64], 'x', false));
        roundtrip(&mut (
            0u8, 1u16, 2u32, 3u64, 4i8, 5i16, 6i32, 7i64, 8.0f32, 9.0f64, 'a',
            true,
        ));
    }

    #[test]
    fn key_value_pair_has_no_framing() {
        let bytes = encode(&mut (3u16, 4u32));
        let mut expected = Vec::new();
        expected.extend_from_slice(&3u16.to_ne_bytes());
        expected.extend_from_slice(&4u32.to_ne_bytes());
        assert_eq!(bytes, expected);

        assert_eq!(<(u8, u8) as Transfer>::SHAPE, Shape::KeyValuePair);
        assert_eq!(<(u8, u8, u8) as Transfer>::SHAPE, Shape::Tuple);
    }
}
