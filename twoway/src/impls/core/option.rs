use crate::{engine::strategy::transfer_optional, Engine, Shape, Transfer};

impl<T: Transfer + Default> Transfer for Option<T> {
    const SHAPE: Shape = Shape::Optional;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        transfer_optional(self, engine)
    }
}

#[cfg(test)]
mod tests {
    use rancor::Error;

    use crate::{
        alloc::{boxed::Box, string::ToString, vec, vec::Vec},
        api::test::{encode, roundtrip, try_decode},
        from_bytes_into,
    };

    #[test]
    fn roundtrip_option() {
        roundtrip(&mut Some(42u32));
        roundtrip(&mut None::<u32>);
        roundtrip(&mut Some(Some(vec![1u8, 2])));
        roundtrip(&mut Some(Box::new(7i64)));
    }

    #[test]
    fn absent_value_is_a_single_flag() {
        assert_eq!(encode(&mut None::<u64>), [0]);

        let bytes = encode(&mut Some(5u8));
        assert_eq!(bytes, [1, 5]);
    }

    #[test]
    fn decode_replaces_presence() {
        let bytes = encode(&mut None::<Vec<u8>>);
        let mut value = Some(vec![1u8, 2, 3]);
        from_bytes_into::<_, Error>(&mut value, &bytes).unwrap();
        assert_eq!(value, None);

        let bytes = encode(&mut Some(vec![9u8]));
        from_bytes_into::<_, Error>(&mut value, &bytes).unwrap();
        assert_eq!(value, Some(vec![9]));
    }

    #[test]
    fn invalid_flag() {
        let err = try_decode::<Option<u8>>(&[2, 0]).unwrap_err();
        assert!(err.to_string().contains("invalid bool"));
    }
}
