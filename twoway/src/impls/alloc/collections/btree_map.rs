use core::mem;

use crate::{
    alloc::{collections::BTreeMap, vec::Vec},
    engine::strategy::transfer_associative,
    shape::Associative,
    Engine, Shape, Transfer,
};

impl<K: Ord, V> Associative for BTreeMap<K, V> {
    type Item = (K, V);

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    #[inline]
    fn insert(&mut self, (key, value): (K, V)) {
        BTreeMap::insert(self, key, value);
    }

    fn take_entries(&mut self) -> Vec<(K, V)> {
        mem::take(self).into_iter().collect()
    }

    fn restore_entries(&mut self, entries: Vec<(K, V)>) {
        *self = entries.into_iter().collect();
    }
}

impl<K, V> Transfer for BTreeMap<K, V>
where
    K: Transfer + Default + Ord,
    V: Transfer + Default,
{
    const SHAPE: Shape = Shape::Associative;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        transfer_associative(self, engine)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        alloc::{
            collections::BTreeMap,
            string::{String, ToString},
            vec::Vec,
        },
        api::test::{encode, roundtrip},
        stream::Buffer,
        to_bytes_in,
    };

    #[test]
    fn roundtrip_btree_map() {
        let mut value = BTreeMap::new();
        value.insert("a".to_string(), 1u32);
        value.insert("b".to_string(), 2);
        value.insert("c".to_string(), 3);
        roundtrip(&mut value);

        roundtrip(&mut BTreeMap::<u8, Vec<u8>>::new());
    }

    #[test]
    fn entries_are_key_value_pairs() {
        let mut value = BTreeMap::from([(1u8, 10u16), (2, 20)]);
        let bytes = encode(&mut value);

        let mut expected = 2u32.to_ne_bytes().to_vec();
        expected.extend_from_slice(&[1]);
        expected.extend_from_slice(&10u16.to_ne_bytes());
        expected.extend_from_slice(&[2]);
        expected.extend_from_slice(&20u16.to_ne_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn failed_encode_keeps_entries() {
        let mut value = BTreeMap::from([
            (1u32, String::from("one")),
            (2, String::from("two")),
        ]);
        let mut bytes = [0u8; 10];

        let result = to_bytes_in::<_, _, rancor::Error>(
            &mut value,
            Buffer::from(&mut bytes),
        );
        assert!(result.is_err());
        assert_eq!(value.len(), 2);
        assert_eq!(value[&2], "two");
    }

    #[cfg(feature = "std")]
    #[test]
    fn panicking_encode_keeps_entries() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut value = BTreeMap::from([(1u32, 2u32), (3, 4)]);
        let mut bytes = [0u8; 6];

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _ = to_bytes_in::<_, _, rancor::Panic>(
                &mut value,
                Buffer::from(&mut bytes),
            );
        }));
        assert!(result.is_err());
        assert_eq!(value, BTreeMap::from([(1, 2), (3, 4)]));
    }
}
