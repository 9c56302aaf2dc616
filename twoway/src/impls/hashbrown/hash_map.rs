use core::hash::{BuildHasher, Hash};

use hashbrown::HashMap;

use crate::{
    alloc::vec::Vec, engine::strategy::transfer_associative,
    shape::Associative, Engine, Shape, Transfer,
};

impl<K, V, S> Associative for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (K, V);

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        HashMap::clear(self);
    }

    #[inline]
    fn insert(&mut self, (key, value): (K, V)) {
        HashMap::insert(self, key, value);
    }

    fn take_entries(&mut self) -> Vec<(K, V)> {
        self.drain().collect()
    }
}

impl<K, V, S> Transfer for HashMap<K, V, S>
where
    K: Transfer + Default + Eq + Hash,
    V: Transfer + Default,
    S: BuildHasher,
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
    use hashbrown::HashMap;

    use crate::{
        alloc::string::{String, ToString},
        api::test::{encode, roundtrip_with},
    };

    #[test]
    fn roundtrip_hash_map() {
        let mut value = HashMap::new();
        value.insert(1u32, "one".to_string());
        value.insert(2, "two".to_string());
        value.insert(3, String::new());

        roundtrip_with(&mut value, |a, b| {
            assert_eq!(a.len(), b.len());
            for (key, value) in a.iter() {
                assert_eq!(b.get(key), Some(value));
            }
        });
    }

    #[cfg(feature = "std")]
    #[test]
    fn matches_std_layout_for_one_entry() {
        let mut brown = HashMap::new();
        brown.insert(9u8, 'z');
        let mut from_std = std::collections::HashMap::new();
        from_std.insert(9u8, 'z');

        assert_eq!(encode(&mut brown), encode(&mut from_std));
    }
}
