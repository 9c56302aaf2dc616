use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

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
