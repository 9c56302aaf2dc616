use core::hash::{BuildHasher, Hash};
use std::collections::HashSet;

use crate::{
    alloc::vec::Vec, engine::strategy::transfer_associative,
    shape::Associative, Engine, Shape, Transfer,
};

impl<T, S> Associative for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        HashSet::clear(self);
    }

    #[inline]
    fn insert(&mut self, item: T) {
        HashSet::insert(self, item);
    }

    fn take_entries(&mut self) -> Vec<T> {
        self.drain().collect()
    }
}

impl<T, S> Transfer for HashSet<T, S>
where
    T: Transfer + Default + Eq + Hash,
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
