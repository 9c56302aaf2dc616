use core::mem;

use crate::{
    alloc::{collections::BTreeSet, vec::Vec},
    engine::strategy::transfer_associative,
    shape::Associative,
    Engine, Shape, Transfer,
};

impl<T: Ord> Associative for BTreeSet<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        BTreeSet::clear(self);
    }

    #[inline]
    fn insert(&mut self, item: T) {
        BTreeSet::insert(self, item);
    }

    fn take_entries(&mut self) -> Vec<T> {
        mem::take(self).into_iter().collect()
    }

    fn restore_entries(&mut self, entries: Vec<T>) {
        *self = entries.into_iter().collect();
    }
}

impl<T: Transfer + Default + Ord> Transfer for BTreeSet<T> {
    const SHAPE: Shape = Shape::Associative;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        transfer_associative(self, engine)
    }
}
