use core::mem;

use crate::{
    alloc::{collections::BinaryHeap, vec::Vec},
    engine::strategy::transfer_associative,
    shape::Associative,
    Engine, Shape, Transfer,
};

impl<T: Ord> Associative for BinaryHeap<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        BinaryHeap::clear(self);
    }

    #[inline]
    fn insert(&mut self, item: T) {
        self.push(item);
    }

    fn take_entries(&mut self) -> Vec<T> {
        mem::take(self).into_vec()
    }

    fn restore_entries(&mut self, entries: Vec<T>) {
        *self = BinaryHeap::from(entries);
    }
}

impl<T: Transfer + Default + Ord> Transfer for BinaryHeap<T> {
    const SHAPE: Shape = Shape::Associative;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        transfer_associative(self, engine)
    }
}
