use crate::{
    alloc::collections::LinkedList, engine::strategy::transfer_node,
    shape::NodeSequence, Engine, Shape, Transfer,
};

impl<T> NodeSequence for LinkedList<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    #[inline]
    fn push_back(&mut self, item: T) {
        LinkedList::push_back(self, item);
    }

    #[inline]
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        LinkedList::iter_mut(self)
    }
}

impl<T: Transfer + Default> Transfer for LinkedList<T> {
    const SHAPE: Shape = Shape::NodeSequence;

    #[inline]
    fn transfer<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<(), E::Error> {
        transfer_node(self, engine)
    }
}
